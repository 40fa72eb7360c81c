// テストユーティリティ
// ゲート付きバックエンドと待機ヘルパー

use async_trait::async_trait;
use order_pipeline::core::{Order, ProcessingBackend};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

/// 許可が出るまで処理を止めるバックエンド
///
/// Consumerを意図的に停滞させ、Generator側の待機挙動を観測するために使う
#[derive(Clone)]
pub struct GatedBackend {
    gate: Arc<Semaphore>,
}

impl GatedBackend {
    /// 許可ゼロ（全注文が停止する状態）で作成
    pub fn new() -> Self {
        Self {
            gate: Arc::new(Semaphore::new(0)),
        }
    }

    /// n件分の処理を許可
    pub fn release(&self, n: usize) {
        self.gate.add_permits(n);
    }
}

#[async_trait]
impl ProcessingBackend for GatedBackend {
    async fn process_order(&self, _order: &Order) {
        let permit = self.gate.acquire().await.expect("ゲートは閉じない");
        permit.forget();
    }
}

/// 条件が成立するまでポーリング待機
pub async fn wait_until<F>(mut condition: F, timeout: Duration) -> bool
where
    F: FnMut() -> bool,
{
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}
