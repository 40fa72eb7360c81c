// 処理シミュレーションの具象実装

use crate::core::types::Order;
use crate::core::ProcessingBackend;
use async_trait::async_trait;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::Mutex;
use std::time::Duration;

/// 一様乱数遅延による処理シミュレーション実装
///
/// 注文ごとに [0, max_delay_ms) ミリ秒の遅延をサンプリングして待機する。
/// RNGはMutexで保護し、awaitをまたいでロックは保持しない。
#[derive(Debug)]
pub struct RandomDelayBackend {
    max_delay_ms: u64,
    rng: Mutex<StdRng>,
}

impl RandomDelayBackend {
    /// エントロピー由来のシードで作成
    pub fn new(max_delay_ms: u64) -> Self {
        Self {
            max_delay_ms,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// 固定シードで作成（再現可能な遅延系列）
    pub fn seeded(max_delay_ms: u64, seed: u64) -> Self {
        Self {
            max_delay_ms,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// 遅延上限（ミリ秒）を取得
    pub fn max_delay_ms(&self) -> u64 {
        self.max_delay_ms
    }

    /// 次の遅延値をサンプリング
    ///
    /// 上限0の場合は常に0を返す（gen_rangeの空レンジ回避）
    pub fn sample_delay_ms(&self) -> u64 {
        if self.max_delay_ms == 0 {
            return 0;
        }
        self.rng.lock().unwrap().gen_range(0..self.max_delay_ms)
    }
}

#[async_trait]
impl ProcessingBackend for RandomDelayBackend {
    async fn process_order(&self, _order: &Order) {
        let delay_ms = self.sample_delay_ms();
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
    }
}

/// 遅延なしの処理シミュレーション実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct InstantBackend;

impl InstantBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessingBackend for InstantBackend {
    async fn process_order(&self, _order: &Order) {
        // 何もしない
    }
}
