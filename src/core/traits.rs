// 注文パイプラインのトレイト定義
// 全ての抽象化インターフェースを定義

use super::types::Order;
use async_trait::async_trait;
use mockall::automock;

/// パイプラインの設定を抽象化するトレイト
#[automock]
pub trait PipelineConfig: Send + Sync {
    /// 生成する注文数を取得
    fn order_count(&self) -> usize;

    /// 注文チャンネルの容量を取得
    fn queue_capacity(&self) -> usize;

    /// 処理シミュレーションの遅延上限をミリ秒で取得（この値自体は含まない）
    fn max_delay_ms(&self) -> u64;
}

// PipelineConfig for Box<dyn PipelineConfig>
impl PipelineConfig for Box<dyn PipelineConfig> {
    fn order_count(&self) -> usize {
        self.as_ref().order_count()
    }

    fn queue_capacity(&self) -> usize {
        self.as_ref().queue_capacity()
    }

    fn max_delay_ms(&self) -> u64 {
        self.as_ref().max_delay_ms()
    }
}

/// パイプラインイベント報告の抽象化トレイト
#[automock]
#[async_trait]
pub trait EventReporter: Send + Sync {
    /// 全注文の発行完了を報告（チャンネルを閉じた後に一度だけ呼ばれる）
    async fn report_orders_generated(&self, count: usize);

    /// 単一注文の処理完了を報告
    async fn report_order_processed(&self, order: &Order);

    /// パイプライン全体の完了を報告（必ず最後のイベント）
    async fn report_pipeline_completed(&self, processed: usize);
}

// EventReporter for Box<dyn EventReporter>
#[async_trait]
impl EventReporter for Box<dyn EventReporter> {
    async fn report_orders_generated(&self, count: usize) {
        self.as_ref().report_orders_generated(count).await
    }

    async fn report_order_processed(&self, order: &Order) {
        self.as_ref().report_order_processed(order).await
    }

    async fn report_pipeline_completed(&self, processed: usize) {
        self.as_ref().report_pipeline_completed(processed).await
    }
}

/// 注文ごとの処理ステップを抽象化するトレイト
///
/// 処理は常に成功する設計のため戻り値を持たない
#[automock]
#[async_trait]
pub trait ProcessingBackend: Send + Sync {
    /// 単一注文の処理を実行
    async fn process_order(&self, order: &Order);
}

// ProcessingBackend for Box<dyn ProcessingBackend>
#[async_trait]
impl ProcessingBackend for Box<dyn ProcessingBackend> {
    async fn process_order(&self, order: &Order) {
        self.as_ref().process_order(order).await
    }
}
