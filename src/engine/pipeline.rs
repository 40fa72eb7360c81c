// Pipeline - Generator-Consumer パイプライン
// メインパイプライン機能とオーケストレーション

use super::{consumer::spawn_consumer, generator::spawn_generator};
use crate::core::{
    types::Order, EventReporter, PipelineConfig, PipelineSummary, ProcessingBackend,
};
use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// 責任が明確に分離されたパイプライン
///
/// GeneratorとConsumerを一本の有界チャンネルで接続し、
/// 両タスクの完了を待ってからサマリーを返す
pub struct OrderPipeline<B> {
    backend: Arc<B>,
}

impl<B> OrderPipeline<B>
where
    B: ProcessingBackend + 'static,
{
    /// 新しいパイプラインを作成
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// 注文バッチを処理
    ///
    /// チャンネル容量は設定から取得する（1以上であること）
    pub async fn execute<C, R>(
        &self,
        orders: Vec<Order>,
        config: &C,
        reporter: Arc<R>,
    ) -> Result<PipelineSummary>
    where
        C: PipelineConfig,
        R: EventReporter + 'static,
    {
        let start_time = Instant::now();
        let total_orders = orders.len();

        // Generator-Consumerチャンネル構築
        let (order_tx, order_rx) = mpsc::channel::<Order>(config.queue_capacity());

        // Generator起動
        let generator_handle = spawn_generator(orders, order_tx, Arc::clone(&reporter));

        // Consumer起動
        let consumer_handle = spawn_consumer(
            order_rx,
            Arc::clone(&self.backend),
            Arc::clone(&reporter),
        );

        // 両タスクの完了を待機（残タスク数2 → 1 → 0）
        generator_handle.await??;
        let processed = consumer_handle.await??;

        // 完了報告は必ず最後のイベント
        reporter.report_pipeline_completed(processed).await;

        let total_elapsed_ms = start_time.elapsed().as_millis() as u64;
        let average_ms_per_order = if total_orders > 0 {
            total_elapsed_ms as f64 / total_orders as f64
        } else {
            0.0
        };

        Ok(PipelineSummary {
            total_orders,
            processed_orders: processed,
            total_elapsed_ms,
            average_ms_per_order,
        })
    }
}
