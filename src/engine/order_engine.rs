// OrderEngine - コンストラクタベース依存性注入によるパイプライン実行エンジン
// 明示的な依存関係管理で、テスタブルで交換可能な設計

use super::generator::generate_orders;
use super::pipeline::OrderPipeline;
use crate::core::{
    EventReporter, PipelineConfig, PipelineError, PipelineResult, PipelineSummary,
    ProcessingBackend,
};
use crate::core::types::Order;
use std::sync::Arc;

/// コンストラクタベース依存性注入による注文処理エンジン
///
/// # 設計原則
/// - 依存関係はコンストラクタで明示的に注入
/// - 実行時の依存関係変更は不可（イミュータブル）
/// - テスト時はモックを注入可能
pub struct OrderEngine<B, C, R>
where
    B: ProcessingBackend + 'static,
    C: PipelineConfig,
    R: EventReporter + 'static,
{
    backend: Arc<B>,
    config: Arc<C>,
    reporter: Arc<R>,
}

impl<B, C, R> OrderEngine<B, C, R>
where
    B: ProcessingBackend + 'static,
    C: PipelineConfig,
    R: EventReporter + 'static,
{
    /// 新しいエンジンを作成（依存性注入）
    pub fn new(backend: B, config: C, reporter: R) -> Self {
        Self {
            backend: Arc::new(backend),
            config: Arc::new(config),
            reporter: Arc::new(reporter),
        }
    }

    /// 設定された件数の注文を生成して処理
    pub async fn run(&self) -> PipelineResult<PipelineSummary> {
        let orders = generate_orders(self.config.order_count());
        self.run_orders(orders).await
    }

    /// 指定された注文バッチを処理
    pub async fn run_orders(&self, orders: Vec<Order>) -> PipelineResult<PipelineSummary> {
        self.validate_config()?;

        let pipeline = OrderPipeline::new(Arc::clone(&self.backend));
        pipeline
            .execute(orders, self.config.as_ref(), Arc::clone(&self.reporter))
            .await
            .map_err(PipelineError::internal)
    }

    /// 設定の妥当性を検証
    fn validate_config(&self) -> PipelineResult<()> {
        // 容量0のチャンネルは構築できない
        if self.config.queue_capacity() == 0 {
            return Err(PipelineError::configuration(
                "チャンネル容量は1以上である必要があります",
            ));
        }
        Ok(())
    }

    /// 設定への参照を取得
    pub fn config(&self) -> &C {
        &self.config
    }

    /// レポーターへの参照を取得
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// バックエンドへの参照を取得
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
