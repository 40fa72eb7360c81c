// 高レベル公開API
// OrderPipelineを簡単に使用できるようにするための便利な関数

use super::OrderEngine;
use crate::core::{
    error::PipelineResult, types::Order, EventReporter, PipelineConfig, PipelineSummary,
    ProcessingBackend,
};
use crate::services::{
    ConsoleEventReporter, DefaultPipelineConfig, NoOpEventReporter, RandomDelayBackend,
};

// ========================================
// DI対応API - OrderEngineベース
// ========================================

/// 設定済みOrderEngineでパイプラインを実行（DI推奨）
///
/// 全ての依存関係が事前注入されたエンジンを使用する真のDI API
pub async fn run_with_engine<B, C, R>(
    engine: &OrderEngine<B, C, R>,
) -> PipelineResult<PipelineSummary>
where
    B: ProcessingBackend + 'static,
    C: PipelineConfig,
    R: EventReporter + 'static,
{
    engine.run().await
}

/// 設定済みOrderEngineで注文バッチを処理（DI推奨）
///
/// 注文生成を済ませた場合に使用する細かい制御用API
pub async fn run_orders_with_engine<B, C, R>(
    orders: Vec<Order>,
    engine: &OrderEngine<B, C, R>,
) -> PipelineResult<PipelineSummary>
where
    B: ProcessingBackend + 'static,
    C: PipelineConfig,
    R: EventReporter + 'static,
{
    engine.run_orders(orders).await
}

/// OrderEngine作成のヘルパー関数
///
/// デフォルト構成での簡単なエンジン作成（コンソール出力あり）
pub fn create_default_order_engine(
    config: DefaultPipelineConfig,
) -> OrderEngine<RandomDelayBackend, DefaultPipelineConfig, ConsoleEventReporter> {
    let backend = RandomDelayBackend::new(config.max_delay_ms());
    OrderEngine::new(backend, config, ConsoleEventReporter::new())
}

/// OrderEngine作成のヘルパー関数（静音版）
///
/// テストやバックグラウンド処理用の静音エンジン作成
pub fn create_quiet_order_engine(
    config: DefaultPipelineConfig,
) -> OrderEngine<RandomDelayBackend, DefaultPipelineConfig, NoOpEventReporter> {
    let backend = RandomDelayBackend::new(config.max_delay_ms());
    OrderEngine::new(backend, config, NoOpEventReporter::new())
}

/// OrderEngine作成のヘルパー関数（シード固定版）
///
/// 遅延系列を再現可能にするデモ・検証用エンジン作成
pub fn create_seeded_order_engine(
    config: DefaultPipelineConfig,
    seed: u64,
) -> OrderEngine<RandomDelayBackend, DefaultPipelineConfig, ConsoleEventReporter> {
    let backend = RandomDelayBackend::seeded(config.max_delay_ms(), seed);
    OrderEngine::new(backend, config, ConsoleEventReporter::new())
}
