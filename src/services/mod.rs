// サービス層 - 機能別のビジネスロジック
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod config;
pub mod monitoring;
pub mod report;
pub mod simulation;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::{
    DefaultPipelineConfig, DEFAULT_MAX_DELAY_MS, DEFAULT_ORDER_COUNT, DEFAULT_QUEUE_CAPACITY,
};
pub use monitoring::{ConsoleEventReporter, MemoryEventReporter, NoOpEventReporter};
pub use report::{write_run_report, RunReport};
pub use simulation::{InstantBackend, RandomDelayBackend};
