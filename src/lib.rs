pub mod cli;
pub mod core;
pub mod engine;
pub mod services;

// 公開API - 主要型と便利関数を明示的にエクスポート
pub use crate::core::{
    ErrorSeverity, EventReporter, Order, PipelineConfig, PipelineError, PipelineEvent,
    PipelineResult, PipelineSummary, ProcessingBackend, PENDING_STATUS,
};
pub use crate::engine::{
    create_default_order_engine, create_quiet_order_engine, create_seeded_order_engine,
    generate_orders, run_orders_with_engine, run_with_engine, OrderEngine,
};
pub use crate::services::{
    write_run_report, ConsoleEventReporter, DefaultPipelineConfig, InstantBackend,
    MemoryEventReporter, NoOpEventReporter, RandomDelayBackend, RunReport,
    DEFAULT_MAX_DELAY_MS, DEFAULT_ORDER_COUNT, DEFAULT_QUEUE_CAPACITY,
};
