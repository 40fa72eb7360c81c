// パイプライン設定機能
// 注文件数、チャンネル容量、遅延上限の管理

pub mod implementations;

// 公開API
pub use implementations::{
    DefaultPipelineConfig, DEFAULT_MAX_DELAY_MS, DEFAULT_ORDER_COUNT, DEFAULT_QUEUE_CAPACITY,
};
