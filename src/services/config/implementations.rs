// 設定管理の具象実装

use crate::core::PipelineConfig;

/// デフォルトの注文件数
pub const DEFAULT_ORDER_COUNT: usize = 20;
/// デフォルトのチャンネル容量
pub const DEFAULT_QUEUE_CAPACITY: usize = 20;
/// デフォルトの処理遅延上限（ミリ秒、上限値は含まない）
pub const DEFAULT_MAX_DELAY_MS: u64 = 500;

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultPipelineConfig {
    order_count: usize,
    queue_capacity: usize,
    max_delay_ms: u64,
}

impl DefaultPipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order_count(mut self, order_count: usize) -> Self {
        self.order_count = order_count;
        self
    }

    pub fn with_queue_capacity(mut self, queue_capacity: usize) -> Self {
        self.queue_capacity = queue_capacity;
        self
    }

    pub fn with_max_delay_ms(mut self, max_delay_ms: u64) -> Self {
        self.max_delay_ms = max_delay_ms;
        self
    }
}

impl Default for DefaultPipelineConfig {
    fn default() -> Self {
        Self {
            order_count: DEFAULT_ORDER_COUNT,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            max_delay_ms: DEFAULT_MAX_DELAY_MS,
        }
    }
}

impl PipelineConfig for DefaultPipelineConfig {
    fn order_count(&self) -> usize {
        self.order_count
    }

    fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }

    fn max_delay_ms(&self) -> u64 {
        self.max_delay_ms
    }
}
