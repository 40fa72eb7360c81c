// イベント報告の具象実装

use crate::core::types::{Order, PipelineEvent};
use crate::core::EventReporter;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// コンソール出力によるイベント報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleEventReporter {
    quiet: bool,
}

impl ConsoleEventReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

#[async_trait]
impl EventReporter for ConsoleEventReporter {
    async fn report_orders_generated(&self, _count: usize) {
        if !self.quiet {
            println!("Done with generating orders");
        }
    }

    async fn report_order_processed(&self, order: &Order) {
        if !self.quiet {
            println!("Processing order {}", order.id);
        }
    }

    async fn report_pipeline_completed(&self, _processed: usize) {
        if !self.quiet {
            println!("All operations completed. Exiting.");
        }
    }
}

/// 何もしないイベント報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpEventReporter;

impl NoOpEventReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventReporter for NoOpEventReporter {
    async fn report_orders_generated(&self, _count: usize) {
        // 何もしない
    }

    async fn report_order_processed(&self, _order: &Order) {
        // 何もしない
    }

    async fn report_pipeline_completed(&self, _processed: usize) {
        // 何もしない
    }
}

/// メモリ内記録のイベント報告実装（テスト用および開発用）
/// モックテストにも使用可能な完全機能実装
#[derive(Debug, Clone)]
pub struct MemoryEventReporter {
    events: Arc<Mutex<Vec<PipelineEvent>>>,
}

impl Default for MemoryEventReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryEventReporter {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// テスト用：記録されたイベントを発生順で取得
    pub fn events(&self) -> Vec<PipelineEvent> {
        self.events.lock().unwrap().clone()
    }

    /// テスト用：処理済み注文IDを発生順で取得
    pub fn processed_ids(&self) -> Vec<u64> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                PipelineEvent::OrderProcessed { id } => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// テスト用：記録されたイベント数を取得
    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// テスト用：記録クリア
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

#[async_trait]
impl EventReporter for MemoryEventReporter {
    async fn report_orders_generated(&self, count: usize) {
        self.events
            .lock()
            .unwrap()
            .push(PipelineEvent::OrdersGenerated { count });
    }

    async fn report_order_processed(&self, order: &Order) {
        self.events
            .lock()
            .unwrap()
            .push(PipelineEvent::OrderProcessed { id: order.id });
    }

    async fn report_pipeline_completed(&self, processed: usize) {
        self.events
            .lock()
            .unwrap()
            .push(PipelineEvent::PipelineCompleted { processed });
    }
}
