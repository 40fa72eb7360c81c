// イベント監視機能
// 発行完了の報告、注文処理の通知、全体完了の通知

pub mod implementations;

// 公開API
pub use implementations::{ConsoleEventReporter, MemoryEventReporter, NoOpEventReporter};
