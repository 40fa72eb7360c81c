// 処理シミュレーション機能
// 注文処理にかかる時間を乱数遅延で模擬する

pub mod implementations;

// 公開API
pub use implementations::{InstantBackend, RandomDelayBackend};
