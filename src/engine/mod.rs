// エンジン層 - 並行処理とオーケストレーション
// サービス層を組み合わせて高レベルな処理を提供

pub mod api;
pub mod consumer;
pub mod generator;
pub mod order_engine;
mod pipeline; // OrderEngine内部でのみ使用

// 公開API - 主要エンジンクラス
pub use api::{
    create_default_order_engine, create_quiet_order_engine, create_seeded_order_engine,
    run_orders_with_engine, run_with_engine,
};
pub use generator::generate_orders;
pub use order_engine::OrderEngine;
