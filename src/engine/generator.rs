// Generator - 注文生成と発行機能

use crate::core::{types::Order, EventReporter};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

/// 指定された件数の注文バッチを生成
///
/// IDは1から昇順に採番され、全件が初期ステータスを持つ
pub fn generate_orders(count: usize) -> Vec<Order> {
    (1..=count as u64).map(Order::new).collect()
}

/// Generator: 注文をチャンネルへ発行
///
/// チャンネルが満杯の間は送信側が待機する。最後の注文を発行した後に
/// 送信側をドロップして一度だけチャンネルを閉じ、その後に発行完了を報告する
pub fn spawn_generator<R>(
    orders: Vec<Order>,
    order_tx: mpsc::Sender<Order>,
    reporter: Arc<R>,
) -> tokio::task::JoinHandle<Result<()>>
where
    R: EventReporter + 'static,
{
    tokio::spawn(async move {
        let count = orders.len();
        for order in orders {
            if (order_tx.send(order).await).is_err() {
                // 受信側が先に閉じられた場合は正常終了
                break;
            }
        }
        // order_txをドロップしてチャンネル終了シグナル
        drop(order_tx);
        reporter.report_orders_generated(count).await;
        Ok(())
    })
}
