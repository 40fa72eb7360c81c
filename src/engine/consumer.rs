// Consumer - 注文処理ワーカー機能

use crate::core::{types::Order, EventReporter, ProcessingBackend};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Consumer: チャンネルが閉じて空になるまで注文を処理
///
/// recv()がNoneを返すのはチャンネルが閉じられ、かつ滞留分を
/// 全て受け取り終えたときのみ。処理順は受信順と一致する
pub fn spawn_consumer<B, R>(
    mut order_rx: mpsc::Receiver<Order>,
    backend: Arc<B>,
    reporter: Arc<R>,
) -> tokio::task::JoinHandle<Result<usize>>
where
    B: ProcessingBackend + 'static,
    R: EventReporter + 'static,
{
    tokio::spawn(async move {
        let mut processed = 0usize;
        while let Some(order) = order_rx.recv().await {
            // 処理シミュレーション
            backend.process_order(&order).await;

            // 処理完了報告
            reporter.report_order_processed(&order).await;
            processed += 1;
        }
        Ok(processed)
    })
}
