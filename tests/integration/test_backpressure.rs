// 有界チャンネルの逆圧統合テスト
// 容量を超えるバッチでGeneratorが待機し、空きが出ると再開することを検証する

use crate::fixtures::{wait_until, GatedBackend};
use order_pipeline::{
    core::PipelineEvent,
    engine::OrderEngine,
    services::{DefaultPipelineConfig, MemoryEventReporter},
};
use std::time::Duration;
use tokio::time::timeout;

#[tokio::test]
async fn test_generator_blocks_when_batch_exceeds_capacity() {
    // 25件 vs 容量20：Consumerが止まっている間、Generatorは
    // 最大でも21件（Consumer保持1件＋バッファ20件）しか送出できない
    let backend = GatedBackend::new();
    let reporter = MemoryEventReporter::new();
    let config = DefaultPipelineConfig::default()
        .with_order_count(25)
        .with_queue_capacity(20)
        .with_max_delay_ms(0);
    let engine = OrderEngine::new(backend.clone(), config, reporter.clone());

    let run = tokio::spawn(async move { engine.run().await });

    // Generatorが20件目以降で待機している間はイベントが一切出ない
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(reporter.event_count(), 0);

    // Consumerを解放するとGeneratorが再開し、全件が処理される
    backend.release(25);

    let summary = timeout(Duration::from_secs(10), run)
        .await
        .unwrap()
        .unwrap()
        .unwrap();

    assert_eq!(summary.processed_orders, 25);
    assert_eq!(reporter.processed_ids(), (1..=25).collect::<Vec<u64>>());

    let events = reporter.events();
    assert_eq!(
        events.last(),
        Some(&PipelineEvent::PipelineCompleted { processed: 25 })
    );
}

#[tokio::test]
async fn test_default_batch_fills_queue_without_blocking() {
    // 20件 vs 容量20：Consumerが1件も処理しなくても全件送出が完了する
    let backend = GatedBackend::new();
    let reporter = MemoryEventReporter::new();
    let config = DefaultPipelineConfig::default()
        .with_order_count(20)
        .with_queue_capacity(20)
        .with_max_delay_ms(0);
    let engine = OrderEngine::new(backend.clone(), config, reporter.clone());

    let run = tokio::spawn(async move { engine.run().await });

    // Consumer停止中でも発行完了イベントが出る
    let generated = wait_until(
        || {
            reporter
                .events()
                .iter()
                .any(|e| matches!(e, PipelineEvent::OrdersGenerated { count: 20 }))
        },
        Duration::from_secs(5),
    )
    .await;
    assert!(generated);
    assert!(reporter.processed_ids().is_empty());

    backend.release(20);

    let summary = timeout(Duration::from_secs(10), run)
        .await
        .unwrap()
        .unwrap()
        .unwrap();

    assert_eq!(summary.processed_orders, 20);
}
