// イベント順序の統合テスト
// 発行完了→全体完了の順序と、処理IDの単調増加を検証する

use order_pipeline::{
    core::PipelineEvent,
    engine::OrderEngine,
    services::{DefaultPipelineConfig, MemoryEventReporter, RandomDelayBackend},
};
use std::time::Duration;
use tokio::time::timeout;

fn event_position(events: &[PipelineEvent], target: &PipelineEvent) -> Option<usize> {
    events.iter().position(|event| event == target)
}

#[tokio::test]
async fn test_generation_done_precedes_completion() {
    let config = DefaultPipelineConfig::default()
        .with_order_count(5)
        .with_max_delay_ms(3);
    let reporter = MemoryEventReporter::new();
    let engine = OrderEngine::new(
        RandomDelayBackend::seeded(3, 7),
        config,
        reporter.clone(),
    );

    timeout(Duration::from_secs(10), engine.run())
        .await
        .unwrap()
        .unwrap();

    let events = reporter.events();
    let generated_at = event_position(&events, &PipelineEvent::OrdersGenerated { count: 5 })
        .expect("発行完了イベントが記録される");
    let completed_at = event_position(&events, &PipelineEvent::PipelineCompleted { processed: 5 })
        .expect("全体完了イベントが記録される");

    // 発行完了は1回のみ、かつ全体完了より前
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, PipelineEvent::OrdersGenerated { .. }))
            .count(),
        1
    );
    assert!(generated_at < completed_at);
}

#[tokio::test]
async fn test_completion_event_always_last() {
    // 遅延の乱数によらず、全体完了イベントは常に最後
    for seed in 0..10u64 {
        let config = DefaultPipelineConfig::default()
            .with_order_count(5)
            .with_max_delay_ms(3);
        let reporter = MemoryEventReporter::new();
        let engine = OrderEngine::new(
            RandomDelayBackend::seeded(3, seed),
            config,
            reporter.clone(),
        );

        timeout(Duration::from_secs(10), engine.run())
            .await
            .unwrap()
            .unwrap();

        let events = reporter.events();
        assert_eq!(
            events.last(),
            Some(&PipelineEvent::PipelineCompleted { processed: 5 }),
            "seed={seed} で完了イベントが最後ではない"
        );
    }
}

#[tokio::test]
async fn test_processing_ids_strictly_increasing() {
    let config = DefaultPipelineConfig::default()
        .with_order_count(15)
        .with_max_delay_ms(4);
    let reporter = MemoryEventReporter::new();
    let engine = OrderEngine::new(
        RandomDelayBackend::seeded(4, 99),
        config,
        reporter.clone(),
    );

    timeout(Duration::from_secs(10), engine.run())
        .await
        .unwrap()
        .unwrap();

    // FIFOチャンネル越しでも処理IDは厳密に単調増加
    let ids = reporter.processed_ids();
    assert_eq!(ids.len(), 15);
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}
