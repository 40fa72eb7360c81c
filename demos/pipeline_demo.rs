use anyhow::Result;
use order_pipeline::{
    core::PipelineConfig,
    engine::{create_seeded_order_engine, run_with_engine, OrderEngine},
    services::{DefaultPipelineConfig, InstantBackend, MemoryEventReporter},
};

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== 注文パイプライン抽象化のデモ ===\n");

    // 1. シード固定エンジン（コンソール出力つき、再現可能な遅延）
    println!("1. シード固定エンジン（5件、遅延上限50ms）:");
    let config = DefaultPipelineConfig::default()
        .with_order_count(5)
        .with_max_delay_ms(50);
    let engine = create_seeded_order_engine(config, 42);
    let summary = run_with_engine(&engine).await?;
    println!(
        "  結果: {}件処理 / {}ms (平均 {:.1}ms/件)",
        summary.processed_orders, summary.total_elapsed_ms, summary.average_ms_per_order
    );

    println!();

    // 2. メモリレポーターでイベントを捕捉
    println!("2. メモリレポーターによるイベント捕捉（8件、遅延なし）:");
    let reporter = MemoryEventReporter::new();
    let capture_engine = OrderEngine::new(
        InstantBackend::new(),
        DefaultPipelineConfig::default().with_order_count(8),
        reporter.clone(),
    );
    capture_engine.run().await?;

    for event in reporter.events() {
        println!("  イベント: {event:?}");
    }

    println!();

    // 3. 容量より大きいバッチ（Generatorが待機しながら送出）
    println!("3. 容量超過バッチ（30件 vs 容量4）:");
    let small_queue = DefaultPipelineConfig::default()
        .with_order_count(30)
        .with_queue_capacity(4);
    println!(
        "  設定: 注文数={} / 容量={}",
        small_queue.order_count(),
        small_queue.queue_capacity()
    );
    let reporter = MemoryEventReporter::new();
    let burst_engine = OrderEngine::new(InstantBackend::new(), small_queue, reporter.clone());
    let summary = burst_engine.run().await?;
    println!(
        "  結果: {}件処理（イベント{}件記録）",
        summary.processed_orders,
        reporter.event_count()
    );

    Ok(())
}
