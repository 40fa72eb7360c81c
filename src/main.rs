use anyhow::Result;
use clap::Parser;

// パイプラインAPIをインポート
use order_pipeline::{
    cli::Cli,
    core::PipelineConfig,
    engine::OrderEngine,
    services::{
        write_run_report, ConsoleEventReporter, DefaultPipelineConfig, RandomDelayBackend,
        RunReport,
    },
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. パイプライン設定構築
    let config = DefaultPipelineConfig::new()
        .with_order_count(cli.count)
        .with_queue_capacity(cli.capacity)
        .with_max_delay_ms(cli.max_delay_ms);

    if !cli.quiet {
        println!("🚀 注文処理パイプライン - Generator/Consumer版");
        println!("⚙️  設定:");
        println!("   - 注文数: {}", config.order_count());
        println!("   - チャンネル容量: {}", config.queue_capacity());
        println!("   - 遅延上限: {}ms", config.max_delay_ms());
        if let Some(seed) = cli.seed {
            println!("   - シード: {seed}");
        }
    }

    // 2. パイプラインエンジン構築
    let backend = match cli.seed {
        Some(seed) => RandomDelayBackend::seeded(cli.max_delay_ms, seed),
        None => RandomDelayBackend::new(cli.max_delay_ms),
    };
    let reporter = if cli.quiet {
        ConsoleEventReporter::quiet()
    } else {
        ConsoleEventReporter::new()
    };
    let engine = OrderEngine::new(backend, config, reporter);

    // 3. パイプライン実行（完了行が標準出力の最終行）
    let summary = match engine.run().await {
        Ok(summary) => summary,
        Err(error) => {
            eprintln!("❌ エラー: {error}");
            std::process::exit(1);
        }
    };

    // 4. 実行レポート出力（任意、標準出力には何も出さない）
    if let Some(report_path) = cli.report {
        let report = RunReport::new(engine.config(), summary);
        write_run_report(&report_path, &report).await?;
    }

    Ok(())
}
