// 実行レポートのJSON出力

use crate::core::{PipelineConfig, PipelineSummary};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 1回のパイプライン実行の記録
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub generated_at: String,
    pub order_count: usize,
    pub queue_capacity: usize,
    pub max_delay_ms: u64,
    pub summary: PipelineSummary,
}

impl RunReport {
    /// 実行時の設定とサマリーからレポートを作成
    pub fn new<C: PipelineConfig>(config: &C, summary: PipelineSummary) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            order_count: config.order_count(),
            queue_capacity: config.queue_capacity(),
            max_delay_ms: config.max_delay_ms(),
            summary,
        }
    }
}

/// レポートをJSONファイルとして書き出す
pub async fn write_run_report<P: AsRef<Path>>(path: P, report: &RunReport) -> Result<()> {
    let path = path.as_ref();

    // 親ディレクトリが存在しない場合は作成
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| anyhow::anyhow!("ディレクトリ作成エラー: {e}"))?;
    }

    let json_str = serde_json::to_string_pretty(report)
        .map_err(|e| anyhow::anyhow!("JSON変換エラー: {e}"))?;

    tokio::fs::write(path, json_str)
        .await
        .map_err(|e| anyhow::anyhow!("ファイル書き込みエラー: {e}"))?;

    Ok(())
}
