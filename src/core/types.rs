// 注文パイプラインのデータ型定義

/// 生成直後の注文に与えられるステータスラベル
pub const PENDING_STATUS: &str = "Pending";

/// パイプラインを流れる注文
///
/// statusは生成時に一度だけ設定され、以降は遷移しない
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Order {
    pub id: u64,
    pub status: String,
}

impl Order {
    /// 初期ステータス付きの注文を作成
    pub fn new(id: u64) -> Self {
        Self {
            id,
            status: PENDING_STATUS.to_string(),
        }
    }
}

/// パイプラインが外部へ報告する観測イベント
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PipelineEvent {
    /// 全注文の発行が完了しチャンネルが閉じられた
    OrdersGenerated { count: usize },
    /// 単一注文の処理が完了した
    OrderProcessed { id: u64 },
    /// GeneratorとConsumerの両方が完了した
    PipelineCompleted { processed: usize },
}

/// 実行全体のサマリー
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PipelineSummary {
    pub total_orders: usize,
    pub processed_orders: usize,
    pub total_elapsed_ms: u64,
    pub average_ms_per_order: f64,
}
