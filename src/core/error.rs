// 注文パイプライン専用のカスタムエラー型定義
// 注文の生成・受け渡し・処理そのものは常に成功する設計のため、
// ここで扱うのは設定とタスク合流まわりの周辺エラーのみ

use thiserror::Error;

/// パイプライン固有のエラー型
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("パイプライン設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("注文キューエラー: {message}")]
    QueueError { message: String },

    #[error("タスク合流エラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("パイプライン内部エラー: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl PipelineError {
    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// キューエラーの作成
    pub fn queue(message: impl Into<String>) -> Self {
        Self::QueueError {
            message: message.into(),
        }
    }

    /// タスク合流エラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::TaskError { source }
    }

    /// 内部エラーの作成
    pub fn internal(source: anyhow::Error) -> Self {
        Self::InternalError { source }
    }

    /// エラーの重要度を返す
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 設定不備とタスク喪失は実行開始・継続が不可能
            Self::ConfigurationError { .. } | Self::TaskError { .. } => ErrorSeverity::High,
            // キュー配線の失敗は呼び出し側で組み直せる
            Self::QueueError { .. } => ErrorSeverity::Medium,
            Self::InternalError { .. } => ErrorSeverity::Critical,
        }
    }

    /// 回復可能なエラーかどうか
    ///
    /// 回復可能＝同一プロセス内で再実行により解消しうるもの
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::QueueError { .. })
    }
}

/// エラーの重要度
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 記録のみで継続可能
    Low,
    /// 要注意だが実行は継続できる
    Medium,
    /// 当該実行は失敗として扱う
    High,
    /// プロセス全体の異常
    Critical,
}

impl ErrorSeverity {
    /// ログ表記用ラベルを取得
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// パイプラインの結果型
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;

impl From<anyhow::Error> for PipelineError {
    fn from(error: anyhow::Error) -> Self {
        PipelineError::InternalError { source: error }
    }
}

impl From<tokio::task::JoinError> for PipelineError {
    fn from(error: tokio::task::JoinError) -> Self {
        PipelineError::TaskError { source: error }
    }
}
