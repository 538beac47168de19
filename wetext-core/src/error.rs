use thiserror::Error;

use crate::language::{Language, Operator};
use crate::pipeline::Stage;

/// 外部组件（语法、过滤器、加载器）返回的错误
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum WeTextError {
    // 标注串错误
    #[error("Malformed tagged text at byte {position}: {reason}")]
    MalformedTag { position: usize, reason: String },

    // 管道错误
    #[error("Unsupported combination: language={language}, operator={operator}")]
    UnsupportedCombination { language: Language, operator: Operator },

    #[error("Normalization failed at stage {stage}: {source}")]
    Normalization {
        stage: Stage,
        #[source]
        source: BoxError,
    },

    // 语法资源错误
    #[error("Grammar not loaded: {grammar}")]
    GrammarNotLoaded { grammar: String },

    #[error("Grammar load failed: {path} - {reason}")]
    GrammarLoad { path: String, reason: String },

    // 配置错误
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    // 其他错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WeTextError {
    pub(crate) fn malformed(position: usize, reason: impl Into<String>) -> Self {
        WeTextError::MalformedTag {
            position,
            reason: reason.into(),
        }
    }

    pub(crate) fn stage(stage: Stage, source: BoxError) -> Self {
        WeTextError::Normalization { stage, source }
    }
}

pub type WeTextResult<T> = Result<T, WeTextError>;
