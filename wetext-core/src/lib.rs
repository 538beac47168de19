//! WeText Core
//!
//! 中英文文本规范化（TN）与反向文本规范化（ITN）核心：
//! 标注串解析、字段重排序，以及串联外部语法的规范化管道

#![warn(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod config;
pub mod error;
pub mod grammar;
pub mod language;
pub mod pipeline;
pub mod token;

// Re-export key types
pub use config::{ConfigOverrides, NormalizerConfig, WeTextConfig};
pub use error::{BoxError, WeTextError, WeTextResult};
pub use grammar::{FnGrammar, GrammarLoader, GrammarRegistry, Tagger, TextFilter, Verbalizer};
pub use language::{Language, LanguageSelector, Operator};
pub use pipeline::{NormalizationOutcome, Normalizer, PipelineWarning};
pub use token::{
    Field, FieldOrderTable, FieldValue, SemioticToken, TaggedTokenParser, TextSegment, TokenReorderer,
};

/// 初始化日志系统
///
/// 默认静默；使用 --features debug-logs 编译后按 WETEXT_LOG 过滤（缺省 warn）
///
/// 注意: 此函数可以安全地多次调用
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("WETEXT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

        // 已经初始化过时 try_init 返回错误，忽略即可
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .try_init();
    }
}
