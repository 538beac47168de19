//! 规范化管道
//!
//! 前处理 → 准入检查 → 语言判定 → 操作符回退 → Tag → 解析 + 重排序 → Verbalize → 后处理

pub mod engine;
pub mod gate;

use std::fmt;

use crate::grammar::{FilterKind, TaggerKind, VerbalizerKind};

// 导出核心类型
pub use engine::{NormalizationOutcome, Normalizer, PipelineWarning};
pub use gate::should_normalize;

/// 外部阶段（用于错误定位）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Preprocess(FilterKind),
    Tag(TaggerKind),
    Verbalize(VerbalizerKind),
    Postprocess(FilterKind),
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Preprocess(kind) => write!(f, "preprocess ({})", kind),
            Stage::Tag(kind) => write!(f, "tag ({})", kind),
            Stage::Verbalize(kind) => write!(f, "verbalize ({})", kind),
            Stage::Postprocess(kind) => write!(f, "postprocess ({})", kind),
        }
    }
}
