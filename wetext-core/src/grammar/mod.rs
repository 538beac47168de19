//! 外部语法接口
//!
//! Tagger、Verbalizer 以及前后处理过滤器都是外部组件（通常是编译好的 FST），
//! 这里只定义核心需要的能力，以及按 (语言, 操作符, 变体) 选择它们的注册表。

pub mod kinds;
pub mod registry;

pub use kinds::{FilterKind, TaggerKind, VerbalizerKind};
pub use registry::{GrammarLoader, GrammarRegistry, GrammarRegistryBuilder};

use crate::error::BoxError;

/// Tagger：定位并分类文本片段，输出标注串
pub trait Tagger: Send + Sync {
    fn tag(&self, text: &str) -> Result<String, BoxError>;
}

/// Verbalizer：将重排序后的标注串渲染为文本
pub trait Verbalizer: Send + Sync {
    fn verbalize(&self, text: &str) -> Result<String, BoxError>;
}

/// 文本到文本的过滤器（繁简转换、全半角、语气词、标点、OOV 标注）
pub trait TextFilter: Send + Sync {
    fn apply(&self, text: &str) -> Result<String, BoxError>;
}

/// 用闭包实现的语法，可作为 Tagger、Verbalizer 或过滤器注册
pub struct FnGrammar<F> {
    f: F,
}

impl<F> FnGrammar<F>
where
    F: Fn(&str) -> Result<String, BoxError> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Tagger for FnGrammar<F>
where
    F: Fn(&str) -> Result<String, BoxError> + Send + Sync,
{
    fn tag(&self, text: &str) -> Result<String, BoxError> {
        (self.f)(text)
    }
}

impl<F> Verbalizer for FnGrammar<F>
where
    F: Fn(&str) -> Result<String, BoxError> + Send + Sync,
{
    fn verbalize(&self, text: &str) -> Result<String, BoxError> {
        (self.f)(text)
    }
}

impl<F> TextFilter for FnGrammar<F>
where
    F: Fn(&str) -> Result<String, BoxError> + Send + Sync,
{
    fn apply(&self, text: &str) -> Result<String, BoxError> {
        (self.f)(text)
    }
}
