//! 语法注册表
//!
//! 启动时由调用方构造一次，之后只读共享（`Arc<GrammarRegistry>`）

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::error::{BoxError, WeTextError, WeTextResult};
use crate::grammar::kinds::{FilterKind, TaggerKind, VerbalizerKind};
use crate::grammar::{Tagger, TextFilter, Verbalizer};

/// 语法加载器：把语法文件路径变成句柄
///
/// 由执行引擎（例如 FST 运行时）的绑定实现
pub trait GrammarLoader {
    fn load_tagger(&self, path: &Path) -> Result<Arc<dyn Tagger>, BoxError>;

    fn load_verbalizer(&self, path: &Path) -> Result<Arc<dyn Verbalizer>, BoxError>;

    fn load_filter(&self, path: &Path) -> Result<Arc<dyn TextFilter>, BoxError>;
}

/// 语法注册表
#[derive(Default)]
pub struct GrammarRegistry {
    taggers: HashMap<TaggerKind, Arc<dyn Tagger>>,
    verbalizers: HashMap<VerbalizerKind, Arc<dyn Verbalizer>>,
    filters: HashMap<FilterKind, Arc<dyn TextFilter>>,
}

impl GrammarRegistry {
    pub fn builder() -> GrammarRegistryBuilder {
        GrammarRegistryBuilder::default()
    }

    /// 从语法目录加载
    ///
    /// 每种语法按约定的相对路径查找，文件不存在则跳过；
    /// 任何一个存在的文件加载失败都会返回 `GrammarLoad`
    pub fn load(dir: &Path, loader: &dyn GrammarLoader) -> WeTextResult<Self> {
        if !dir.is_dir() {
            return Err(WeTextError::GrammarLoad {
                path: dir.display().to_string(),
                reason: "grammar directory not found".to_string(),
            });
        }

        let mut builder = Self::builder();

        for kind in TaggerKind::ALL {
            let path = dir.join(kind.relative_path());
            if !path.is_file() {
                tracing::debug!("跳过缺失的 Tagger: {:?}", path);
                continue;
            }
            let tagger = loader.load_tagger(&path).map_err(|e| load_error(&path, e))?;
            builder.taggers.insert(kind, tagger);
        }

        for kind in VerbalizerKind::ALL {
            let path = dir.join(kind.relative_path());
            if !path.is_file() {
                tracing::debug!("跳过缺失的 Verbalizer: {:?}", path);
                continue;
            }
            let verbalizer = loader.load_verbalizer(&path).map_err(|e| load_error(&path, e))?;
            builder.verbalizers.insert(kind, verbalizer);
        }

        for kind in FilterKind::ALL {
            let path = dir.join(kind.relative_path());
            if !path.is_file() {
                tracing::debug!("跳过缺失的过滤器: {:?}", path);
                continue;
            }
            let filter = loader.load_filter(&path).map_err(|e| load_error(&path, e))?;
            builder.filters.insert(kind, filter);
        }

        let registry = builder.build();
        tracing::info!(
            "语法加载完成: {:?} (tagger={}, verbalizer={}, filter={})",
            dir,
            registry.taggers.len(),
            registry.verbalizers.len(),
            registry.filters.len()
        );

        Ok(registry)
    }

    pub fn tagger(&self, kind: TaggerKind) -> WeTextResult<&dyn Tagger> {
        self.taggers
            .get(&kind)
            .map(|tagger| tagger.as_ref())
            .ok_or_else(|| not_loaded(kind))
    }

    pub fn verbalizer(&self, kind: VerbalizerKind) -> WeTextResult<&dyn Verbalizer> {
        self.verbalizers
            .get(&kind)
            .map(|verbalizer| verbalizer.as_ref())
            .ok_or_else(|| not_loaded(kind))
    }

    pub fn filter(&self, kind: FilterKind) -> WeTextResult<&dyn TextFilter> {
        self.filters
            .get(&kind)
            .map(|filter| filter.as_ref())
            .ok_or_else(|| not_loaded(kind))
    }

    pub fn has_tagger(&self, kind: TaggerKind) -> bool {
        self.taggers.contains_key(&kind)
    }

    pub fn has_verbalizer(&self, kind: VerbalizerKind) -> bool {
        self.verbalizers.contains_key(&kind)
    }

    pub fn has_filter(&self, kind: FilterKind) -> bool {
        self.filters.contains_key(&kind)
    }
}

fn load_error(path: &Path, error: BoxError) -> WeTextError {
    WeTextError::GrammarLoad {
        path: path.display().to_string(),
        reason: error.to_string(),
    }
}

fn not_loaded(kind: impl std::fmt::Display) -> WeTextError {
    WeTextError::GrammarNotLoaded {
        grammar: kind.to_string(),
    }
}

/// 注册表构造器
#[derive(Default)]
pub struct GrammarRegistryBuilder {
    taggers: HashMap<TaggerKind, Arc<dyn Tagger>>,
    verbalizers: HashMap<VerbalizerKind, Arc<dyn Verbalizer>>,
    filters: HashMap<FilterKind, Arc<dyn TextFilter>>,
}

impl GrammarRegistryBuilder {
    pub fn tagger(mut self, kind: TaggerKind, tagger: impl Tagger + 'static) -> Self {
        self.taggers.insert(kind, Arc::new(tagger));
        self
    }

    pub fn verbalizer(mut self, kind: VerbalizerKind, verbalizer: impl Verbalizer + 'static) -> Self {
        self.verbalizers.insert(kind, Arc::new(verbalizer));
        self
    }

    pub fn filter(mut self, kind: FilterKind, filter: impl TextFilter + 'static) -> Self {
        self.filters.insert(kind, Arc::new(filter));
        self
    }

    /// 注册已共享的句柄（同一语法可服务多个种类）
    pub fn shared_tagger(mut self, kind: TaggerKind, tagger: Arc<dyn Tagger>) -> Self {
        self.taggers.insert(kind, tagger);
        self
    }

    pub fn shared_verbalizer(mut self, kind: VerbalizerKind, verbalizer: Arc<dyn Verbalizer>) -> Self {
        self.verbalizers.insert(kind, verbalizer);
        self
    }

    pub fn shared_filter(mut self, kind: FilterKind, filter: Arc<dyn TextFilter>) -> Self {
        self.filters.insert(kind, filter);
        self
    }

    pub fn build(self) -> GrammarRegistry {
        GrammarRegistry {
            taggers: self.taggers,
            verbalizers: self.verbalizers,
            filters: self.filters,
        }
    }
}
