//! WeText 配置模块
//!
//! - `NormalizerConfig`: 单次调用的不可变配置
//! - `ConfigOverrides`: 调用级覆盖，只有显式设置的字段才生效
//! - `WeTextConfig`: 从 ~/.config/wetext/config.toml 加载的完整配置

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{WeTextError, WeTextResult};
use crate::language::{LanguageSelector, Operator};

/// 规范化配置
///
/// 各开关互相独立，可以任意组合
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// 语言（auto 表示自动检测）
    pub lang: LanguageSelector,
    /// tn 或 itn
    pub operator: Operator,
    /// 繁体转简体（前处理）
    pub traditional_to_simple: bool,
    /// 全角转半角
    pub full_to_half: bool,
    /// 去除语气词
    pub remove_interjections: bool,
    /// 去除标点
    pub remove_puncts: bool,
    /// 标注未登录词
    pub tag_oov: bool,
    /// 单个数字 0-9 也转换（仅 ITN）
    pub enable_0_to_9: bool,
    /// 去除儿化音（仅 TN）
    pub remove_erhua: bool,
    /// 英文 ITN 是否允许回退到中文；关闭后返回 UnsupportedCombination
    pub allow_language_fallback: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            lang: LanguageSelector::Auto,
            operator: Operator::Tn,
            traditional_to_simple: false,
            full_to_half: false,
            remove_interjections: false,
            remove_puncts: false,
            tag_oov: false,
            enable_0_to_9: false,
            remove_erhua: false,
            allow_language_fallback: true,
        }
    }
}

impl NormalizerConfig {
    /// 叠加调用级覆盖
    ///
    /// 覆盖值只有在显式设置（Some）时才生效，`Some(false)` 同样会覆盖 `true`
    pub fn overlay(&self, overrides: &ConfigOverrides) -> NormalizerConfig {
        NormalizerConfig {
            lang: overrides.lang.unwrap_or(self.lang),
            operator: overrides.operator.unwrap_or(self.operator),
            traditional_to_simple: overrides
                .traditional_to_simple
                .unwrap_or(self.traditional_to_simple),
            full_to_half: overrides.full_to_half.unwrap_or(self.full_to_half),
            remove_interjections: overrides
                .remove_interjections
                .unwrap_or(self.remove_interjections),
            remove_puncts: overrides.remove_puncts.unwrap_or(self.remove_puncts),
            tag_oov: overrides.tag_oov.unwrap_or(self.tag_oov),
            enable_0_to_9: overrides.enable_0_to_9.unwrap_or(self.enable_0_to_9),
            remove_erhua: overrides.remove_erhua.unwrap_or(self.remove_erhua),
            allow_language_fallback: overrides
                .allow_language_fallback
                .unwrap_or(self.allow_language_fallback),
        }
    }
}

/// 调用级覆盖
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigOverrides {
    pub lang: Option<LanguageSelector>,
    pub operator: Option<Operator>,
    pub traditional_to_simple: Option<bool>,
    pub full_to_half: Option<bool>,
    pub remove_interjections: Option<bool>,
    pub remove_puncts: Option<bool>,
    pub tag_oov: Option<bool>,
    pub enable_0_to_9: Option<bool>,
    pub remove_erhua: Option<bool>,
    pub allow_language_fallback: Option<bool>,
}

impl ConfigOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lang(mut self, lang: LanguageSelector) -> Self {
        self.lang = Some(lang);
        self
    }

    pub fn operator(mut self, operator: Operator) -> Self {
        self.operator = Some(operator);
        self
    }

    pub fn traditional_to_simple(mut self, enabled: bool) -> Self {
        self.traditional_to_simple = Some(enabled);
        self
    }

    pub fn full_to_half(mut self, enabled: bool) -> Self {
        self.full_to_half = Some(enabled);
        self
    }

    pub fn remove_interjections(mut self, enabled: bool) -> Self {
        self.remove_interjections = Some(enabled);
        self
    }

    pub fn remove_puncts(mut self, enabled: bool) -> Self {
        self.remove_puncts = Some(enabled);
        self
    }

    pub fn tag_oov(mut self, enabled: bool) -> Self {
        self.tag_oov = Some(enabled);
        self
    }

    pub fn enable_0_to_9(mut self, enabled: bool) -> Self {
        self.enable_0_to_9 = Some(enabled);
        self
    }

    pub fn remove_erhua(mut self, enabled: bool) -> Self {
        self.remove_erhua = Some(enabled);
        self
    }

    pub fn allow_language_fallback(mut self, allowed: bool) -> Self {
        self.allow_language_fallback = Some(allowed);
        self
    }
}

/// WeText 完整配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeTextConfig {
    /// 语法文件目录
    pub grammar_dir: PathBuf,
    /// 默认规范化配置
    pub normalizer: NormalizerConfig,
}

impl Default for WeTextConfig {
    fn default() -> Self {
        let grammar_dir = std::env::var("WETEXT_GRAMMAR_DIR").unwrap_or_else(|_| "fsts".to_string());

        Self {
            grammar_dir: PathBuf::from(grammar_dir),
            normalizer: NormalizerConfig::default(),
        }
    }
}

impl WeTextConfig {
    /// 加载用户配置文件，不存在时使用默认配置
    pub fn load() -> WeTextResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("配置文件不存在，使用默认配置: {:?}", config_path);
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// 从指定文件加载
    pub fn load_from(path: &Path) -> WeTextResult<Self> {
        if !path.exists() {
            return Err(WeTextError::ConfigNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| WeTextError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!("加载配置成功: {:?}", path);
        tracing::debug!(
            "规范化配置: lang={}, operator={}, grammar_dir={:?}",
            config.normalizer.lang,
            config.normalizer.operator,
            config.grammar_dir
        );
        Ok(config)
    }

    /// 保存到用户配置文件
    pub fn save(&self) -> WeTextResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// 保存到指定文件
    pub fn save_to(&self, path: &Path) -> WeTextResult<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| WeTextError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        std::fs::write(path, content)?;

        tracing::info!("保存配置成功: {:?}", path);
        Ok(())
    }

    /// 获取配置文件路径
    pub fn config_path() -> WeTextResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| WeTextError::ConfigNotFound("user config directory".to_string()))?;

        Ok(config_dir.join("wetext").join("config.toml"))
    }
}
