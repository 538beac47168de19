//! Normalizer - 主管道
//!
//! 串联前处理、准入检查、语言判定、Tag、重排序、Verbalize 和后处理。
//! 外部阶段的失败直接返回给调用方，不重试、不吞掉。

use std::fmt;
use std::sync::Arc;

use crate::config::{ConfigOverrides, NormalizerConfig};
use crate::error::{WeTextError, WeTextResult};
use crate::grammar::{FilterKind, GrammarRegistry, TaggerKind, VerbalizerKind};
use crate::language::{Language, Operator};
use crate::pipeline::gate::should_normalize;
use crate::pipeline::Stage;
use crate::token::{FieldOrderTable, TaggedTokenParser, TokenReorderer};

/// 管道警告
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineWarning {
    /// 请求的语言没有该操作符的语法，改用主语言
    LanguageFallback {
        requested: Language,
        used: Language,
        operator: Operator,
    },
}

impl fmt::Display for PipelineWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineWarning::LanguageFallback {
                requested,
                used,
                operator,
            } => write!(f, "no {} grammar for '{}', falling back to '{}'", operator, requested, used),
        }
    }
}

/// 管道处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationOutcome {
    /// 输出文本
    pub text: String,
    /// 实际使用的语言；未通过准入检查时为 None
    pub language: Option<Language>,
    /// 是否经过 tag → reorder → verbalize
    pub normalized: bool,
    /// 本次调用产生的警告
    pub warnings: Vec<PipelineWarning>,
}

/// 规范化器
///
/// 不持有可变状态，可在多个线程间共享
pub struct Normalizer {
    registry: Arc<GrammarRegistry>,
    reorderer: TokenReorderer,
    config: NormalizerConfig,
}

impl Normalizer {
    /// 创建规范化器
    ///
    /// # 参数
    /// - `registry`: 启动时构造的语法注册表
    /// - `config`: 默认配置，可被调用级覆盖
    pub fn new(registry: Arc<GrammarRegistry>, config: NormalizerConfig) -> Self {
        Self {
            registry,
            reorderer: TokenReorderer::default(),
            config,
        }
    }

    /// 使用自定义字段顺序表
    pub fn with_order_table(mut self, table: FieldOrderTable) -> Self {
        self.reorderer = TokenReorderer::new(table);
        self
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    pub fn registry(&self) -> &GrammarRegistry {
        &self.registry
    }

    /// 使用默认配置规范化
    pub fn normalize(&self, text: &str) -> WeTextResult<String> {
        self.normalize_with_config(text, &self.config)
    }

    /// 叠加调用级覆盖后规范化
    pub fn normalize_with(&self, text: &str, overrides: &ConfigOverrides) -> WeTextResult<String> {
        let config = self.config.overlay(overrides);
        self.normalize_with_config(text, &config)
    }

    /// 使用指定配置规范化
    pub fn normalize_with_config(&self, text: &str, config: &NormalizerConfig) -> WeTextResult<String> {
        self.process(text, config).map(|outcome| outcome.text)
    }

    /// 完整处理，返回详细结果
    pub fn process(&self, text: &str, config: &NormalizerConfig) -> WeTextResult<NormalizationOutcome> {
        // Step 1: 前处理
        let text = self.preprocess(text, config)?;

        // Step 2: 准入检查，未通过直接进入后处理
        if !should_normalize(&text, config.operator, config.remove_erhua) {
            tracing::debug!("跳过规范化 (operator={}): {:?}", config.operator, text);
            return Ok(NormalizationOutcome {
                text: self.postprocess(&text, config)?,
                language: None,
                normalized: false,
                warnings: Vec::new(),
            });
        }

        // Step 3-4: 语言判定 + 操作符回退
        let mut warnings = Vec::new();
        let language = Self::resolve_language(&text, config, &mut warnings)?;

        // Step 5: Tag
        let tagger_kind = TaggerKind::select(language, config.operator, config.enable_0_to_9)
            .ok_or(WeTextError::UnsupportedCombination {
                language,
                operator: config.operator,
            })?;
        let tagged = self
            .registry
            .tagger(tagger_kind)?
            .tag(&text)
            .map_err(|e| WeTextError::stage(Stage::Tag(tagger_kind), e))?;
        tracing::debug!("tagged ({}): {}", tagger_kind, tagged);

        // Step 6: 解析 + 重排序
        let segments = TaggedTokenParser::parse(&tagged)?;
        let reordered = self.reorderer.reorder(&segments, language, config.operator);
        tracing::debug!("reordered: {}", reordered);

        // Step 7: Verbalize
        let verbalizer_kind = VerbalizerKind::select(language, config.operator, config.remove_erhua)
            .ok_or(WeTextError::UnsupportedCombination {
                language,
                operator: config.operator,
            })?;
        let verbalized = self
            .registry
            .verbalizer(verbalizer_kind)?
            .verbalize(&reordered)
            .map_err(|e| WeTextError::stage(Stage::Verbalize(verbalizer_kind), e))?;

        // Step 8: 后处理
        Ok(NormalizationOutcome {
            text: self.postprocess(&verbalized, config)?,
            language: Some(language),
            normalized: true,
            warnings,
        })
    }

    /// 前处理：繁简转换（可选）+ 去除首尾空白
    fn preprocess(&self, text: &str, config: &NormalizerConfig) -> WeTextResult<String> {
        let text = if config.traditional_to_simple {
            self.apply_filter(FilterKind::TraditionalToSimple, text, Stage::Preprocess)?
        } else {
            text.to_string()
        };

        Ok(text.trim().to_string())
    }

    /// 后处理：按固定顺序应用已开启的过滤器，最后去除首尾空白
    fn postprocess(&self, text: &str, config: &NormalizerConfig) -> WeTextResult<String> {
        let mut text = text.to_string();

        for kind in FilterKind::POSTPROCESS_ORDER {
            let enabled = match kind {
                FilterKind::FullToHalf => config.full_to_half,
                FilterKind::RemoveInterjections => config.remove_interjections,
                FilterKind::RemovePuncts => config.remove_puncts,
                FilterKind::TagOov => config.tag_oov,
                FilterKind::TraditionalToSimple => false,
            };

            if enabled {
                text = self.apply_filter(kind, &text, Stage::Postprocess)?;
            }
        }

        Ok(text.trim().to_string())
    }

    fn apply_filter(
        &self,
        kind: FilterKind,
        text: &str,
        stage: fn(FilterKind) -> Stage,
    ) -> WeTextResult<String> {
        self.registry
            .filter(kind)?
            .apply(text)
            .map_err(|e| WeTextError::stage(stage(kind), e))
    }

    /// 判定语言
    ///
    /// 英文没有 ITN 语法：开启回退时改用中文并发出警告，否则返回 UnsupportedCombination
    fn resolve_language(
        text: &str,
        config: &NormalizerConfig,
        warnings: &mut Vec<PipelineWarning>,
    ) -> WeTextResult<Language> {
        let language = config.lang.resolve(text);

        if language == Language::En && config.operator == Operator::Itn {
            if !config.allow_language_fallback {
                return Err(WeTextError::UnsupportedCombination {
                    language,
                    operator: config.operator,
                });
            }

            let warning = PipelineWarning::LanguageFallback {
                requested: language,
                used: Language::Zh,
                operator: config.operator,
            };
            tracing::warn!("{}", warning);
            warnings.push(warning);
            return Ok(Language::Zh);
        }

        Ok(language)
    }
}
