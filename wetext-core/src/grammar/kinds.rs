//! 语法种类
//!
//! (语言 × 操作符 × 变体) 的固定集合，初始化时解析为具体句柄，
//! 热路径上不做字符串查找

use std::fmt;

use crate::language::{Language, Operator};

/// Tagger 种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaggerKind {
    ZhTn,
    ZhItn,
    /// 启用 0-9 单独数字转换的中文 ITN
    ZhItnEnable0To9,
    EnTn,
}

impl TaggerKind {
    pub const ALL: [TaggerKind; 4] = [
        TaggerKind::ZhTn,
        TaggerKind::ZhItn,
        TaggerKind::ZhItnEnable0To9,
        TaggerKind::EnTn,
    ];

    /// 选择 Tagger
    ///
    /// `enable_0_to_9` 只对中文 ITN 生效；英文没有 ITN 语法，返回 None
    pub fn select(language: Language, operator: Operator, enable_0_to_9: bool) -> Option<Self> {
        match (language, operator) {
            (Language::Zh, Operator::Tn) => Some(TaggerKind::ZhTn),
            (Language::Zh, Operator::Itn) if enable_0_to_9 => Some(TaggerKind::ZhItnEnable0To9),
            (Language::Zh, Operator::Itn) => Some(TaggerKind::ZhItn),
            (Language::En, Operator::Tn) => Some(TaggerKind::EnTn),
            (Language::En, Operator::Itn) => None,
        }
    }

    /// 语法目录下的相对路径
    pub fn relative_path(&self) -> &'static str {
        match self {
            TaggerKind::ZhTn => "zh/tn/tagger.fst",
            TaggerKind::ZhItn => "zh/itn/tagger.fst",
            TaggerKind::ZhItnEnable0To9 => "zh/itn/tagger_enable_0_to_9.fst",
            TaggerKind::EnTn => "en/tn/tagger.fst",
        }
    }
}

impl fmt::Display for TaggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.relative_path())
    }
}

/// Verbalizer 种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbalizerKind {
    ZhTn,
    /// 去除儿化音的中文 TN
    ZhTnRemoveErhua,
    ZhItn,
    EnTn,
}

impl VerbalizerKind {
    pub const ALL: [VerbalizerKind; 4] = [
        VerbalizerKind::ZhTn,
        VerbalizerKind::ZhTnRemoveErhua,
        VerbalizerKind::ZhItn,
        VerbalizerKind::EnTn,
    ];

    /// 选择 Verbalizer
    ///
    /// `remove_erhua` 只对中文 TN 生效
    pub fn select(language: Language, operator: Operator, remove_erhua: bool) -> Option<Self> {
        match (language, operator) {
            (Language::Zh, Operator::Tn) if remove_erhua => Some(VerbalizerKind::ZhTnRemoveErhua),
            (Language::Zh, Operator::Tn) => Some(VerbalizerKind::ZhTn),
            (Language::Zh, Operator::Itn) => Some(VerbalizerKind::ZhItn),
            (Language::En, Operator::Tn) => Some(VerbalizerKind::EnTn),
            (Language::En, Operator::Itn) => None,
        }
    }

    pub fn relative_path(&self) -> &'static str {
        match self {
            VerbalizerKind::ZhTn => "zh/tn/verbalizer.fst",
            VerbalizerKind::ZhTnRemoveErhua => "zh/tn/verbalizer_remove_erhua.fst",
            VerbalizerKind::ZhItn => "zh/itn/verbalizer.fst",
            VerbalizerKind::EnTn => "en/tn/verbalizer.fst",
        }
    }
}

impl fmt::Display for VerbalizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.relative_path())
    }
}

/// 前后处理过滤器种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// 繁体 → 简体（前处理）
    TraditionalToSimple,
    /// 全角 → 半角
    FullToHalf,
    /// 去除语气词
    RemoveInterjections,
    /// 去除标点
    RemovePuncts,
    /// 标注未登录词
    TagOov,
}

impl FilterKind {
    pub const ALL: [FilterKind; 5] = [
        FilterKind::TraditionalToSimple,
        FilterKind::FullToHalf,
        FilterKind::RemoveInterjections,
        FilterKind::RemovePuncts,
        FilterKind::TagOov,
    ];

    /// 后处理的固定顺序
    pub const POSTPROCESS_ORDER: [FilterKind; 4] = [
        FilterKind::FullToHalf,
        FilterKind::RemoveInterjections,
        FilterKind::RemovePuncts,
        FilterKind::TagOov,
    ];

    pub fn relative_path(&self) -> &'static str {
        match self {
            FilterKind::TraditionalToSimple => "traditional_to_simple.fst",
            FilterKind::FullToHalf => "full_to_half.fst",
            FilterKind::RemoveInterjections => "remove_interjections.fst",
            FilterKind::RemovePuncts => "remove_puncts.fst",
            FilterKind::TagOov => "tag_oov.fst",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FilterKind::TraditionalToSimple => "traditional_to_simple",
            FilterKind::FullToHalf => "full_to_half",
            FilterKind::RemoveInterjections => "remove_interjections",
            FilterKind::RemovePuncts => "remove_puncts",
            FilterKind::TagOov => "tag_oov",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
