//! 语言与操作符
//!
//! 主语言为中文（zh），次语言为英文（en）

use std::fmt;

use serde::{Deserialize, Serialize};

/// 已确定的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// 中文（主语言）
    Zh,
    /// 英文（次语言）
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 配置中的语言选择（允许自动检测）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageSelector {
    /// 根据文本内容自动判断
    #[default]
    Auto,
    Zh,
    En,
}

impl LanguageSelector {
    /// 解析为具体语言
    ///
    /// 自动模式下：含中文字符或全部为数字 → zh，否则 → en。
    /// 只看字符是否出现，与位置无关。
    pub fn resolve(self, text: &str) -> Language {
        match self {
            LanguageSelector::Zh => Language::Zh,
            LanguageSelector::En => Language::En,
            LanguageSelector::Auto => {
                if contains_chinese(text) || is_all_digits(text) {
                    Language::Zh
                } else {
                    Language::En
                }
            }
        }
    }
}

impl From<Language> for LanguageSelector {
    fn from(language: Language) -> Self {
        match language {
            Language::Zh => LanguageSelector::Zh,
            Language::En => LanguageSelector::En,
        }
    }
}

impl fmt::Display for LanguageSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageSelector::Auto => f.write_str("auto"),
            LanguageSelector::Zh => f.write_str("zh"),
            LanguageSelector::En => f.write_str("en"),
        }
    }
}

/// 规范化方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// 文本正则化：书面形式 → 口语形式
    #[default]
    Tn,
    /// 反向文本正则化：口语形式 → 书面形式
    Itn,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Tn => "tn",
            Operator::Itn => "itn",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 是否包含中文字符（CJK 统一表意文字 U+4E00 ~ U+9FFF）
pub fn contains_chinese(text: &str) -> bool {
    text.chars().any(|ch| ('\u{4E00}'..='\u{9FFF}').contains(&ch))
}

fn is_all_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|ch| ch.is_ascii_digit())
}
