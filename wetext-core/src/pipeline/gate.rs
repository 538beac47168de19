//! 规范化准入检查
//!
//! TN：至少包含一个十进制数字（半角或全角），或开启去儿化音且存在儿化后缀；
//! ITN：非空即处理

use std::sync::OnceLock;

use regex::Regex;

use crate::language::Operator;

/// 汉字后跟 儿/兒
fn erhua_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[\x{4E00}-\x{9FFF}][儿兒]").expect("valid erhua regex"))
}

/// 是否包含儿化后缀
pub fn contains_erhua(text: &str) -> bool {
    erhua_pattern().is_match(text)
}

/// 半角 0-9 或全角 ０-９
///
/// 〇、Ⅻ、½ 等其他数值字符不算
fn is_decimal_digit(ch: char) -> bool {
    ch.is_ascii_digit() || ('０'..='９').contains(&ch)
}

/// 文本是否需要进入 tag → reorder → verbalize
pub fn should_normalize(text: &str, operator: Operator, remove_erhua: bool) -> bool {
    match operator {
        Operator::Tn => {
            text.chars().any(is_decimal_digit) || (remove_erhua && contains_erhua(text))
        }
        Operator::Itn => !text.is_empty(),
    }
}
