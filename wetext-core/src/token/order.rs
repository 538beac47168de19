//! 字段顺序表
//!
//! 每种 (语言, 操作符, 语义类别) 对应 Verbalizer 期望的字段顺序。
//! 表中没有的类别（cardinal、char、whitelist ...）保持 Tagger 输出顺序。

use std::collections::HashMap;

use crate::language::{Language, Operator};

type OrderEntries = &'static [(&'static str, &'static [&'static str])];

/// 中文 TN
const ZH_TN_ORDERS: OrderEntries = &[
    ("date", &["year", "month", "day"]),
    ("fraction", &["denominator", "numerator"]),
    ("measure", &["denominator", "numerator", "value"]),
    ("money", &["value", "currency"]),
    ("time", &["noon", "hour", "minute", "second"]),
];

/// 英文 TN
const EN_TN_ORDERS: OrderEntries = &[
    ("date", &["preserve_order", "text", "day", "month", "year"]),
    ("money", &["integer_part", "fractional_part", "quantity", "currency_maj"]),
];

/// ITN（与语言无关）
const ITN_ORDERS: OrderEntries = &[
    ("date", &["year", "month", "day"]),
    ("fraction", &["sign", "numerator", "denominator"]),
    ("measure", &["numerator", "denominator", "value"]),
    ("money", &["currency", "value", "decimal"]),
    ("time", &["hour", "minute", "second", "noon"]),
];

/// 字段顺序表
///
/// 运行时只读；`insert` 仅用于在构造阶段扩展内置表
#[derive(Debug, Clone)]
pub struct FieldOrderTable {
    tables: HashMap<(Language, Operator), HashMap<String, Vec<String>>>,
}

impl FieldOrderTable {
    /// 空表：所有类别都保持 Tagger 输出顺序
    pub fn empty() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    /// 内置顺序表
    pub fn standard() -> Self {
        let mut table = Self::empty();
        table.extend(Language::Zh, Operator::Tn, ZH_TN_ORDERS);
        table.extend(Language::En, Operator::Tn, EN_TN_ORDERS);
        table.extend(Language::Zh, Operator::Itn, ITN_ORDERS);
        table.extend(Language::En, Operator::Itn, ITN_ORDERS);
        table
    }

    fn extend(&mut self, language: Language, operator: Operator, entries: OrderEntries) {
        for (class_name, order) in entries {
            self.insert(language, operator, *class_name, order.iter().copied());
        }
    }

    /// 添加或替换一个类别的字段顺序
    pub fn insert<I, S>(&mut self, language: Language, operator: Operator, class_name: &str, order: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tables
            .entry((language, operator))
            .or_default()
            .insert(class_name.to_string(), order.into_iter().map(Into::into).collect());
    }

    /// 查找字段顺序；没有规则时返回 None
    pub fn lookup(&self, language: Language, operator: Operator, class_name: &str) -> Option<&[String]> {
        self.tables
            .get(&(language, operator))?
            .get(class_name)
            .map(Vec::as_slice)
    }
}

impl Default for FieldOrderTable {
    fn default() -> Self {
        Self::standard()
    }
}
