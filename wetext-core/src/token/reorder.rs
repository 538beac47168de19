//! TokenReorderer - 字段重排序
//!
//! 按字段顺序表重新排列每个 Token 的字段，并序列化为 Verbalizer 期望的标注串。
//! 嵌套 Token 先于外层 Token 完成重排序（后序），对外层而言只是一个不透明的值。

use crate::language::{Language, Operator};
use crate::token::order::FieldOrderTable;
use crate::token::types::{FieldValue, SemioticToken, TextSegment};

/// 字段重排序器
#[derive(Debug, Clone, Default)]
pub struct TokenReorderer {
    table: FieldOrderTable,
}

impl TokenReorderer {
    pub fn new(table: FieldOrderTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &FieldOrderTable {
        &self.table
    }

    /// 重排序并序列化整个文档
    ///
    /// 透传文本原样输出，不增删空白
    pub fn reorder(&self, segments: &[TextSegment], language: Language, operator: Operator) -> String {
        let mut output = String::new();

        for segment in segments {
            match segment {
                TextSegment::Text(text) => output.push_str(text),
                TextSegment::Token(token) => {
                    output.push_str(&self.serialize_token(token, language, operator))
                }
            }
        }

        output
    }

    /// 重排序并序列化单个 Token
    ///
    /// 顺序：先按表中顺序输出（跳过缺失字段），再按原顺序追加表中没有的字段。
    /// 没有规则或 Token 要求保持顺序时，按解析顺序输出。
    pub fn serialize_token(&self, token: &SemioticToken, language: Language, operator: Operator) -> String {
        // 先完成所有嵌套 Token
        let rendered: Vec<(&str, String)> = token
            .fields()
            .iter()
            .map(|field| (field.name.as_str(), self.render_value(&field.value, language, operator)))
            .collect();

        let order = if token.preserves_order() {
            None
        } else {
            self.table.lookup(language, operator, token.class_name())
        };

        let mut emitted = vec![false; rendered.len()];
        let mut sequence = Vec::with_capacity(rendered.len());

        if let Some(order) = order {
            for name in order {
                if let Some(index) = rendered.iter().position(|(field, _)| *field == name.as_str()) {
                    if !emitted[index] {
                        emitted[index] = true;
                        sequence.push(index);
                    }
                }
            }
        }

        for (index, done) in emitted.iter().enumerate() {
            if !done {
                sequence.push(index);
            }
        }

        let mut output = String::new();
        if !token.is_anonymous() {
            output.push_str(token.class_name());
            output.push(' ');
        }
        output.push('{');

        for index in sequence {
            let (name, value) = &rendered[index];
            output.push(' ');
            output.push_str(name);
            output.push_str(": ");
            output.push_str(value);
        }

        output.push_str(" }");
        output
    }

    fn render_value(&self, value: &FieldValue, language: Language, operator: Operator) -> String {
        match value {
            FieldValue::Text(text) => format!("\"{}\"", escape(text)),
            FieldValue::Token(token) => self.serialize_token(token, language, operator),
        }
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '"' || ch == '\\' {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
