//! 标注 Token 数据模型
//!
//! Tagger 输出被解析为 `TextSegment` 序列：原样透传的文本片段与语义 Token 交替出现

/// 字段值：带引号的字符串或嵌套 Token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// 字面值（已反转义）
    Text(String),
    /// 嵌套 Token（例如 measure 的 value 字段为 fraction）
    Token(SemioticToken),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&SemioticToken> {
        match self {
            FieldValue::Token(token) => Some(token),
            FieldValue::Text(_) => None,
        }
    }
}

/// Token 字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: FieldValue,
}

/// 语义 Token
///
/// 由解析器一次性构造，之后不再修改；重排序产生新的序列化字符串。
/// 同一 Token 内字段名唯一，字段保持 Tagger 输出的顺序。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemioticToken {
    class_name: String,
    fields: Vec<Field>,
}

impl SemioticToken {
    pub(crate) fn new(class_name: String, fields: Vec<Field>) -> Self {
        Self { class_name, fields }
    }

    /// 语义类别（date、money、time、measure、fraction、cardinal ...）
    ///
    /// 匿名嵌套 Token（`key: { ... }`）的类别为空字符串
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// 按解析顺序排列的字段
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }

    /// 字面值字段
    pub fn text(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(FieldValue::as_text)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    /// 是否要求保持 Tagger 输出顺序（`preserve_order: "true"`）
    pub fn preserves_order(&self) -> bool {
        self.text("preserve_order") == Some("true")
    }

    pub fn is_anonymous(&self) -> bool {
        self.class_name.is_empty()
    }
}

/// 解析后的文档片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSegment {
    /// 未标注文本，原样透传
    Text(String),
    /// 语义 Token
    Token(SemioticToken),
}

impl TextSegment {
    pub fn is_token(&self) -> bool {
        matches!(self, TextSegment::Token(_))
    }

    pub fn as_token(&self) -> Option<&SemioticToken> {
        match self {
            TextSegment::Token(token) => Some(token),
            TextSegment::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_field(name: &str, value: &str) -> Field {
        Field {
            name: name.to_string(),
            value: FieldValue::Text(value.to_string()),
        }
    }

    #[test]
    fn test_field_lookup() {
        let token = SemioticToken::new(
            "date".to_string(),
            vec![text_field("day", "5"), text_field("month", "3")],
        );

        assert_eq!(token.class_name(), "date");
        assert_eq!(token.text("month"), Some("3"));
        assert_eq!(token.text("year"), None);
        assert_eq!(token.field_names().collect::<Vec<_>>(), vec!["day", "month"]);
        assert!(!token.preserves_order());
        assert!(!token.is_anonymous());
    }

    #[test]
    fn test_preserve_order_flag() {
        let token = SemioticToken::new(
            "date".to_string(),
            vec![text_field("preserve_order", "true")],
        );
        assert!(token.preserves_order());

        let token = SemioticToken::new(
            "date".to_string(),
            vec![text_field("preserve_order", "false")],
        );
        assert!(!token.preserves_order());
    }

    #[test]
    fn test_nested_value_accessors() {
        let inner = SemioticToken::new("fraction".to_string(), vec![text_field("numerator", "1")]);
        let outer = SemioticToken::new(
            "measure".to_string(),
            vec![Field {
                name: "value".to_string(),
                value: FieldValue::Token(inner.clone()),
            }],
        );

        assert_eq!(outer.text("value"), None);
        assert_eq!(outer.field("value").and_then(FieldValue::as_token), Some(&inner));
        assert!(TextSegment::Token(outer).is_token());
        assert!(!TextSegment::Text("a".to_string()).is_token());
    }
}
