//! TaggedTokenParser - 标注串解析器
//!
//! 将 Tagger 输出的标注串解析为 `TextSegment` 序列
//!
//! 格式：
//! ```text
//! 字面文本 class_name { field: "value" field: class { ... } field: { ... } } 字面文本
//! ```
//!
//! 规则：
//! - 字段之间的空白无意义
//! - 引号内支持 `\"` 与 `\\` 两种转义
//! - 不做语义校验，未知的类别名和字段名原样接受
//! - Token 之外的文本（包括 Token 之间的空白）原样保留

use crate::error::{WeTextError, WeTextResult};
use crate::token::types::{Field, FieldValue, SemioticToken, TextSegment};

/// 最大嵌套深度（同时打开的 Token 数）
pub const MAX_NESTING_DEPTH: usize = 32;

/// 尚未闭合的 Token
struct Frame {
    class_name: String,
    fields: Vec<Field>,
    /// `{` 的字节位置
    open_at: usize,
    /// 闭合后填入父 Token 的字段名及其位置；顶层 Token 为 None
    slot: Option<(String, usize)>,
}

impl Frame {
    fn push_field(&mut self, name: String, value: FieldValue, position: usize) -> WeTextResult<()> {
        if self.fields.iter().any(|field| field.name == name) {
            return Err(WeTextError::malformed(
                position,
                format!("duplicate field '{}' in '{}'", name, self.class_name),
            ));
        }

        self.fields.push(Field { name, value });
        Ok(())
    }
}

/// 按字节位置前进的字符游标
///
/// 结构字符全部是 ASCII，切片位置总是落在 UTF-8 字符边界上
struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(ch) if ch.is_whitespace()) {
            self.bump();
        }
    }

    fn identifier(&mut self) -> &'a str {
        let start = self.pos;
        while matches!(self.peek(), Some(ch) if is_ident_char(ch)) {
            self.bump();
        }
        &self.src[start..self.pos]
    }

    fn expect(&mut self, expected: char, what: &str) -> WeTextResult<()> {
        if self.peek() == Some(expected) {
            self.bump();
            Ok(())
        } else {
            Err(WeTextError::malformed(self.pos, format!("expected {}", what)))
        }
    }

    /// 读取引号值（游标位于开引号处）
    fn quoted(&mut self) -> WeTextResult<String> {
        let open_at = self.pos;
        self.bump();

        let mut value = String::new();
        loop {
            match self.bump() {
                None => return Err(WeTextError::malformed(open_at, "unterminated quoted value")),
                Some('"') => return Ok(value),
                Some('\\') => {
                    let escape_at = self.pos - 1;
                    match self.bump() {
                        Some('"') => value.push('"'),
                        Some('\\') => value.push('\\'),
                        Some(other) => {
                            return Err(WeTextError::malformed(
                                escape_at,
                                format!("unknown escape sequence '\\{}'", other),
                            ))
                        }
                        None => {
                            return Err(WeTextError::malformed(open_at, "unterminated quoted value"))
                        }
                    }
                }
                Some(ch) => value.push(ch),
            }
        }
    }
}

fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// 标注串解析器
pub struct TaggedTokenParser;

impl TaggedTokenParser {
    /// 解析标注串
    ///
    /// 单遍从左到右扫描，用显式栈维护尚未闭合的 Token。
    /// 结构错误（括号不匹配、引号未闭合、未知转义等）返回 `MalformedTag`，不产生部分结果。
    pub fn parse(raw: &str) -> WeTextResult<Vec<TextSegment>> {
        let mut cursor = Cursor::new(raw);
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut stack: Vec<Frame> = Vec::new();

        loop {
            if !stack.is_empty() {
                Self::step_inside(&mut cursor, &mut stack, &mut segments)?;
                continue;
            }

            let Some(ch) = cursor.peek() else {
                break;
            };

            match ch {
                '}' => return Err(WeTextError::malformed(cursor.pos, "unmatched '}'")),
                '{' => return Err(WeTextError::malformed(cursor.pos, "'{' without class name")),
                c if is_ident_start(c) => {
                    let start = cursor.pos;
                    let name = cursor.identifier();
                    let name_end = cursor.pos;

                    cursor.skip_whitespace();
                    if cursor.peek() == Some('{') {
                        if !literal.is_empty() {
                            segments.push(TextSegment::Text(std::mem::take(&mut literal)));
                        }
                        Self::open(&mut cursor, &mut stack, name.to_string(), None)?;
                    } else {
                        // 普通单词，空白留给下一轮按字面处理
                        literal.push_str(&raw[start..name_end]);
                        cursor.pos = name_end;
                    }
                }
                _ => {
                    literal.push(ch);
                    cursor.bump();
                }
            }
        }

        if !literal.is_empty() {
            segments.push(TextSegment::Text(literal));
        }

        Ok(segments)
    }

    /// 在栈顶 Token 内前进一步：闭合 Token，或读取一个字段
    fn step_inside(
        cursor: &mut Cursor<'_>,
        stack: &mut Vec<Frame>,
        segments: &mut Vec<TextSegment>,
    ) -> WeTextResult<()> {
        cursor.skip_whitespace();
        let position = cursor.pos;

        match cursor.peek() {
            None => {
                let open_at = stack.last().map_or(position, |frame| frame.open_at);
                Err(WeTextError::malformed(open_at, "unmatched '{'"))
            }
            Some('}') => {
                cursor.bump();
                if let Some(frame) = stack.pop() {
                    let token = SemioticToken::new(frame.class_name, frame.fields);
                    match (frame.slot, stack.last_mut()) {
                        (Some((name, at)), Some(parent)) => {
                            parent.push_field(name, FieldValue::Token(token), at)?
                        }
                        _ => segments.push(TextSegment::Token(token)),
                    }
                }
                Ok(())
            }
            Some(ch) if is_ident_start(ch) => {
                let key = cursor.identifier().to_string();
                cursor.skip_whitespace();
                cursor.expect(':', &format!("':' after field '{}'", key))?;
                cursor.skip_whitespace();

                match cursor.peek() {
                    Some('"') => {
                        let value = cursor.quoted()?;
                        if let Some(frame) = stack.last_mut() {
                            frame.push_field(key, FieldValue::Text(value), position)?;
                        }
                        Ok(())
                    }
                    Some('{') => Self::open(cursor, stack, String::new(), Some((key, position))),
                    Some(c) if is_ident_start(c) => {
                        let class_name = cursor.identifier().to_string();
                        cursor.skip_whitespace();
                        if cursor.peek() != Some('{') {
                            return Err(WeTextError::malformed(
                                cursor.pos,
                                format!("expected '{{' after nested class '{}'", class_name),
                            ));
                        }
                        Self::open(cursor, stack, class_name, Some((key, position)))
                    }
                    _ => Err(WeTextError::malformed(
                        cursor.pos,
                        format!("missing value for field '{}'", key),
                    )),
                }
            }
            Some(ch) => Err(WeTextError::malformed(
                position,
                format!("unexpected character '{}' inside token", ch),
            )),
        }
    }

    /// 打开新 Token（游标位于 `{` 处）
    fn open(
        cursor: &mut Cursor<'_>,
        stack: &mut Vec<Frame>,
        class_name: String,
        slot: Option<(String, usize)>,
    ) -> WeTextResult<()> {
        if stack.len() >= MAX_NESTING_DEPTH {
            return Err(WeTextError::malformed(
                cursor.pos,
                format!("nesting deeper than {} tokens", MAX_NESTING_DEPTH),
            ));
        }

        let open_at = cursor.pos;
        cursor.bump();
        stack.push(Frame {
            class_name,
            fields: Vec::new(),
            open_at,
            slot,
        });
        Ok(())
    }
}
