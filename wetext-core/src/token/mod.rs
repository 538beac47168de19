//! 标注 Token 中间表示
//!
//! - `types`: SemioticToken / TextSegment 数据模型
//! - `parser`: 标注串解析
//! - `order`: 字段顺序表
//! - `reorder`: 字段重排序与序列化

pub mod order;
pub mod parser;
pub mod reorder;
pub mod types;

// 导出核心类型
pub use order::FieldOrderTable;
pub use parser::{TaggedTokenParser, MAX_NESTING_DEPTH};
pub use reorder::TokenReorderer;
pub use types::{Field, FieldValue, SemioticToken, TextSegment};
