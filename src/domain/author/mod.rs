//! Author Context - 作者限界上下文
//!
//! 职责:
//! - 作者身份与姓名
//! - 作者发表过的文章列表

mod aggregate;
mod value_objects;

pub use aggregate::Author;
pub use value_objects::{AuthorId, AuthorName};
