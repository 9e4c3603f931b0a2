//! Article Context - 文章限界上下文
//!
//! 职责:
//! - 作者与杂志之间的关联
//! - 创建时同时登记到两侧的文章列表

mod entity;
mod value_objects;

pub use entity::Article;
pub use value_objects::{ArticleId, ArticleTitle, ARTICLE_TITLE_MAX_CHARS, ARTICLE_TITLE_MIN_CHARS};
