//! Magazine Context - 杂志限界上下文
//!
//! 职责:
//! - 杂志名称与分类管理
//! - 杂志刊登过的文章列表

mod aggregate;
mod value_objects;

pub use aggregate::Magazine;
pub use value_objects::{
    Category, MagazineId, MagazineName, MAGAZINE_NAME_MAX_CHARS, MAGAZINE_NAME_MIN_CHARS,
};
