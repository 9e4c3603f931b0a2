//! Domain Layer - 领域层
//!
//! 包含三个限界上下文:
//! - Author Context: 作者
//! - Magazine Context: 杂志
//! - Article Context: 文章（作者与杂志的关联）
//!
//! 以及持有全部实体的 Catalog

pub mod article;
pub mod author;
pub mod magazine;

mod bounded_text;
mod catalog;
mod errors;

pub use catalog::{ArticleView, AuthorView, Catalog, MagazineView, PROLIFIC_THRESHOLD};
pub use errors::{DomainError, EntityKind};
