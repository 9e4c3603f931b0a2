//! Query Handlers 实现

mod article_handlers;
mod author_handlers;
mod magazine_handlers;
mod summaries;

pub use article_handlers::*;
pub use author_handlers::*;
pub use magazine_handlers::*;
pub use summaries::{ArticleSummary, AuthorSummary, MagazineSummary};
