//! 应用层 - 用例编排
//!
//! 包含：
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod queries;

// Re-exports
pub use commands::{
    // Author commands
    CreateAuthor,
    // Magazine commands
    ChangeMagazineCategory,
    CreateMagazine,
    RenameMagazine,
    // Article commands
    PublishArticle,
    // Handlers
    handlers::{
        ChangeMagazineCategoryHandler, CreateAuthorHandler, CreateAuthorResponse,
        CreateMagazineHandler, CreateMagazineResponse, PublishArticleHandler,
        PublishArticleResponse, RenameMagazineHandler,
    },
};

pub use error::ApplicationError;

pub use queries::{
    // Author queries
    GetAuthor,
    ListAuthors,
    // Magazine queries
    GetMagazine,
    ListMagazines,
    // Article queries
    GetArticle,
    // Handlers
    handlers::{
        ArticleResponse, ArticleSummary, AuthorResponse, AuthorSummary, GetArticleHandler,
        GetAuthorHandler, GetMagazineHandler, ListAuthorsHandler, ListMagazinesHandler,
        MagazineResponse, MagazineSummary,
    },
};
