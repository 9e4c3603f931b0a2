//! Article Query Handlers

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use super::{AuthorSummary, MagazineSummary};
use crate::application::error::ApplicationError;
use crate::application::queries::GetArticle;
use crate::domain::article::ArticleId;
use crate::domain::ArticleView;
use crate::infrastructure::InMemoryCatalog;

/// 文章详情响应
#[derive(Debug, Clone, Serialize)]
pub struct ArticleResponse {
    pub id: Uuid,
    pub title: String,
    pub author: AuthorSummary,
    pub magazine: MagazineSummary,
    pub created_at: String,
}

impl From<ArticleView<'_>> for ArticleResponse {
    fn from(view: ArticleView<'_>) -> Self {
        Self {
            id: *view.id().as_uuid(),
            title: view.title().to_string(),
            author: AuthorSummary::from(view.author()),
            magazine: MagazineSummary::from(view.magazine()),
            created_at: view.entity().created_at().to_rfc3339(),
        }
    }
}

/// GetArticle Handler
pub struct GetArticleHandler {
    catalog: Arc<InMemoryCatalog>,
}

impl GetArticleHandler {
    pub fn new(catalog: Arc<InMemoryCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, query: GetArticle) -> Result<ArticleResponse, ApplicationError> {
        let article_id = ArticleId::from_uuid(query.article_id);
        self.catalog
            .read(|catalog| catalog.article(&article_id).map(ArticleResponse::from))
            .ok_or_else(|| ApplicationError::not_found("Article", query.article_id))
    }
}
