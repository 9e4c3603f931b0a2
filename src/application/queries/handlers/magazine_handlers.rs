//! Magazine Query Handlers

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use super::AuthorSummary;
use crate::application::error::ApplicationError;
use crate::application::queries::{GetMagazine, ListMagazines};
use crate::domain::magazine::MagazineId;
use crate::domain::MagazineView;
use crate::infrastructure::InMemoryCatalog;

// ============================================================================
// Response DTOs
// ============================================================================

/// 杂志详情响应
#[derive(Debug, Clone, Serialize)]
pub struct MagazineResponse {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub article_titles: Vec<String>,
    pub contributors: Vec<AuthorSummary>,
    pub prolific_contributors: Vec<AuthorSummary>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<MagazineView<'_>> for MagazineResponse {
    fn from(view: MagazineView<'_>) -> Self {
        let entity = view.entity();
        Self {
            id: *view.id().as_uuid(),
            name: view.name().to_string(),
            category: view.category().to_string(),
            article_titles: view.article_titles().into_iter().map(String::from).collect(),
            contributors: view
                .contributors()
                .into_iter()
                .map(AuthorSummary::from)
                .collect(),
            prolific_contributors: view
                .prolific_contributors()
                .into_iter()
                .map(AuthorSummary::from)
                .collect(),
            created_at: entity.created_at().to_rfc3339(),
            updated_at: entity.updated_at().to_rfc3339(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetMagazine Handler
pub struct GetMagazineHandler {
    catalog: Arc<InMemoryCatalog>,
}

impl GetMagazineHandler {
    pub fn new(catalog: Arc<InMemoryCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, query: GetMagazine) -> Result<MagazineResponse, ApplicationError> {
        let magazine_id = MagazineId::from_uuid(query.magazine_id);
        self.catalog
            .read(|catalog| catalog.magazine(&magazine_id).map(MagazineResponse::from))
            .ok_or_else(|| ApplicationError::not_found("Magazine", query.magazine_id))
    }
}

/// ListMagazines Handler
pub struct ListMagazinesHandler {
    catalog: Arc<InMemoryCatalog>,
}

impl ListMagazinesHandler {
    pub fn new(catalog: Arc<InMemoryCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(
        &self,
        _query: ListMagazines,
    ) -> Result<Vec<MagazineResponse>, ApplicationError> {
        let mut magazines: Vec<MagazineResponse> = self
            .catalog
            .read(|catalog| catalog.magazines().map(MagazineResponse::from).collect());
        magazines.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(magazines)
    }
}
