//! Author Query Handlers

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use super::{ArticleSummary, MagazineSummary};
use crate::application::error::ApplicationError;
use crate::application::queries::{GetAuthor, ListAuthors};
use crate::domain::author::AuthorId;
use crate::domain::AuthorView;
use crate::infrastructure::InMemoryCatalog;

// ============================================================================
// Response DTOs
// ============================================================================

/// 作者详情响应
#[derive(Debug, Clone, Serialize)]
pub struct AuthorResponse {
    pub id: Uuid,
    pub name: String,
    pub articles: Vec<ArticleSummary>,
    pub magazines: Vec<MagazineSummary>,
    pub topic_areas: Vec<String>,
    pub created_at: String,
}

impl From<AuthorView<'_>> for AuthorResponse {
    fn from(view: AuthorView<'_>) -> Self {
        Self {
            id: *view.id().as_uuid(),
            name: view.name().to_string(),
            articles: view.articles().into_iter().map(ArticleSummary::from).collect(),
            magazines: view
                .magazines()
                .into_iter()
                .map(MagazineSummary::from)
                .collect(),
            topic_areas: view.topic_areas().into_iter().map(String::from).collect(),
            created_at: view.entity().created_at().to_rfc3339(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetAuthor Handler
pub struct GetAuthorHandler {
    catalog: Arc<InMemoryCatalog>,
}

impl GetAuthorHandler {
    pub fn new(catalog: Arc<InMemoryCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, query: GetAuthor) -> Result<AuthorResponse, ApplicationError> {
        let author_id = AuthorId::from_uuid(query.author_id);
        self.catalog
            .read(|catalog| catalog.author(&author_id).map(AuthorResponse::from))
            .ok_or_else(|| ApplicationError::not_found("Author", query.author_id))
    }
}

/// ListAuthors Handler
///
/// 按姓名排序
pub struct ListAuthorsHandler {
    catalog: Arc<InMemoryCatalog>,
}

impl ListAuthorsHandler {
    pub fn new(catalog: Arc<InMemoryCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, _query: ListAuthors) -> Result<Vec<AuthorResponse>, ApplicationError> {
        let mut authors: Vec<AuthorResponse> = self
            .catalog
            .read(|catalog| catalog.authors().map(AuthorResponse::from).collect());
        authors.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(authors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::author::{Author, AuthorName};
    use crate::domain::magazine::{Category, Magazine, MagazineName};

    #[test]
    fn test_get_author_with_derived_fields() {
        let catalog = InMemoryCatalog::new().arc();
        let author_id = catalog.write(|c| {
            let a = c.add_author(Author::new(AuthorName::new("Carry Bradshaw").unwrap())).unwrap();
            let wired = c.add_magazine(Magazine::new(
                MagazineName::new("Wired").unwrap(),
                Category::new("Tech").unwrap(),
            )).unwrap();
            let ars = c.add_magazine(Magazine::new(
                MagazineName::new("Ars").unwrap(),
                Category::new("Tech").unwrap(),
            )).unwrap();
            c.create_article(&a, &wired, "First piece").unwrap();
            c.create_article(&a, &ars, "Second piece").unwrap();
            a
        });

        let response = GetAuthorHandler::new(catalog)
            .handle(GetAuthor {
                author_id: *author_id.as_uuid(),
            })
            .unwrap();

        assert_eq!(response.name, "Carry Bradshaw");
        assert_eq!(response.articles.len(), 2);
        assert_eq!(response.magazines.len(), 2);
        assert_eq!(response.topic_areas, vec!["Tech".to_string()]);
    }

    #[test]
    fn test_get_unknown_author() {
        let handler = GetAuthorHandler::new(InMemoryCatalog::new().arc());
        let err = handler
            .handle(GetAuthor {
                author_id: Uuid::new_v4(),
            })
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::NotFound {
                resource_type: "Author",
                ..
            }
        ));
    }

    #[test]
    fn test_list_authors_sorted_by_name() {
        let catalog = InMemoryCatalog::new().arc();
        catalog.write(|c| {
            for name in ["Zadie Smith", "Carry Bradshaw", "Nathaniel Hawthorne"] {
                c.add_author(Author::new(AuthorName::new(name).unwrap())).unwrap();
            }
        });

        let names: Vec<String> = ListAuthorsHandler::new(catalog)
            .handle(ListAuthors)
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();

        assert_eq!(
            names,
            vec!["Carry Bradshaw", "Nathaniel Hawthorne", "Zadie Smith"]
        );
    }
}
