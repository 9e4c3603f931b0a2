//! Author Command Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::CreateAuthor;
use crate::application::error::ApplicationError;
use crate::domain::author::{Author, AuthorName};
use crate::infrastructure::InMemoryCatalog;

/// 创建作者响应
#[derive(Debug, Clone)]
pub struct CreateAuthorResponse {
    pub id: Uuid,
    pub name: String,
}

/// CreateAuthor Handler
pub struct CreateAuthorHandler {
    catalog: Arc<InMemoryCatalog>,
}

impl CreateAuthorHandler {
    pub fn new(catalog: Arc<InMemoryCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, command: CreateAuthor) -> Result<CreateAuthorResponse, ApplicationError> {
        let name = AuthorName::new(command.name)?;
        let author = Author::new(name.clone());
        let author_id = self.catalog.write(|catalog| catalog.add_author(author))?;

        tracing::info!(
            author_id = %author_id,
            name = %name,
            "Author created"
        );

        Ok(CreateAuthorResponse {
            id: *author_id.as_uuid(),
            name: name.as_str().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_author() {
        let catalog = InMemoryCatalog::new().arc();
        let handler = CreateAuthorHandler::new(catalog.clone());

        let response = handler
            .handle(CreateAuthor {
                name: "Carry Bradshaw".into(),
            })
            .unwrap();

        assert_eq!(response.name, "Carry Bradshaw");
        assert_eq!(catalog.read(|c| c.author_count()), 1);
    }

    #[test]
    fn test_create_author_with_empty_name_stores_nothing() {
        let catalog = InMemoryCatalog::new().arc();
        let handler = CreateAuthorHandler::new(catalog.clone());

        let err = handler
            .handle(CreateAuthor {
                name: String::new(),
            })
            .unwrap_err();

        assert!(err.domain().is_some_and(|e| e.is_validation()));
        assert_eq!(catalog.read(|c| c.author_count()), 0);
    }
}
