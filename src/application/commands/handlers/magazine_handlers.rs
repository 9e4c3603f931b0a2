//! Magazine Command Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{ChangeMagazineCategory, CreateMagazine, RenameMagazine};
use crate::application::error::ApplicationError;
use crate::domain::magazine::{Category, Magazine, MagazineId, MagazineName};
use crate::infrastructure::InMemoryCatalog;

// ============================================================================
// CreateMagazine
// ============================================================================

/// 创建杂志响应
#[derive(Debug, Clone)]
pub struct CreateMagazineResponse {
    pub id: Uuid,
    pub name: String,
    pub category: String,
}

/// CreateMagazine Handler
pub struct CreateMagazineHandler {
    catalog: Arc<InMemoryCatalog>,
}

impl CreateMagazineHandler {
    pub fn new(catalog: Arc<InMemoryCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(
        &self,
        command: CreateMagazine,
    ) -> Result<CreateMagazineResponse, ApplicationError> {
        let name = MagazineName::new(command.name)?;
        let category = Category::new(command.category)?;

        let magazine = Magazine::new(name.clone(), category.clone());
        let magazine_id = self.catalog.write(|catalog| catalog.add_magazine(magazine))?;

        tracing::info!(
            magazine_id = %magazine_id,
            name = %name,
            category = %category,
            "Magazine created"
        );

        Ok(CreateMagazineResponse {
            id: *magazine_id.as_uuid(),
            name: name.as_str().to_string(),
            category: category.as_str().to_string(),
        })
    }
}

// ============================================================================
// RenameMagazine
// ============================================================================

/// RenameMagazine Handler
pub struct RenameMagazineHandler {
    catalog: Arc<InMemoryCatalog>,
}

impl RenameMagazineHandler {
    pub fn new(catalog: Arc<InMemoryCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, command: RenameMagazine) -> Result<(), ApplicationError> {
        let name = MagazineName::new(command.name)?;
        let magazine_id = MagazineId::from_uuid(command.magazine_id);

        self.catalog
            .write(|catalog| catalog.rename_magazine(&magazine_id, name.clone()))?;

        tracing::info!(
            magazine_id = %magazine_id,
            name = %name,
            "Magazine renamed"
        );

        Ok(())
    }
}

// ============================================================================
// ChangeMagazineCategory
// ============================================================================

/// ChangeMagazineCategory Handler
pub struct ChangeMagazineCategoryHandler {
    catalog: Arc<InMemoryCatalog>,
}

impl ChangeMagazineCategoryHandler {
    pub fn new(catalog: Arc<InMemoryCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, command: ChangeMagazineCategory) -> Result<(), ApplicationError> {
        let category = Category::new(command.category)?;
        let magazine_id = MagazineId::from_uuid(command.magazine_id);

        self.catalog
            .write(|catalog| catalog.set_magazine_category(&magazine_id, category.clone()))?;

        tracing::info!(
            magazine_id = %magazine_id,
            category = %category,
            "Magazine category changed"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(catalog: &Arc<InMemoryCatalog>) -> Uuid {
        CreateMagazineHandler::new(catalog.clone())
            .handle(CreateMagazine {
                name: "Vogue".into(),
                category: "Fashion".into(),
            })
            .unwrap()
            .id
    }

    fn name_of(catalog: &InMemoryCatalog, id: Uuid) -> String {
        catalog.read(|c| {
            c.magazine(&MagazineId::from_uuid(id))
                .map(|m| m.name().to_string())
                .unwrap_or_default()
        })
    }

    #[test]
    fn test_create_magazine_validates_name_length() {
        let catalog = InMemoryCatalog::new().arc();
        let handler = CreateMagazineHandler::new(catalog.clone());

        for name in ["V", "Seventeen Letters"] {
            let err = handler
                .handle(CreateMagazine {
                    name: name.into(),
                    category: "Fashion".into(),
                })
                .unwrap_err();
            assert!(err.domain().is_some_and(|e| e.is_validation()));
        }
        assert_eq!(catalog.read(|c| c.magazine_count()), 0);
    }

    #[test]
    fn test_rename_can_repeat_and_rejects_invalid() {
        let catalog = InMemoryCatalog::new().arc();
        let id = create(&catalog);
        let handler = RenameMagazineHandler::new(catalog.clone());

        handler
            .handle(RenameMagazine {
                magazine_id: id,
                name: "Culture".into(),
            })
            .unwrap();
        handler
            .handle(RenameMagazine {
                magazine_id: id,
                name: "Vanity Fair".into(),
            })
            .unwrap();

        let err = handler
            .handle(RenameMagazine {
                magazine_id: id,
                name: "X".into(),
            })
            .unwrap_err();
        assert!(err.domain().is_some_and(|e| e.is_validation()));
        assert_eq!(name_of(&catalog, id), "Vanity Fair");
    }

    #[test]
    fn test_rename_unknown_magazine() {
        let catalog = InMemoryCatalog::new().arc();
        let handler = RenameMagazineHandler::new(catalog);

        let missing = Uuid::new_v4();
        let err = handler
            .handle(RenameMagazine {
                magazine_id: missing,
                name: "Culture".into(),
            })
            .unwrap_err();

        assert!(matches!(err, ApplicationError::NotFound { id, .. } if id == missing));
    }

    #[test]
    fn test_change_category() {
        let catalog = InMemoryCatalog::new().arc();
        let id = create(&catalog);
        let handler = ChangeMagazineCategoryHandler::new(catalog.clone());

        let err = handler
            .handle(ChangeMagazineCategory {
                magazine_id: id,
                category: String::new(),
            })
            .unwrap_err();
        assert!(err.domain().is_some_and(|e| e.is_validation()));

        handler
            .handle(ChangeMagazineCategory {
                magazine_id: id,
                category: "Culture".into(),
            })
            .unwrap();

        let category = catalog.read(|c| {
            c.magazine(&MagazineId::from_uuid(id))
                .map(|m| m.category().to_string())
        });
        assert_eq!(category.as_deref(), Some("Culture"));
    }
}
