//! 查询响应中嵌套使用的简要信息

use serde::Serialize;
use uuid::Uuid;

use crate::domain::{ArticleView, AuthorView, MagazineView};

/// 作者简要信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorSummary {
    pub id: Uuid,
    pub name: String,
}

impl From<AuthorView<'_>> for AuthorSummary {
    fn from(view: AuthorView<'_>) -> Self {
        Self {
            id: *view.id().as_uuid(),
            name: view.name().to_string(),
        }
    }
}

/// 杂志简要信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MagazineSummary {
    pub id: Uuid,
    pub name: String,
    pub category: String,
}

impl From<MagazineView<'_>> for MagazineSummary {
    fn from(view: MagazineView<'_>) -> Self {
        Self {
            id: *view.id().as_uuid(),
            name: view.name().to_string(),
            category: view.category().to_string(),
        }
    }
}

/// 文章简要信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleSummary {
    pub id: Uuid,
    pub title: String,
}

impl From<ArticleView<'_>> for ArticleSummary {
    fn from(view: ArticleView<'_>) -> Self {
        Self {
            id: *view.id().as_uuid(),
            title: view.title().to_string(),
        }
    }
}
