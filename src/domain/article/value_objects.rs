//! Article Context - Value Objects
use uuid::Uuid;

use crate::domain::bounded_text::bounded;
use crate::domain::DomainError;

pub const ARTICLE_TITLE_MIN_CHARS: usize = 5;
pub const ARTICLE_TITLE_MAX_CHARS: usize = 50;

/// 文章唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(Uuid);

impl ArticleId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ArticleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 文章标题，5..=50 个字符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(title: impl Into<String>) -> Result<Self, DomainError> {
        bounded(
            "article title",
            title.into(),
            ARTICLE_TITLE_MIN_CHARS..=ARTICLE_TITLE_MAX_CHARS,
        )
        .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
