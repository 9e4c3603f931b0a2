//! Author Context - Value Objects
use uuid::Uuid;

use crate::domain::bounded_text::non_empty;
use crate::domain::DomainError;

/// 作者唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorId(Uuid);

impl AuthorId {
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

impl Default for AuthorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 作者姓名，至少一个字符
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthorName(String);

impl AuthorName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        non_empty("author name", name.into()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AuthorName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
