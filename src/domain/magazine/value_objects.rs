//! Magazine Context - Value Objects
use uuid::Uuid;

use crate::domain::bounded_text::{bounded, non_empty};
use crate::domain::DomainError;

/// 杂志名称长度下限（含）
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
/// 杂志名称长度上限（含）
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;

/// 杂志唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MagazineId(Uuid);

impl MagazineId {
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

impl Default for MagazineId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MagazineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 杂志名称
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MagazineName(String);

impl MagazineName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        bounded(
            "magazine name",
            name.into(),
            MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS,
        )
        .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MagazineName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 杂志分类
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category(String);

impl Category {
    pub fn new(category: impl Into<String>) -> Result<Self, DomainError> {
        non_empty("category", category.into()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
