//! Domain Errors
//!
//! 三个实体共享的错误类型

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// 实体种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Author,
    Magazine,
    Article,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Author => "Author",
            Self::Magazine => "Magazine",
            Self::Article => "Article",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// 字段值不满足类型/长度/非空规则，写入未生效
    #[error("无效的 {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// 创建后不可修改的字段
    #[error("{entity}.{field} 创建后不可修改")]
    ImmutableField {
        entity: EntityKind,
        field: &'static str,
    },

    #[error("类型不匹配: 期望 {expected}, 实际为 {found}")]
    TypeMismatch {
        expected: EntityKind,
        found: EntityKind,
    },

    #[error("{kind} 不存在: {id}")]
    NotFound { kind: EntityKind, id: Uuid },

    #[error("{kind} 已存在: {id}")]
    AlreadyExists { kind: EntityKind, id: Uuid },

    /// 实体携带的文章不在同一个 Catalog 中
    #[error("{kind} {id} 携带 {count} 篇未登记的文章")]
    UnregisteredArticles {
        kind: EntityKind,
        id: Uuid,
        count: usize,
    },
}

impl DomainError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn immutable(entity: EntityKind, field: &'static str) -> Self {
        Self::ImmutableField { entity, field }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_immutable_field(&self) -> bool {
        matches!(self, Self::ImmutableField { .. })
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }
}
