//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;
use uuid::Uuid;

use crate::domain::DomainError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: Uuid,
    },

    /// 领域规则错误（校验失败、不可变字段、类型不匹配）
    #[error(transparent)]
    Domain(DomainError),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: Uuid) -> Self {
        Self::NotFound { resource_type, id }
    }

    /// 底层领域错误（NotFound 时为 None）
    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(err) => Some(err),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { kind, id } => Self::not_found(kind.as_str(), id),
            other => Self::Domain(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntityKind;

    #[test]
    fn test_domain_not_found_maps_to_not_found() {
        let id = Uuid::new_v4();
        let err = ApplicationError::from(DomainError::NotFound {
            kind: EntityKind::Magazine,
            id,
        });

        assert!(matches!(
            err,
            ApplicationError::NotFound { resource_type: "Magazine", id: found } if found == id
        ));
        assert_eq!(err.to_string(), format!("Magazine not found: {id}"));
    }

    #[test]
    fn test_other_domain_errors_are_wrapped() {
        let err = ApplicationError::from(DomainError::immutable(EntityKind::Author, "name"));
        assert!(err.domain().is_some_and(DomainError::is_immutable_field));
    }
}
