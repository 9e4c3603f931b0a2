//! Periodical - 作者 / 杂志 / 文章多对多关系模型
//!
//! 架构设计: DDD + CQRS
//!
//! 领域层 (domain/):
//! - Author / Magazine / Article 三个上下文
//! - Catalog: 持有全部实体，提供派生查询视图
//!
//! 应用层 (application/):
//! - Commands: 创建作者、杂志，修改杂志，发表文章
//! - Queries: 作者、杂志、文章详情及列表
//!
//! 基础设施层 (infrastructure/):
//! - Memory: 以读写锁共享的内存 Catalog

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
pub use domain::{Catalog, DomainError, EntityKind};
pub use infrastructure::InMemoryCatalog;
