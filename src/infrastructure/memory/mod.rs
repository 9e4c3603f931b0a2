//! Memory Layer - In-Memory State Management
//!
//! 以读写锁包装领域层 Catalog，供应用层的命令和查询处理器共享

mod catalog_store;

pub use catalog_store::InMemoryCatalog;
