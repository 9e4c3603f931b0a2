//! Infrastructure Layer - 基础设施层
//!
//! 提供 Catalog 的共享内存存储

pub mod memory;

pub use memory::InMemoryCatalog;
