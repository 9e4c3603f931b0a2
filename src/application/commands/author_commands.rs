//! Author Commands

/// 创建作者命令
#[derive(Debug, Clone)]
pub struct CreateAuthor {
    pub name: String,
}
