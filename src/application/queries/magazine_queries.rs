//! Magazine Queries

use uuid::Uuid;

/// 获取杂志详情查询
#[derive(Debug, Clone)]
pub struct GetMagazine {
    pub magazine_id: Uuid,
}

/// 列出所有杂志查询
#[derive(Debug, Clone)]
pub struct ListMagazines;
