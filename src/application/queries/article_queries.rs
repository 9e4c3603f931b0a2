//! Article Queries

use uuid::Uuid;

/// 获取文章详情查询
#[derive(Debug, Clone)]
pub struct GetArticle {
    pub article_id: Uuid,
}
