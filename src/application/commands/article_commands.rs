//! Article Commands

use uuid::Uuid;

/// 发表文章命令
///
/// `author_id` 和 `magazine_id` 是未区分类型的句柄，处理时校验其实体种类
#[derive(Debug, Clone)]
pub struct PublishArticle {
    pub author_id: Uuid,
    pub magazine_id: Uuid,
    pub title: String,
}
