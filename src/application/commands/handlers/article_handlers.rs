//! Article Command Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::PublishArticle;
use crate::application::error::ApplicationError;
use crate::infrastructure::InMemoryCatalog;

/// 发表文章响应
#[derive(Debug, Clone)]
pub struct PublishArticleResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub magazine_id: Uuid,
    pub title: String,
}

/// PublishArticle Handler
///
/// 句柄种类检查、标题校验和两侧登记在同一次写锁内完成，
/// 任一步失败都不会留下部分修改。
pub struct PublishArticleHandler {
    catalog: Arc<InMemoryCatalog>,
}

impl PublishArticleHandler {
    pub fn new(catalog: Arc<InMemoryCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(
        &self,
        command: PublishArticle,
    ) -> Result<PublishArticleResponse, ApplicationError> {
        let PublishArticle {
            author_id,
            magazine_id,
            title,
        } = command;

        let result = self.catalog.write(|catalog| {
            catalog.create_article_by_handle(author_id, magazine_id, title.clone())
        });

        let article_id = match result {
            Ok(id) => id,
            Err(err) => {
                tracing::debug!(
                    author_id = %author_id,
                    magazine_id = %magazine_id,
                    error = %err,
                    "Article rejected"
                );
                return Err(err.into());
            }
        };

        tracing::info!(
            article_id = %article_id,
            author_id = %author_id,
            magazine_id = %magazine_id,
            title = %title,
            "Article published"
        );

        Ok(PublishArticleResponse {
            id: *article_id.as_uuid(),
            author_id,
            magazine_id,
            title,
        })
    }
}
