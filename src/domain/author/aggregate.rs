//! Author Context - Aggregate Root

use chrono::{DateTime, Utc};

use super::{AuthorId, AuthorName};
use crate::domain::article::{Article, ArticleId};
use crate::domain::magazine::Magazine;
use crate::domain::{DomainError, EntityKind};

/// Author 聚合根
///
/// 不变量:
/// - name 创建后不可修改
/// - articles 只追加，且只由 Article 的创建写入
#[derive(Debug, Clone)]
pub struct Author {
    id: AuthorId,
    name: AuthorName,
    articles: Vec<ArticleId>,
    created_at: DateTime<Utc>,
}

impl Author {
    /// 创建新作者
    pub fn new(name: AuthorName) -> Self {
        Self {
            id: AuthorId::new(),
            name,
            articles: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// 尝试修改姓名
    ///
    /// 非法值返回 `Validation`，合法值同样被拒绝并返回 `ImmutableField`。
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        AuthorName::new(name)?;
        tracing::debug!(author_id = %self.id, "Rejected author rename");
        Err(DomainError::immutable(EntityKind::Author, "name"))
    }

    /// 以本作者身份在 `magazine` 上发表文章
    ///
    /// 成功时文章同时登记到本作者和杂志的文章列表中；
    /// 标题校验失败时两边都不会被修改。
    pub fn create_article(
        &mut self,
        magazine: &mut Magazine,
        title: impl Into<String>,
    ) -> Result<Article, DomainError> {
        Article::new(self, magazine, title)
    }

    pub(crate) fn record_article(&mut self, article_id: ArticleId) {
        self.articles.push(article_id);
    }

    // Getters
    pub fn id(&self) -> &AuthorId {
        &self.id
    }

    pub fn name(&self) -> &AuthorName {
        &self.name
    }

    /// 按发表顺序排列的文章 ID
    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
