//! Article Context - Entity

use chrono::{DateTime, Utc};

use super::{ArticleId, ArticleTitle};
use crate::domain::author::{Author, AuthorId};
use crate::domain::magazine::{Magazine, MagazineId};
use crate::domain::{DomainError, EntityKind};

/// 文章 - 作者与杂志之间的关联实体
///
/// 不变量:
/// - 每篇文章恰好出现在其作者和其杂志的文章列表中，不出现在其他地方
/// - title、author、magazine 创建后均不可修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id: ArticleId,
    author: AuthorId,
    magazine: MagazineId,
    title: ArticleTitle,
    created_at: DateTime<Utc>,
}

impl Article {
    /// 创建文章并登记到作者与杂志两侧
    ///
    /// 先校验标题，校验失败时不修改任何一侧。
    pub fn new(
        author: &mut Author,
        magazine: &mut Magazine,
        title: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let title = ArticleTitle::new(title)?;
        Ok(Self::publish(author, magazine, title))
    }

    /// 用已校验的标题创建文章
    pub fn publish(author: &mut Author, magazine: &mut Magazine, title: ArticleTitle) -> Self {
        let article = Self {
            id: ArticleId::new(),
            author: *author.id(),
            magazine: *magazine.id(),
            title,
            created_at: Utc::now(),
        };

        author.record_article(article.id);
        magazine.record_article(article.id);

        tracing::debug!(
            article_id = %article.id,
            author_id = %article.author,
            magazine_id = %article.magazine,
            "Article registered"
        );

        article
    }

    /// 尝试修改标题
    ///
    /// 非法值返回 `Validation`，合法值返回 `ImmutableField`。
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), DomainError> {
        ArticleTitle::new(title)?;
        tracing::debug!(article_id = %self.id, "Rejected article retitle");
        Err(DomainError::immutable(EntityKind::Article, "title"))
    }

    // Getters
    pub fn id(&self) -> &ArticleId {
        &self.id
    }

    pub fn author_id(&self) -> &AuthorId {
        &self.author
    }

    pub fn magazine_id(&self) -> &MagazineId {
        &self.magazine
    }

    pub fn title(&self) -> &ArticleTitle {
        &self.title
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::author::AuthorName;
    use crate::domain::magazine::{Category, MagazineName};

    fn pair() -> (Author, Magazine) {
        (
            Author::new(AuthorName::new("Nathaniel Hawthorne").unwrap()),
            Magazine::new(
                MagazineName::new("AD").unwrap(),
                Category::new("Architecture").unwrap(),
            ),
        )
    }

    #[test]
    fn test_title_length_bounds() {
        let too_long = "x".repeat(51);
        let longest = "x".repeat(50);

        for bad in ["", "Four", too_long.as_str()] {
            assert!(ArticleTitle::new(bad).unwrap_err().is_validation());
        }
        for good in ["Fives", "Dating life in NYC", longest.as_str()] {
            assert_eq!(ArticleTitle::new(good).unwrap().as_str(), good);
        }
    }

    #[test]
    fn test_title_is_immutable() {
        let (mut author, mut magazine) = pair();
        let mut article = Article::new(&mut author, &mut magazine, "Dating life in NYC").unwrap();

        let err = article.set_title("Some other valid title").unwrap_err();
        assert!(err.is_immutable_field());

        let err = article.set_title("bad").unwrap_err();
        assert!(err.is_validation());

        assert_eq!(article.title().as_str(), "Dating life in NYC");
    }

    #[test]
    fn test_every_article_appears_once_on_each_side() {
        let (mut author, mut magazine) = pair();
        let first = Article::new(&mut author, &mut magazine, "Title One").unwrap();
        let second = author.create_article(&mut magazine, "Title Two").unwrap();

        assert_eq!(author.articles(), &[*first.id(), *second.id()]);
        assert_eq!(magazine.articles(), &[*first.id(), *second.id()]);
    }
}
