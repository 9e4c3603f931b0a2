//! Catalog - 实体仓
//!
//! 持有全部作者、杂志和文章。实体之间只通过 ID 相互引用，
//! 派生查询通过借用 Catalog 的只读视图（`AuthorView` 等）完成。

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use super::article::{Article, ArticleId};
use super::author::{Author, AuthorId};
use super::magazine::{Category, Magazine, MagazineId, MagazineName};
use super::{DomainError, EntityKind};

/// 在同一本杂志上发表超过该数量文章的作者视为高产作者
pub const PROLIFIC_THRESHOLD: usize = 2;

#[derive(Debug, Default)]
pub struct Catalog {
    authors: HashMap<AuthorId, Author>,
    magazines: HashMap<MagazineId, Magazine>,
    articles: HashMap<ArticleId, Article>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记新作者
    ///
    /// ID 已存在时返回 `AlreadyExists`，不会覆盖已登记的实体；
    /// 在 Catalog 之外发表过文章的作者返回 `UnregisteredArticles`。
    pub fn add_author(&mut self, author: Author) -> Result<AuthorId, DomainError> {
        let id = *author.id();
        Self::ensure_fresh(
            EntityKind::Author,
            *id.as_uuid(),
            self.authors.contains_key(&id),
            author.articles(),
        )?;
        self.authors.insert(id, author);
        Ok(id)
    }

    /// 登记新杂志，规则同 `add_author`
    pub fn add_magazine(&mut self, magazine: Magazine) -> Result<MagazineId, DomainError> {
        let id = *magazine.id();
        Self::ensure_fresh(
            EntityKind::Magazine,
            *id.as_uuid(),
            self.magazines.contains_key(&id),
            magazine.articles(),
        )?;
        self.magazines.insert(id, magazine);
        Ok(id)
    }

    /// 创建文章并登记到作者与杂志两侧
    pub fn create_article(
        &mut self,
        author_id: &AuthorId,
        magazine_id: &MagazineId,
        title: impl Into<String>,
    ) -> Result<ArticleId, DomainError> {
        let author = self
            .authors
            .get_mut(author_id)
            .ok_or(DomainError::NotFound {
                kind: EntityKind::Author,
                id: *author_id.as_uuid(),
            })?;
        let magazine = self
            .magazines
            .get_mut(magazine_id)
            .ok_or(DomainError::NotFound {
                kind: EntityKind::Magazine,
                id: *magazine_id.as_uuid(),
            })?;

        let article = author.create_article(magazine, title)?;
        let id = *article.id();
        self.articles.insert(id, article);
        Ok(id)
    }

    /// 以未区分类型的句柄创建文章
    ///
    /// 句柄指向其他种类的实体时返回 `TypeMismatch`，找不到时返回 `NotFound`。
    /// 两种情况下都不修改任何实体。
    pub fn create_article_by_handle(
        &mut self,
        author: Uuid,
        magazine: Uuid,
        title: impl Into<String>,
    ) -> Result<ArticleId, DomainError> {
        self.expect_kind(author, EntityKind::Author)?;
        self.expect_kind(magazine, EntityKind::Magazine)?;
        self.create_article(
            &AuthorId::from_uuid(author),
            &MagazineId::from_uuid(magazine),
            title,
        )
    }

    pub fn rename_magazine(
        &mut self,
        id: &MagazineId,
        name: MagazineName,
    ) -> Result<(), DomainError> {
        self.magazine_entry(id)?.rename(name);
        Ok(())
    }

    pub fn set_magazine_category(
        &mut self,
        id: &MagazineId,
        category: Category,
    ) -> Result<(), DomainError> {
        self.magazine_entry(id)?.set_category(category);
        Ok(())
    }

    /// 句柄对应的实体种类
    pub fn kind_of(&self, id: &Uuid) -> Option<EntityKind> {
        if self.authors.contains_key(&AuthorId::from_uuid(*id)) {
            Some(EntityKind::Author)
        } else if self.magazines.contains_key(&MagazineId::from_uuid(*id)) {
            Some(EntityKind::Magazine)
        } else if self.articles.contains_key(&ArticleId::from_uuid(*id)) {
            Some(EntityKind::Article)
        } else {
            None
        }
    }

    pub fn author(&self, id: &AuthorId) -> Option<AuthorView<'_>> {
        self.authors.get(id).map(|author| AuthorView {
            catalog: self,
            author,
        })
    }

    pub fn magazine(&self, id: &MagazineId) -> Option<MagazineView<'_>> {
        self.magazines.get(id).map(|magazine| MagazineView {
            catalog: self,
            magazine,
        })
    }

    pub fn article(&self, id: &ArticleId) -> Option<ArticleView<'_>> {
        let article = self.articles.get(id)?;
        let author = self.authors.get(article.author_id())?;
        let magazine = self.magazines.get(article.magazine_id())?;
        Some(ArticleView {
            catalog: self,
            article,
            author,
            magazine,
        })
    }

    pub fn authors(&self) -> impl Iterator<Item = AuthorView<'_>> {
        self.authors.values().map(move |author| AuthorView {
            catalog: self,
            author,
        })
    }

    pub fn magazines(&self) -> impl Iterator<Item = MagazineView<'_>> {
        self.magazines.values().map(move |magazine| MagazineView {
            catalog: self,
            magazine,
        })
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    pub fn magazine_count(&self) -> usize {
        self.magazines.len()
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    fn ensure_fresh(
        kind: EntityKind,
        id: Uuid,
        present: bool,
        articles: &[ArticleId],
    ) -> Result<(), DomainError> {
        if present {
            return Err(DomainError::AlreadyExists { kind, id });
        }
        if !articles.is_empty() {
            return Err(DomainError::UnregisteredArticles {
                kind,
                id,
                count: articles.len(),
            });
        }
        Ok(())
    }

    fn expect_kind(&self, id: Uuid, expected: EntityKind) -> Result<(), DomainError> {
        match self.kind_of(&id) {
            Some(found) if found == expected => Ok(()),
            Some(found) => Err(DomainError::TypeMismatch { expected, found }),
            None => Err(DomainError::NotFound { kind: expected, id }),
        }
    }

    fn magazine_entry(&mut self, id: &MagazineId) -> Result<&mut Magazine, DomainError> {
        self.magazines.get_mut(id).ok_or(DomainError::NotFound {
            kind: EntityKind::Magazine,
            id: *id.as_uuid(),
        })
    }

    fn articles_of<'a>(&'a self, ids: &'a [ArticleId]) -> impl Iterator<Item = ArticleView<'a>> {
        ids.iter().filter_map(move |id| self.article(id))
    }
}

/// 作者只读视图
#[derive(Debug, Clone, Copy)]
pub struct AuthorView<'a> {
    catalog: &'a Catalog,
    author: &'a Author,
}

impl<'a> AuthorView<'a> {
    pub fn entity(&self) -> &'a Author {
        self.author
    }

    pub fn id(&self) -> &'a AuthorId {
        self.author.id()
    }

    pub fn name(&self) -> &'a str {
        self.author.name().as_str()
    }

    /// 按发表顺序排列的文章
    pub fn articles(&self) -> Vec<ArticleView<'a>> {
        self.catalog.articles_of(self.author.articles()).collect()
    }

    /// 发表过文章的杂志（去重，按首次出现顺序）
    pub fn magazines(&self) -> Vec<MagazineView<'a>> {
        let mut seen = HashSet::new();
        self.articles()
            .into_iter()
            .map(|article| article.magazine())
            .filter(|magazine| seen.insert(*magazine.id()))
            .collect()
    }

    /// 涉及的杂志分类（去重）
    pub fn topic_areas(&self) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        self.articles()
            .into_iter()
            .map(|article| article.magazine().category())
            .filter(|category| seen.insert(*category))
            .collect()
    }
}

/// 杂志只读视图
#[derive(Debug, Clone, Copy)]
pub struct MagazineView<'a> {
    catalog: &'a Catalog,
    magazine: &'a Magazine,
}

impl<'a> MagazineView<'a> {
    pub fn entity(&self) -> &'a Magazine {
        self.magazine
    }

    pub fn id(&self) -> &'a MagazineId {
        self.magazine.id()
    }

    pub fn name(&self) -> &'a str {
        self.magazine.name().as_str()
    }

    pub fn category(&self) -> &'a str {
        self.magazine.category().as_str()
    }

    pub fn articles(&self) -> Vec<ArticleView<'a>> {
        self.catalog.articles_of(self.magazine.articles()).collect()
    }

    /// 在本杂志发表过文章的作者（去重）
    pub fn contributors(&self) -> Vec<AuthorView<'a>> {
        let mut seen = HashSet::new();
        self.articles()
            .into_iter()
            .map(|article| article.author())
            .filter(|author| seen.insert(*author.id()))
            .collect()
    }

    pub fn article_titles(&self) -> Vec<&'a str> {
        self.articles()
            .into_iter()
            .map(|article| article.title())
            .collect()
    }

    /// 在本杂志发表文章数严格大于 `PROLIFIC_THRESHOLD` 的作者
    pub fn prolific_contributors(&self) -> Vec<AuthorView<'a>> {
        let articles = self.articles();

        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        for article in &articles {
            *counts.entry(*article.author().id()).or_default() += 1;
        }

        let mut seen = HashSet::new();
        articles
            .into_iter()
            .map(|article| article.author())
            .filter(|author| counts[author.id()] > PROLIFIC_THRESHOLD)
            .filter(|author| seen.insert(*author.id()))
            .collect()
    }
}

/// 文章只读视图
#[derive(Debug, Clone, Copy)]
pub struct ArticleView<'a> {
    catalog: &'a Catalog,
    article: &'a Article,
    author: &'a Author,
    magazine: &'a Magazine,
}

impl<'a> ArticleView<'a> {
    pub fn entity(&self) -> &'a Article {
        self.article
    }

    pub fn id(&self) -> &'a ArticleId {
        self.article.id()
    }

    pub fn title(&self) -> &'a str {
        self.article.title().as_str()
    }

    pub fn author(&self) -> AuthorView<'a> {
        AuthorView {
            catalog: self.catalog,
            author: self.author,
        }
    }

    pub fn magazine(&self) -> MagazineView<'a> {
        MagazineView {
            catalog: self.catalog,
            magazine: self.magazine,
        }
    }
}
