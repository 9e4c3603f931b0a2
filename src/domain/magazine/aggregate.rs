//! Magazine Context - Aggregate Root

use chrono::{DateTime, Utc};

use super::{Category, MagazineId, MagazineName};
use crate::domain::article::ArticleId;

/// Magazine 聚合根
///
/// 不变量:
/// - name 长度始终在 2..=16 个字符之间
/// - category 始终非空
/// - articles 只追加，且只由 Article 的创建写入
#[derive(Debug, Clone)]
pub struct Magazine {
    id: MagazineId,
    name: MagazineName,
    category: Category,
    articles: Vec<ArticleId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Magazine {
    /// 创建新杂志
    pub fn new(name: MagazineName, category: Category) -> Self {
        let now = Utc::now();
        Self {
            id: MagazineId::new(),
            name,
            category,
            articles: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 更新杂志名称
    pub fn rename(&mut self, name: MagazineName) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// 更新分类
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
        self.updated_at = Utc::now();
    }

    pub(crate) fn record_article(&mut self, article_id: ArticleId) {
        self.articles.push(article_id);
        self.updated_at = Utc::now();
    }

    // Getters
    pub fn id(&self) -> &MagazineId {
        &self.id
    }

    pub fn name(&self) -> &MagazineName {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// 按发表顺序排列的文章 ID
    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magazine_creation() {
        let magazine = Magazine::new(
            MagazineName::new("Vogue").unwrap(),
            Category::new("Fashion").unwrap(),
        );

        assert_eq!(magazine.name().as_str(), "Vogue");
        assert_eq!(magazine.category().as_str(), "Fashion");
        assert!(magazine.articles().is_empty());
    }

    #[test]
    fn test_name_length_bounds() {
        for bad in ["", "V", "New Yorker Magazine"] {
            let err = MagazineName::new(bad).unwrap_err();
            assert!(err.is_validation(), "{bad:?} should be rejected");
        }
        for good in ["GQ", "The New Yorker", "Sixteen chars ok"] {
            let name = MagazineName::new(good).unwrap();
            assert_eq!(name.as_str(), good);
        }
    }

    #[test]
    fn test_name_and_category_can_be_reset() {
        let mut magazine = Magazine::new(
            MagazineName::new("Vogue").unwrap(),
            Category::new("Fashion").unwrap(),
        );

        magazine.rename(MagazineName::new("Culture").unwrap());
        magazine.rename(MagazineName::new("Vanity Fair").unwrap());
        magazine.set_category(Category::new("Culture").unwrap());

        assert_eq!(magazine.name().as_str(), "Vanity Fair");
        assert_eq!(magazine.category().as_str(), "Culture");
    }

    #[test]
    fn test_empty_category_rejected() {
        assert!(Category::new("").unwrap_err().is_validation());
    }
}
