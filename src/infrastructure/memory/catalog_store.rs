//! In-Memory Catalog Store Implementation

use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::Catalog;

/// 内存目录存储
///
/// 整个 Catalog 由一把读写锁保护，创建文章时对作者和杂志的两次追加
/// 在同一次写锁持有期间完成。
pub struct InMemoryCatalog {
    catalog: RwLock<Catalog>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::with_catalog(Catalog::new())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 在读锁下访问 Catalog
    pub fn read<R>(&self, f: impl FnOnce(&Catalog) -> R) -> R {
        let guard = self.catalog.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// 在写锁下修改 Catalog
    pub fn write<R>(&self, f: impl FnOnce(&mut Catalog) -> R) -> R {
        let mut guard = self.catalog.write().unwrap_or_else(|poisoned| {
            tracing::warn!("Catalog lock poisoned, recovering");
            poisoned.into_inner()
        });
        f(&mut guard)
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::author::{Author, AuthorName};
    use crate::domain::magazine::{Category, Magazine, MagazineName};

    #[test]
    fn test_write_then_read() {
        let store = InMemoryCatalog::new();

        let (author_id, magazine_id) = store.write(|catalog| {
            let a = catalog.add_author(Author::new(AuthorName::new("Carry Bradshaw").unwrap())).unwrap();
            let m = catalog.add_magazine(Magazine::new(
                MagazineName::new("Vogue").unwrap(),
                Category::new("Fashion").unwrap(),
            )).unwrap();
            (a, m)
        });

        store
            .write(|catalog| catalog.create_article(&author_id, &magazine_id, "Valid Title"))
            .unwrap();

        let titles: Vec<String> = store.read(|catalog| {
            catalog
                .magazine(&magazine_id)
                .map(|m| m.article_titles().into_iter().map(String::from).collect::<Vec<_>>())
                .unwrap_or_default()
        });
        assert_eq!(titles, vec!["Valid Title".to_string()]);
    }

    #[test]
    fn test_shared_across_threads() {
        let store = InMemoryCatalog::new().arc();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    store.write(|catalog| {
                        catalog.add_author(Author::new(
                            AuthorName::new(format!("Author {i}")).unwrap(),
                        )).unwrap()
                    })
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.read(|catalog| catalog.author_count()), 4);
    }
}
