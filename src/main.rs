//! Periodical - 演示程序
//!
//! 构建一个小型目录，执行几次命令，然后以 JSON 输出全部杂志与作者

use std::sync::Arc;

use serde::Serialize;

use periodical::application::{
    AuthorResponse, ChangeMagazineCategory, ChangeMagazineCategoryHandler, CreateAuthor,
    CreateAuthorHandler, CreateMagazine, CreateMagazineHandler, ListAuthors, ListAuthorsHandler,
    ListMagazines, ListMagazinesHandler, MagazineResponse, PublishArticle, PublishArticleHandler,
};
use periodical::config::{load_config, print_config};
use periodical::InMemoryCatalog;

#[derive(Serialize)]
struct Report {
    magazines: Vec<MagazineResponse>,
    authors: Vec<AuthorResponse>,
}

fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!("{},periodical={}", config.log.level, config.log.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    print_config(&config);

    let catalog = InMemoryCatalog::new().arc();
    seed(&catalog)?;

    let report = Report {
        magazines: ListMagazinesHandler::new(catalog.clone()).handle(ListMagazines)?,
        authors: ListAuthorsHandler::new(catalog).handle(ListAuthors)?,
    };

    let json = if config.report.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");

    Ok(())
}

fn seed(catalog: &Arc<InMemoryCatalog>) -> anyhow::Result<()> {
    let create_author = CreateAuthorHandler::new(catalog.clone());
    let create_magazine = CreateMagazineHandler::new(catalog.clone());
    let publish = PublishArticleHandler::new(catalog.clone());

    let carry = create_author.handle(CreateAuthor {
        name: "Carry Bradshaw".into(),
    })?;
    let nathaniel = create_author.handle(CreateAuthor {
        name: "Nathaniel Hawthorne".into(),
    })?;

    let vogue = create_magazine.handle(CreateMagazine {
        name: "Vogue".into(),
        category: "Fashion".into(),
    })?;
    let ad = create_magazine.handle(CreateMagazine {
        name: "AD".into(),
        category: "Architecture".into(),
    })?;

    let articles = [
        (carry.id, vogue.id, "How to wear a tutu with style"),
        (carry.id, vogue.id, "Dating life in NYC"),
        (carry.id, vogue.id, "Shoes worth the rent"),
        (carry.id, ad.id, "Apartments with walk-in closets"),
        (nathaniel.id, ad.id, "2023 Eccentric Design Trends"),
    ];
    for (author_id, magazine_id, title) in articles {
        publish.handle(PublishArticle {
            author_id,
            magazine_id,
            title: title.into(),
        })?;
    }

    // 句柄种类错误的请求会被拒绝，且不改变任何实体
    if let Err(err) = publish.handle(PublishArticle {
        author_id: vogue.id,
        magazine_id: vogue.id,
        title: "Not by an author".into(),
    }) {
        tracing::warn!(error = %err, "Publish rejected");
    }

    ChangeMagazineCategoryHandler::new(catalog.clone()).handle(ChangeMagazineCategory {
        magazine_id: ad.id,
        category: "Design".into(),
    })?;

    Ok(())
}
