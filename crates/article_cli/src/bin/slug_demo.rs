//! Slug repository demo.
//!
//! Saves a plain and a featured article, then retries the plain title to
//! show the duplicate-slug rejection. The error is reported and the run
//! continues to print the store contents.

use article_cli::{fail, parse_args, LogArgs};
use article_core::{ArticleId, ArticleService, ArticleVariant, InMemoryArticleRepository};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "slug_demo", version, about = "Demonstrate slug-keyed article storage")]
struct Cli {
    #[command(flatten)]
    log: LogArgs,
}

const DRAFTS: [(ArticleId, ArticleVariant, &str, &[&str]); 3] = [
    (
        1,
        ArticleVariant::Plain,
        "Encapsulation & visibilité en PHP",
        &["php"],
    ),
    (
        2,
        ArticleVariant::Featured,
        "Lire moins, comprendre plus",
        &["best"],
    ),
    (
        3,
        ArticleVariant::Plain,
        "Encapsulation & visibilité en PHP",
        &[],
    ),
];

fn main() {
    let cli: Cli = parse_args();
    if let Err(err) = cli.log.init() {
        fail(err);
    }

    let mut service = ArticleService::new(InMemoryArticleRepository::new());
    for (id, variant, title, tags) in DRAFTS {
        match service.publish(id, variant, title, tags.iter().copied()) {
            Ok(slug) => println!("saved article {id} as `{slug}`"),
            Err(err) => eprintln!("Error: {err}"),
        }
    }

    println!("Article count: {}", service.count());

    match serde_json::to_string_pretty(&service.list()) {
        Ok(json) => println!("{json}"),
        Err(err) => fail(err),
    }
}
