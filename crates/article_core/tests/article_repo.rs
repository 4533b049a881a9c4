use article_core::{
    Article, ArticleRepository, ArticleService, ArticleServiceError, ArticleValidationError,
    ArticleVariant, InMemoryArticleRepository, RepoError,
};

#[test]
fn save_and_find_by_slug() {
    let mut repo = InMemoryArticleRepository::new();
    let article = Article::from_title(1, "Intro à Laravel").unwrap();
    repo.save(article.clone()).unwrap();

    assert_eq!(repo.count(), 1);
    assert_eq!(repo.find_by_slug("intro-a-laravel"), Some(&article));
    assert_eq!(repo.find_by_slug("missing"), None);
}

#[test]
fn duplicate_slug_is_rejected_without_mutation() {
    let mut repo = InMemoryArticleRepository::new();
    let first = Article::from_title(1, "Encapsulation & visibilité en PHP").unwrap();
    repo.save(first.clone()).unwrap();

    let clash = Article::from_title(3, "encapsulation visibilite en php").unwrap();
    let err = repo.save(clash).unwrap_err();

    assert_eq!(
        err,
        RepoError::DuplicateSlug {
            slug: "encapsulation-visibilite-en-php".to_string(),
            existing_id: 1,
        }
    );
    assert_eq!(repo.count(), 1);
    assert_eq!(
        repo.find_by_slug("encapsulation-visibilite-en-php"),
        Some(&first)
    );
}

#[test]
fn same_title_plain_and_featured_coexist_third_plain_collides() {
    let mut repo = InMemoryArticleRepository::new();
    repo.save(Article::from_title(1, "Same Title").unwrap())
        .unwrap();
    repo.save(Article::featured(2, "Same Title").unwrap())
        .unwrap();

    let err = repo
        .save(Article::from_title(3, "Same Title").unwrap())
        .unwrap_err();
    assert!(matches!(err, RepoError::DuplicateSlug { existing_id: 1, .. }));
    assert_eq!(repo.count(), 2);
    assert_eq!(repo.slugs(), vec!["same-title", "featured-same-title"]);
}

#[test]
fn find_by_slug_has_no_side_effects() {
    let mut repo = InMemoryArticleRepository::new();
    repo.save(Article::from_title(1, "Only one").unwrap())
        .unwrap();

    for _ in 0..3 {
        assert!(repo.find_by_slug("only-one").is_some());
        assert!(repo.find_by_slug("nope").is_none());
    }
    assert_eq!(repo.count(), 1);
}

#[test]
fn service_publish_reports_both_error_kinds() {
    let mut service = ArticleService::new(InMemoryArticleRepository::new());

    let slug = service
        .publish(1, ArticleVariant::Plain, "Lire moins", ["book"])
        .unwrap();
    assert_eq!(slug, "lire-moins");

    let invalid = service
        .publish(0, ArticleVariant::Plain, "Zero", Vec::<String>::new())
        .unwrap_err();
    assert_eq!(
        invalid,
        ArticleServiceError::InvalidArgument(ArticleValidationError::NonPositiveId)
    );

    let duplicate = service
        .publish(2, ArticleVariant::Plain, "LIRE  moins!", Vec::<String>::new())
        .unwrap_err();
    assert!(matches!(
        duplicate,
        ArticleServiceError::Repo(RepoError::DuplicateSlug { .. })
    ));

    assert_eq!(service.count(), 1);
    assert_eq!(service.find_by_slug("lire-moins").unwrap().tags(), ["book"]);
}

#[test]
fn service_list_follows_save_order() {
    let mut service = ArticleService::new(InMemoryArticleRepository::new());
    service
        .save(Article::featured(2, "Beta").unwrap())
        .unwrap();
    service
        .save(Article::from_title(1, "Alpha").unwrap())
        .unwrap();

    let ids: Vec<u64> = service.list().iter().map(|a| a.id()).collect();
    assert_eq!(ids, vec![2, 1]);

    let repo = service.into_inner();
    assert_eq!(repo.count(), 2);
}
