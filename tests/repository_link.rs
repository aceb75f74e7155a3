use kortlink::AppError;
use kortlink::domain::entities::NewShortLink;
use kortlink::domain::repositories::LinkRepository;
use kortlink::infrastructure::persistence::PgLinkRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_link(short_url: &str, original_url: &str) -> NewShortLink {
    NewShortLink {
        short_url: short_url.to_string(),
        original_url: original_url.to_string(),
    }
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_create_link(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo
        .create(new_link("pg000001", "https://example.com"))
        .await
        .unwrap();

    assert!(link.id > 0);
    assert_eq!(link.short_url, "pg000001");
    assert_eq!(link.original_url, "https://example.com");
    assert_eq!(link.access_count, 0);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_create_duplicate_token_conflicts(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    repo.create(new_link("pg000002", "https://a.com"))
        .await
        .unwrap();

    let result = repo.create(new_link("pg000002", "https://b.com")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_get_original_url(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    repo.create(new_link("pg000003", "https://example.com/x"))
        .await
        .unwrap();

    let url = repo.get_original_url("pg000003").await.unwrap();
    assert_eq!(url, "https://example.com/x");

    let missing = repo.get_original_url("nothere").await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_increment_access_count(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    repo.create(new_link("pg000004", "https://example.com"))
        .await
        .unwrap();

    repo.increment_access_count("pg000004").await.unwrap();
    repo.increment_access_count("pg000004").await.unwrap();

    let stats = repo.get_stats("pg000004").await.unwrap();
    assert_eq!(stats.access_count, 2);
    assert!(stats.updated_at >= stats.created_at);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_increment_missing_token(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.increment_access_count("nothere").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_concurrent_increments_are_not_lost(pool: PgPool) {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    repo.create(new_link("pg000005", "https://example.com"))
        .await
        .unwrap();

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..20 {
        let repo = repo.clone();
        tasks.spawn(async move { repo.increment_access_count("pg000005").await });
    }
    while let Some(result) = tasks.join_next().await {
        result.unwrap().unwrap();
    }

    let stats = repo.get_stats("pg000005").await.unwrap();
    assert_eq!(stats.access_count, 20);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_update_original_url(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    repo.create(new_link("pg000006", "https://old.com"))
        .await
        .unwrap();

    repo.update_original_url("pg000006", "https://new.com")
        .await
        .unwrap();

    let url = repo.get_original_url("pg000006").await.unwrap();
    assert_eq!(url, "https://new.com");

    let missing = repo.update_original_url("nothere", "https://new.com").await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_delete_is_idempotent(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    repo.create(new_link("pg000007", "https://example.com"))
        .await
        .unwrap();

    repo.delete("pg000007").await.unwrap();
    repo.delete("pg000007").await.unwrap();

    let result = repo.get_stats("pg000007").await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_list_all_ordered_by_id(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.list_all().await.unwrap().is_empty());

    repo.create(new_link("pg000008", "https://a.com"))
        .await
        .unwrap();
    repo.create(new_link("pg000009", "https://b.com"))
        .await
        .unwrap();

    let links = repo.list_all().await.unwrap();
    let tokens: Vec<_> = links.iter().map(|l| l.short_url.as_str()).collect();
    assert_eq!(tokens, vec!["pg000008", "pg000009"]);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_health_check(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.health_check().await);
}
