//! Score consistency against a real PostgreSQL instance.
//!
//! Run with: cargo test -p engagement-service -- --ignored

mod common;

use common::{delete_content, seed_content, start_postgres, SeedContent};
use engagement_service::db::{content_repo, like_repo};
use engagement_service::services::{EngagementAggregator, InteractionService, ScoreDelta};
use engagement_service::AppError;
use futures::future::join_all;
use uuid::Uuid;

async fn assert_consistent(pool: &sqlx::PgPool, content_id: Uuid) -> i64 {
    let audit = EngagementAggregator::new()
        .audit(pool, content_id)
        .await
        .expect("audit score");
    assert_eq!(
        audit.drift(),
        0,
        "stored score {} drifted from likes={} comments={}",
        audit.stored_score,
        audit.like_count,
        audit.comment_count
    );
    audit.stored_score
}

#[tokio::test]
#[ignore = "Requires Docker"]
async fn test_like_toggle_sequence() {
    let db = start_postgres().await;
    let service = InteractionService::new(db.pool.clone());
    let content_id = seed_content(&db.pool, SeedContent::default()).await;
    let user = Uuid::new_v4();

    let first = service.toggle_like(user, content_id).await.unwrap();
    assert!(first.liked);
    assert_eq!(first.engagement_score, 1);

    let second = service.toggle_like(user, content_id).await.unwrap();
    assert!(!second.liked);
    assert_eq!(second.engagement_score, 0);

    let third = service.toggle_like(user, content_id).await.unwrap();
    assert!(third.liked);
    assert_eq!(third.engagement_score, 1);

    let status = service.like_status(user, content_id).await.unwrap();
    assert!(status.liked);
    assert_eq!(status.like_count, 1);

    assert_eq!(assert_consistent(&db.pool, content_id).await, 1);

    let stored = content_repo::find_content(&db.pool, content_id)
        .await
        .unwrap()
        .expect("content item");
    assert_eq!(stored.engagement_score, 1);
    assert_eq!(stored.title, "Untitled goal");
}

#[tokio::test]
#[ignore = "Requires Docker"]
async fn test_comments_weigh_two_points() {
    let db = start_postgres().await;
    let service = InteractionService::new(db.pool.clone());
    let content_id = seed_content(&db.pool, SeedContent::default()).await;
    let author = Uuid::new_v4();

    service.toggle_like(author, content_id).await.unwrap();
    let first = service
        .create_comment(author, content_id, "Great plan")
        .await
        .unwrap();
    service
        .create_comment(Uuid::new_v4(), content_id, "  Keep going  ")
        .await
        .unwrap();
    assert_eq!(assert_consistent(&db.pool, content_id).await, 5);

    service.delete_comment(author, first.id).await.unwrap();
    assert_eq!(assert_consistent(&db.pool, content_id).await, 3);

    let comments = service
        .list_comments(
            content_id,
            engagement_service::services::Pagination { limit: 10, offset: 0 },
        )
        .await
        .unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].body, "Keep going");
}

#[tokio::test]
#[ignore = "Requires Docker"]
async fn test_delete_comment_of_other_user_is_not_found() {
    let db = start_postgres().await;
    let service = InteractionService::new(db.pool.clone());
    let content_id = seed_content(&db.pool, SeedContent::default()).await;

    let comment = service
        .create_comment(Uuid::new_v4(), content_id, "mine")
        .await
        .unwrap();

    let err = service
        .delete_comment(Uuid::new_v4(), comment.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(assert_consistent(&db.pool, content_id).await, 2);
}

#[tokio::test]
#[ignore = "Requires Docker"]
async fn test_interactions_on_missing_content_are_rejected() {
    let db = start_postgres().await;
    let service = InteractionService::new(db.pool.clone());
    let missing = Uuid::new_v4();
    let user = Uuid::new_v4();

    assert!(matches!(
        service.toggle_like(user, missing).await.unwrap_err(),
        AppError::NotFound(_)
    ));
    assert!(matches!(
        service.create_comment(user, missing, "hello").await.unwrap_err(),
        AppError::NotFound(_)
    ));

    let likes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM content_likes")
        .fetch_one(&db.pool)
        .await
        .unwrap();
    let comments: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM content_comments")
        .fetch_one(&db.pool)
        .await
        .unwrap();
    assert_eq!(likes, 0);
    assert_eq!(comments, 0);
}

#[tokio::test]
#[ignore = "Requires Docker"]
async fn test_blank_comment_is_rejected_without_side_effects() {
    let db = start_postgres().await;
    let service = InteractionService::new(db.pool.clone());
    let content_id = seed_content(&db.pool, SeedContent::default()).await;

    let err = service
        .create_comment(Uuid::new_v4(), content_id, "   ")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(assert_consistent(&db.pool, content_id).await, 0);
}

#[tokio::test]
#[ignore = "Requires Docker"]
async fn test_concurrent_likes_from_distinct_users() {
    let db = start_postgres().await;
    let service = InteractionService::new(db.pool.clone());
    let content_id = seed_content(&db.pool, SeedContent::default()).await;

    let users: Vec<Uuid> = (0..20).map(|_| Uuid::new_v4()).collect();
    let results = join_all(users.iter().map(|user| {
        let service = service.clone();
        let user = *user;
        async move { service.toggle_like(user, content_id).await }
    }))
    .await;

    for result in results {
        assert!(result.unwrap().liked);
    }
    assert_eq!(assert_consistent(&db.pool, content_id).await, 20);
}

#[tokio::test]
#[ignore = "Requires Docker"]
async fn test_concurrent_likes_from_same_user_count_once() {
    let db = start_postgres().await;
    let service = InteractionService::new(db.pool.clone());
    let content_id = seed_content(&db.pool, SeedContent::default()).await;
    let user = Uuid::new_v4();

    let results = join_all((0..8).map(|_| {
        let service = service.clone();
        async move { service.toggle_like(user, content_id).await }
    }))
    .await;

    for result in results {
        result.unwrap();
    }
    let score = assert_consistent(&db.pool, content_id).await;
    assert!(score == 0 || score == 1, "score {} exceeds one like", score);
}

#[tokio::test]
#[ignore = "Requires Docker"]
async fn test_like_racing_uncommitted_like_reports_liked() {
    let db = start_postgres().await;
    let service = InteractionService::new(db.pool.clone());
    let content_id = seed_content(&db.pool, SeedContent::default()).await;
    let user = Uuid::new_v4();

    // Hold an uncommitted like from the same user.
    let mut tx = db.pool.begin().await.unwrap();
    like_repo::insert_like(&mut *tx, content_id, user)
        .await
        .unwrap()
        .expect("like inserted");
    EngagementAggregator::new()
        .apply_delta(&mut *tx, content_id, ScoreDelta::LikeAdded)
        .await
        .unwrap();

    let racing = tokio::spawn({
        let service = service.clone();
        async move { service.toggle_like(user, content_id).await }
    });

    // The racing insert waits on the unique key held by the open transaction.
    tokio::time::sleep(std::time::Duration::from_millis(300)).await;
    assert!(!racing.is_finished());

    tx.commit().await.unwrap();

    let response = racing.await.unwrap().unwrap();
    assert!(response.liked);
    assert_eq!(response.engagement_score, 1);
    assert_eq!(assert_consistent(&db.pool, content_id).await, 1);
}

#[tokio::test]
#[ignore = "Requires Docker"]
async fn test_deleting_content_cascades_interactions() {
    let db = start_postgres().await;
    let service = InteractionService::new(db.pool.clone());
    let content_id = seed_content(&db.pool, SeedContent::default()).await;
    let user = Uuid::new_v4();

    service.toggle_like(user, content_id).await.unwrap();
    service.create_comment(user, content_id, "bye").await.unwrap();

    delete_content(&db.pool, content_id).await;

    let remaining: i64 = sqlx::query_scalar(
        "SELECT (SELECT COUNT(*) FROM content_likes WHERE content_id = $1) \
         + (SELECT COUNT(*) FROM content_comments WHERE content_id = $1)",
    )
    .bind(content_id)
    .fetch_one(&db.pool)
    .await
    .unwrap();
    assert_eq!(remaining, 0);
    assert!(content_repo::find_content(&db.pool, content_id)
        .await
        .unwrap()
        .is_none());

    assert!(matches!(
        service.like_status(user, content_id).await.unwrap_err(),
        AppError::NotFound(_)
    ));
}
