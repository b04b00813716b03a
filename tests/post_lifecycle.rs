mod support;

use quill_core::application::commands::posts::{
    CreatePostCommand, DeletePostCommand, PublishPostCommand, UpdatePostCommand,
};
use quill_core::application::error::ApplicationError;
use quill_core::application::queries::posts::GetPostDetailQuery;
use quill_core::domain::errors::DomainError;
use support::{actor, fixed_now, test_context};

#[tokio::test]
async fn new_post_is_a_draft_and_hidden_from_the_published_list() {
    let ctx = test_context().await;
    let author = actor(1);

    let command = CreatePostCommand::builder()
        .title("Hello")
        .body("World")
        .build()
        .unwrap();
    let post = ctx
        .services
        .post_commands
        .create_post(Some(&author), command)
        .await
        .unwrap();

    assert_eq!(post.author_id, 1);
    assert_eq!(post.published_at, None);
    assert_eq!(post.views, 0);
    assert_eq!(post.like_count, 0);
    assert_eq!(post.created_at, fixed_now());

    let drafts = ctx
        .services
        .post_queries
        .list_drafts(Some(&author))
        .await
        .unwrap();
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].id, post.id);

    let published = ctx.services.post_queries.list_published().await.unwrap();
    assert!(published.is_empty());
}

#[tokio::test]
async fn publish_moves_the_post_into_the_published_list() {
    let ctx = test_context().await;
    let author = actor(1);

    let post = ctx
        .services
        .post_commands
        .create_post(
            Some(&author),
            CreatePostCommand::builder()
                .title("Hello")
                .body("World")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    ctx.clock.advance_secs(10);
    let published = ctx
        .services
        .post_commands
        .publish_post(Some(&author), PublishPostCommand { id: post.id })
        .await
        .unwrap();

    assert_eq!(
        published.published_at,
        Some(fixed_now() + chrono::Duration::seconds(10))
    );

    let drafts = ctx
        .services
        .post_queries
        .list_drafts(Some(&author))
        .await
        .unwrap();
    assert!(drafts.is_empty());

    let listed = ctx.services.post_queries.list_published().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, post.id);
}

#[tokio::test]
async fn published_list_orders_most_recent_first() {
    let ctx = test_context().await;
    let author = actor(1);

    let mut ids = Vec::new();
    for title in ["first", "second", "third"] {
        let post = ctx
            .services
            .post_commands
            .create_post(
                Some(&author),
                CreatePostCommand::builder()
                    .title(title)
                    .body("text")
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();
        ids.push(post.id);
    }

    // Publish in creation order with the clock advancing; newest wins.
    for id in &ids {
        ctx.clock.advance_secs(60);
        ctx.services
            .post_commands
            .publish_post(Some(&author), PublishPostCommand { id: *id })
            .await
            .unwrap();
    }

    let listed = ctx.services.post_queries.list_published().await.unwrap();
    let listed_ids: Vec<i64> = listed.iter().map(|p| p.id).collect();
    assert_eq!(listed_ids, vec![ids[2], ids[1], ids[0]]);
}

#[tokio::test]
async fn republishing_refreshes_the_timestamp() {
    let ctx = test_context().await;
    let author = actor(1);

    let post = ctx
        .services
        .post_commands
        .create_post(
            Some(&author),
            CreatePostCommand::builder()
                .title("Hello")
                .body("World")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    let first = ctx
        .services
        .post_commands
        .publish_post(Some(&author), PublishPostCommand { id: post.id })
        .await
        .unwrap();

    ctx.clock.advance_secs(120);
    let second = ctx
        .services
        .post_commands
        .publish_post(Some(&author), PublishPostCommand { id: post.id })
        .await
        .unwrap();

    assert!(second.published_at.unwrap() > first.published_at.unwrap());
}

#[tokio::test]
async fn detail_view_counts_every_read_for_every_caller() {
    let ctx = test_context().await;
    let author = actor(1);
    let reader = actor(2);

    let post = ctx
        .services
        .post_commands
        .create_post(
            Some(&author),
            CreatePostCommand::builder()
                .title("Hello")
                .body("World")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    let first = ctx
        .services
        .post_queries
        .get_post_detail(Some(&author), GetPostDetailQuery { id: post.id })
        .await
        .unwrap();
    assert_eq!(first.post.views, 1);
    assert!(!first.liked_by_caller);

    // Repeat view by the same caller still counts.
    let second = ctx
        .services
        .post_queries
        .get_post_detail(Some(&author), GetPostDetailQuery { id: post.id })
        .await
        .unwrap();
    assert_eq!(second.post.views, 2);

    let third = ctx
        .services
        .post_queries
        .get_post_detail(Some(&reader), GetPostDetailQuery { id: post.id })
        .await
        .unwrap();
    assert_eq!(third.post.views, 3);

    // Anonymous readers count too and never show as likers.
    let fourth = ctx
        .services
        .post_queries
        .get_post_detail(None, GetPostDetailQuery { id: post.id })
        .await
        .unwrap();
    assert_eq!(fourth.post.views, 4);
    assert!(!fourth.liked_by_caller);
}

#[tokio::test]
async fn update_edits_title_and_body_but_not_publish_state() {
    let ctx = test_context().await;
    let author = actor(1);
    let other = actor(2);

    let post = ctx
        .services
        .post_commands
        .create_post(
            Some(&author),
            CreatePostCommand::builder()
                .title("Hello")
                .body("World")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    // Any logged-in caller may edit; there is no ownership check.
    let updated = ctx
        .services
        .post_commands
        .update_post(
            Some(&other),
            UpdatePostCommand {
                id: post.id,
                title: Some("Hello again".into()),
                body: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Hello again");
    assert_eq!(updated.body, "World");
    assert_eq!(updated.author_id, 1);
    assert_eq!(updated.published_at, None);
}

#[tokio::test]
async fn delete_removes_the_post() {
    let ctx = test_context().await;
    let author = actor(1);

    let post = ctx
        .services
        .post_commands
        .create_post(
            Some(&author),
            CreatePostCommand::builder()
                .title("Hello")
                .body("World")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    ctx.services
        .post_commands
        .delete_post(Some(&author), DeletePostCommand { id: post.id })
        .await
        .unwrap();

    let err = ctx
        .services
        .post_queries
        .get_post_detail(Some(&author), GetPostDetailQuery { id: post.id })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn lifecycle_operations_fail_not_found_for_missing_posts() {
    let ctx = test_context().await;
    let author = actor(1);

    let err = ctx
        .services
        .post_commands
        .publish_post(Some(&author), PublishPostCommand { id: 999 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let err = ctx
        .services
        .post_commands
        .update_post(
            Some(&author),
            UpdatePostCommand {
                id: 999,
                title: Some("x".into()),
                body: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let err = ctx
        .services
        .post_commands
        .delete_post(Some(&author), DeletePostCommand { id: 999 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn mutations_require_a_logged_in_caller() {
    let ctx = test_context().await;

    let err = ctx
        .services
        .post_commands
        .create_post(
            None,
            CreatePostCommand::builder()
                .title("Hello")
                .body("World")
                .build()
                .unwrap(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthenticated(_)));

    let err = ctx
        .services
        .post_queries
        .list_drafts(None)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthenticated(_)));
}

#[tokio::test]
async fn oversized_title_is_rejected_before_persistence() {
    let ctx = test_context().await;
    let author = actor(1);

    let err = ctx
        .services
        .post_commands
        .create_post(
            Some(&author),
            CreatePostCommand::builder()
                .title("t".repeat(101))
                .body("World")
                .build()
                .unwrap(),
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));

    let drafts = ctx
        .services
        .post_queries
        .list_drafts(Some(&author))
        .await
        .unwrap();
    assert!(drafts.is_empty());
}

#[tokio::test]
async fn drafts_list_is_oldest_first_across_authors() {
    let ctx = test_context().await;
    let alice = actor(1);
    let bob = actor(2);

    let first = ctx
        .services
        .post_commands
        .create_post(
            Some(&alice),
            CreatePostCommand::builder()
                .title("alice draft")
                .body("text")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    ctx.clock.advance_secs(5);
    let second = ctx
        .services
        .post_commands
        .create_post(
            Some(&bob),
            CreatePostCommand::builder()
                .title("bob draft")
                .body("text")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    // All drafts are visible to any logged-in caller, oldest first.
    let drafts = ctx
        .services
        .post_queries
        .list_drafts(Some(&bob))
        .await
        .unwrap();
    let ids: Vec<i64> = drafts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}
