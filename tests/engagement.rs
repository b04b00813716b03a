mod support;

use quill_core::application::commands::engagement::ToggleLikeCommand;
use quill_core::application::commands::posts::CreatePostCommand;
use quill_core::application::error::ApplicationError;
use quill_core::application::queries::posts::GetPostDetailQuery;
use support::{actor, test_context};

async fn seeded_post(ctx: &support::TestContext) -> i64 {
    let author = actor(1);
    ctx.services
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
        .unwrap()
        .id
}

#[tokio::test]
async fn toggle_adds_then_removes_the_like() {
    let ctx = test_context().await;
    let reader = actor(2);
    let post_id = seeded_post(&ctx).await;

    let liked = ctx
        .services
        .engagement
        .toggle_like(Some(&reader), ToggleLikeCommand { post_id })
        .await
        .unwrap();
    assert_eq!(liked.like_count, 1);

    let detail = ctx
        .services
        .post_queries
        .get_post_detail(Some(&reader), GetPostDetailQuery { id: post_id })
        .await
        .unwrap();
    assert!(detail.liked_by_caller);

    let unliked = ctx
        .services
        .engagement
        .toggle_like(Some(&reader), ToggleLikeCommand { post_id })
        .await
        .unwrap();
    assert_eq!(unliked.like_count, 0);

    let detail = ctx
        .services
        .post_queries
        .get_post_detail(Some(&reader), GetPostDetailQuery { id: post_id })
        .await
        .unwrap();
    assert!(!detail.liked_by_caller);
}

#[tokio::test]
async fn double_toggle_restores_the_original_state() {
    let ctx = test_context().await;
    let reader = actor(2);
    let post_id = seeded_post(&ctx).await;

    // Starting from liked, two toggles land back on liked.
    ctx.services
        .engagement
        .toggle_like(Some(&reader), ToggleLikeCommand { post_id })
        .await
        .unwrap();

    ctx.services
        .engagement
        .toggle_like(Some(&reader), ToggleLikeCommand { post_id })
        .await
        .unwrap();
    let restored = ctx
        .services
        .engagement
        .toggle_like(Some(&reader), ToggleLikeCommand { post_id })
        .await
        .unwrap();
    assert_eq!(restored.like_count, 1);
}

#[tokio::test]
async fn likes_are_independent_per_user() {
    let ctx = test_context().await;
    let bob = actor(2);
    let carol = actor(3);
    let post_id = seeded_post(&ctx).await;

    ctx.services
        .engagement
        .toggle_like(Some(&bob), ToggleLikeCommand { post_id })
        .await
        .unwrap();
    let after_carol = ctx
        .services
        .engagement
        .toggle_like(Some(&carol), ToggleLikeCommand { post_id })
        .await
        .unwrap();
    assert_eq!(after_carol.like_count, 2);

    // Carol unliking leaves Bob's like alone.
    let after_carol_unlike = ctx
        .services
        .engagement
        .toggle_like(Some(&carol), ToggleLikeCommand { post_id })
        .await
        .unwrap();
    assert_eq!(after_carol_unlike.like_count, 1);

    let bob_detail = ctx
        .services
        .post_queries
        .get_post_detail(Some(&bob), GetPostDetailQuery { id: post_id })
        .await
        .unwrap();
    assert!(bob_detail.liked_by_caller);
}

#[tokio::test]
async fn toggle_on_missing_post_is_not_found() {
    let ctx = test_context().await;
    let reader = actor(2);

    let err = ctx
        .services
        .engagement
        .toggle_like(Some(&reader), ToggleLikeCommand { post_id: 42 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn toggle_requires_a_logged_in_caller() {
    let ctx = test_context().await;
    let post_id = seeded_post(&ctx).await;

    let err = ctx
        .services
        .engagement
        .toggle_like(None, ToggleLikeCommand { post_id })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthenticated(_)));
}
