// tests/post_query_service_unit.rs
mod support;

use chrono::Duration;
use inkpost::application::commands::posts::CreatePostCommand;
use inkpost::application::error::ApplicationError;
use inkpost::application::queries::posts::{
    GetPublishedPostBySlugQuery, ListAllPostsQuery, ListPublishedPostsQuery,
};
use support::{admin, context, context_at, fixed_instant, regular_user};

fn create_command(title: &str, published_at: Option<chrono::DateTime<chrono::Utc>>) -> CreatePostCommand {
    CreatePostCommand {
        title: title.into(),
        content: "Body.".into(),
        category: "general".into(),
        published_at,
        image: None,
    }
}

#[tokio::test]
async fn public_listing_excludes_future_dated_posts() {
    let ctx = context();
    let now = fixed_instant();

    ctx.services
        .post_commands
        .create_post(&admin(), create_command("Visible", Some(now - Duration::hours(2))))
        .await
        .unwrap();
    let scheduled = ctx
        .services
        .post_commands
        .create_post(&admin(), create_command("Scheduled", Some(now + Duration::days(1))))
        .await
        .unwrap();

    let page = ctx
        .services
        .post_queries
        .list_published_posts(ListPublishedPostsQuery { page: 0, page_size: 0 })
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].title, "Visible");

    let err = ctx
        .services
        .post_queries
        .get_published_post_by_slug(GetPublishedPostBySlugQuery {
            slug: scheduled.slug.clone(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn scheduled_post_becomes_visible_once_clock_passes() {
    let now = fixed_instant();
    let publish_at = now + Duration::days(1);

    // Create through a context pinned to "now"...
    let ctx = context_at(now);
    let scheduled = ctx
        .services
        .post_commands
        .create_post(&admin(), create_command("Tomorrow", Some(publish_at)))
        .await
        .unwrap();

    let err = ctx
        .services
        .post_queries
        .get_published_post_by_slug(GetPublishedPostBySlugQuery {
            slug: scheduled.slug.clone(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    // ...then query the same repository through a later clock.
    let later = support::reclock(&ctx, publish_at + Duration::hours(1));

    let fetched = later
        .services
        .post_queries
        .get_published_post_by_slug(GetPublishedPostBySlugQuery {
            slug: scheduled.slug.clone(),
        })
        .await
        .unwrap();
    assert_eq!(fetched.id, scheduled.id);

    let page = later
        .services
        .post_queries
        .list_published_posts(ListPublishedPostsQuery { page: 0, page_size: 0 })
        .await
        .unwrap();
    assert_eq!(page.total, 1);
}

#[tokio::test]
async fn public_listing_orders_by_publication_desc_and_paginates() {
    let ctx = context();
    let now = fixed_instant();

    for (title, hours_ago) in [("Oldest", 30), ("Middle", 20), ("Newest", 10)] {
        ctx.services
            .post_commands
            .create_post(
                &admin(),
                create_command(title, Some(now - Duration::hours(hours_ago))),
            )
            .await
            .unwrap();
    }

    let page = ctx
        .services
        .post_queries
        .list_published_posts(ListPublishedPostsQuery {
            page: 1,
            page_size: 2,
        })
        .await
        .unwrap();

    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    let titles: Vec<_> = page.items.iter().map(|post| post.title.as_str()).collect();
    assert_eq!(titles, ["Newest", "Middle"]);

    let page = ctx
        .services
        .post_queries
        .list_published_posts(ListPublishedPostsQuery {
            page: 2,
            page_size: 2,
        })
        .await
        .unwrap();
    let titles: Vec<_> = page.items.iter().map(|post| post.title.as_str()).collect();
    assert_eq!(titles, ["Oldest"]);
}

#[tokio::test]
async fn simultaneous_publications_break_ties_by_id_desc() {
    let ctx = context();
    let now = fixed_instant();
    let at = Some(now - Duration::hours(1));

    let first = ctx
        .services
        .post_commands
        .create_post(&admin(), create_command("Tie A", at))
        .await
        .unwrap();
    let second = ctx
        .services
        .post_commands
        .create_post(&admin(), create_command("Tie B", at))
        .await
        .unwrap();

    let page = ctx
        .services
        .post_queries
        .list_published_posts(ListPublishedPostsQuery { page: 0, page_size: 0 })
        .await
        .unwrap();

    let ids: Vec<_> = page.items.iter().map(|post| post.id).collect();
    assert_eq!(ids, [second.id, first.id]);
}

#[tokio::test]
async fn admin_listing_includes_drafts_and_requires_admin() {
    let ctx = context();
    let now = fixed_instant();

    ctx.services
        .post_commands
        .create_post(&admin(), create_command("Live", Some(now - Duration::hours(1))))
        .await
        .unwrap();
    ctx.services
        .post_commands
        .create_post(&admin(), create_command("Scheduled", Some(now + Duration::days(7))))
        .await
        .unwrap();

    let page = ctx
        .services
        .post_queries
        .list_all_posts(&admin(), ListAllPostsQuery { page: 0, page_size: 0 })
        .await
        .unwrap();
    assert_eq!(page.total, 2, "admin listing applies no publication filter");

    let err = ctx
        .services
        .post_queries
        .list_all_posts(&regular_user(), ListAllPostsQuery { page: 0, page_size: 0 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn page_size_is_capped() {
    let ctx = context();

    let page = ctx
        .services
        .post_queries
        .list_published_posts(ListPublishedPostsQuery {
            page: 1,
            page_size: 10_000,
        })
        .await
        .unwrap();
    assert_eq!(page.page_size, 100);
}
