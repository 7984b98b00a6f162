use std::sync::Arc;

use ecell::{
    domain::{
        AchievementPatch, BlogPostPatch, CohortYear, EventPatch, NewBlogPost, NewEvent,
        NewTeamMember, Registration, TeamMemberPatch,
    },
    notify::{NotificationManager, RecentNotifications},
    service::{ContentStore, EventStatus},
};

async fn seeded_store() -> (ContentStore, Arc<RecentNotifications>) {
    let recent = Arc::new(RecentNotifications::new(32));
    let notifications = Arc::new(NotificationManager::new());
    notifications.register(recent.clone()).await;
    (ContentStore::seeded(notifications), recent)
}

fn registration() -> Registration {
    Registration {
        name: "A".to_string(),
        email: "a@x.com".to_string(),
        phone: "1".to_string(),
    }
}

fn new_event() -> NewEvent {
    NewEvent {
        title: "Founders Fireside".to_string(),
        description: "An evening with alumni founders.".to_string(),
        date: "2025-01-10".to_string(),
        location: "Seminar Hall".to_string(),
        image: "data:image/png;base64,AAAA".to_string(),
        is_past: false,
        registrations: Some(0),
    }
}

#[tokio::test]
async fn test_seed_collections() -> anyhow::Result<()> {
    let (store, _) = seeded_store().await;

    assert_eq!(store.team_members().await?.len(), 5);
    assert_eq!(store.events().await?.len(), 4);
    assert_eq!(store.blog_posts().await?.len(), 3);
    assert_eq!(store.achievements().await?.len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_register_for_event_without_prior_count() -> anyhow::Result<()> {
    let (store, recent) = seeded_store().await;
    assert_eq!(store.find_event("3").await?.unwrap().registrations, None);

    let updated = store.register_for_event("3", registration()).await?;

    assert_eq!(updated.unwrap().registrations, Some(1));
    assert_eq!(store.find_event("3").await?.unwrap().registrations, Some(1));
    assert_eq!(recent.snapshot().await.last().unwrap().message, "Registration successful");
    Ok(())
}

#[tokio::test]
async fn test_registrations_accumulate_and_stay_local() -> anyhow::Result<()> {
    let (store, _) = seeded_store().await;
    let before = store.events().await?;

    store.register_for_event("1", registration()).await?;
    store.register_for_event("1", registration()).await?;

    let after = store.events().await?;
    assert_eq!(after[0].registrations, Some(122));
    assert_eq!(&after[1..], &before[1..]);
    Ok(())
}

#[tokio::test]
async fn test_register_for_unknown_event_is_silent() -> anyhow::Result<()> {
    let (store, _) = seeded_store().await;
    let before = store.events().await?;

    assert!(store.register_for_event("nope", registration()).await?.is_none());
    assert_eq!(store.events().await?, before);
    Ok(())
}

#[tokio::test]
async fn test_add_event_appends_with_fresh_id() -> anyhow::Result<()> {
    let (store, recent) = seeded_store().await;
    let before = store.events().await?;

    let created = store.add_event(new_event()).await?;

    let after = store.events().await?;
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last(), Some(&created));
    assert!(before.iter().all(|e| e.id != created.id));
    assert_eq!(created.title, "Founders Fireside");
    assert_eq!(created.image, "data:image/png;base64,AAAA");
    assert_eq!(created.registrations, Some(0));
    assert_eq!(recent.snapshot().await.last().unwrap().message, "Event added successfully");
    Ok(())
}

#[tokio::test]
async fn test_rapid_adds_never_collide() -> anyhow::Result<()> {
    let (store, _) = seeded_store().await;

    let mut ids = Vec::new();
    for _ in 0..50 {
        ids.push(store.add_event(new_event()).await?.id);
    }
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), 50);
    Ok(())
}

#[tokio::test]
async fn test_update_changes_only_target_field() -> anyhow::Result<()> {
    let (store, _) = seeded_store().await;
    let before = store.team_members().await?;

    let updated = store
        .update_team_member("2", TeamMemberPatch {
            role: Some("President".to_string()),
            ..Default::default()
        })
        .await?
        .expect("member 2 exists");

    let after = store.team_members().await?;
    let mut expected = before[1].clone();
    expected.role = "President".to_string();
    assert_eq!(updated, expected);
    assert_eq!(after[1], expected);
    assert_eq!(after[0], before[0]);
    assert_eq!(&after[2..], &before[2..]);
    Ok(())
}

#[tokio::test]
async fn test_update_unknown_id_leaves_collection_alone() -> anyhow::Result<()> {
    let (store, _) = seeded_store().await;
    let events = store.events().await?;
    let posts = store.blog_posts().await?;
    let achievements = store.achievements().await?;

    let patch = EventPatch { title: Some("x".to_string()), ..Default::default() };
    assert!(store.update_event("999", patch).await?.is_none());
    let patch = BlogPostPatch { title: Some("x".to_string()), ..Default::default() };
    assert!(store.update_blog_post("999", patch).await?.is_none());
    let patch = AchievementPatch { title: Some("x".to_string()), ..Default::default() };
    assert!(store.update_achievement("999", patch).await?.is_none());

    assert_eq!(store.events().await?, events);
    assert_eq!(store.blog_posts().await?, posts);
    assert_eq!(store.achievements().await?, achievements);
    Ok(())
}

#[tokio::test]
async fn test_delete_is_exact_or_noop() -> anyhow::Result<()> {
    let (store, _) = seeded_store().await;

    assert!(store.delete_blog_post("2").await?);
    let ids: Vec<String> = store.blog_posts().await?.into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["1", "3"]);

    assert!(!store.delete_blog_post("2").await?);
    assert_eq!(store.blog_posts().await?.len(), 2);

    assert!(store.delete_team_member("5").await?);
    assert!(store.delete_achievement("1").await?);
    assert!(store.delete_event("4").await?);
    assert_eq!(store.team_members().await?.len(), 4);
    assert_eq!(store.achievements().await?.len(), 2);
    assert_eq!(store.events().await?.len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_new_team_member_shows_in_their_year() -> anyhow::Result<()> {
    let (store, _) = seeded_store().await;

    let member = store
        .add_team_member(NewTeamMember {
            name: "Kavya Rao".to_string(),
            role: "Finance Head".to_string(),
            year: CohortYear::Y2025To26,
            image: String::new(),
            linkedin: "https://linkedin.com/in/kavyarao".to_string(),
        })
        .await?;

    let cohort = store.team_by_year(CohortYear::Y2025To26).await?;
    assert_eq!(cohort.len(), 3);
    assert_eq!(cohort.last(), Some(&member));
    assert_eq!(store.team_by_year(CohortYear::Y2024To25).await?.len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_latest_blog_posts_ignores_insertion_order() -> anyhow::Result<()> {
    let (store, _) = seeded_store().await;

    store
        .add_blog_post(NewBlogPost {
            title: "Pitching 101".to_string(),
            content: "How to pitch.".to_string(),
            excerpt: "Pitch basics".to_string(),
            author: "Priya Patel".to_string(),
            date: "2023-01-01".to_string(),
            category: "Startup".to_string(),
            image: String::new(),
        })
        .await?;

    let titles: Vec<String> = store.latest_blog_posts(2).await?.into_iter().map(|p| p.title).collect();
    assert_eq!(titles, vec![
        "Building a Strong Team for Your Startup",
        "Funding Options for Student Entrepreneurs",
    ]);

    // The collection itself keeps insertion order.
    assert_eq!(store.blog_posts().await?.last().unwrap().title, "Pitching 101");
    Ok(())
}

#[tokio::test]
async fn test_dashboard_counts() -> anyhow::Result<()> {
    let (store, _) = seeded_store().await;
    store.register_for_event("4", registration()).await?;

    let stats = store.dashboard().await?;

    assert_eq!(stats.events, 4);
    assert_eq!(stats.upcoming_events, 2);
    assert_eq!(stats.past_events, 2);
    assert_eq!(stats.blog_posts, 3);
    assert_eq!(stats.team_members, 5);
    assert_eq!(stats.achievements, 3);
    assert_eq!(stats.total_registrations, 371);
    Ok(())
}

#[tokio::test]
async fn test_search_events_and_related() -> anyhow::Result<()> {
    let (store, _) = seeded_store().await;

    let upcoming = store.search_events(EventStatus::Upcoming, Some("pitch")).await?;
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].id, "3");

    let related: Vec<String> = store.related_events("1", 3).await?.into_iter().map(|e| e.id).collect();
    assert_eq!(related, vec!["2", "3", "4"]);
    Ok(())
}

#[tokio::test]
async fn test_empty_store() -> anyhow::Result<()> {
    let store = ContentStore::empty(Arc::new(NotificationManager::new()));

    assert!(store.events().await?.is_empty());
    assert_eq!(store.dashboard().await?.total_registrations, 0);
    Ok(())
}
