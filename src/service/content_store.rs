use std::sync::Arc;

use serde::Serialize;

use crate::{
    domain::{
        seed, Achievement, AchievementPatch, BlogPost, BlogPostPatch, CohortYear, Event, EventPatch,
        NewAchievement, NewBlogPost, NewEvent, NewTeamMember, Registration, TeamMember,
        TeamMemberPatch,
    },
    error::Result,
    notify::NotificationManager,
    repository::{EventRepository, InMemoryRepository, Repository},
    service::filters::{self, EventStatus},
};

/// Counts shown on the admin dashboard.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub events: usize,
    pub upcoming_events: usize,
    pub past_events: usize,
    pub blog_posts: usize,
    pub team_members: usize,
    pub achievements: usize,
    pub total_registrations: u64,
}

/// The site's content: team members, events, blog posts and achievements.
///
/// Mutations never fail on an unknown id. `update_*` returns `None` and
/// `delete_*` returns `false` when nothing matched, and the collection is
/// left as it was. The only errors that can surface come from the backing
/// repositories.
pub struct ContentStore {
    team: Arc<dyn Repository<TeamMember>>,
    events: Arc<dyn EventRepository>,
    blogs: Arc<dyn Repository<BlogPost>>,
    achievements: Arc<dyn Repository<Achievement>>,
    notifications: Arc<NotificationManager>,
}

impl ContentStore {
    pub fn new(
        team: Arc<dyn Repository<TeamMember>>,
        events: Arc<dyn EventRepository>,
        blogs: Arc<dyn Repository<BlogPost>>,
        achievements: Arc<dyn Repository<Achievement>>,
        notifications: Arc<NotificationManager>,
    ) -> Self {
        Self {
            team,
            events,
            blogs,
            achievements,
            notifications,
        }
    }

    /// In-memory store holding the content the site ships with.
    pub fn seeded(notifications: Arc<NotificationManager>) -> Self {
        Self::new(
            Arc::new(InMemoryRepository::with_items(seed::team_members())),
            Arc::new(InMemoryRepository::with_items(seed::events())),
            Arc::new(InMemoryRepository::with_items(seed::blog_posts())),
            Arc::new(InMemoryRepository::with_items(seed::achievements())),
            notifications,
        )
    }

    /// In-memory store with every collection empty.
    pub fn empty(notifications: Arc<NotificationManager>) -> Self {
        Self::new(
            Arc::new(InMemoryRepository::<TeamMember>::new()),
            Arc::new(InMemoryRepository::<Event>::new()),
            Arc::new(InMemoryRepository::<BlogPost>::new()),
            Arc::new(InMemoryRepository::<Achievement>::new()),
            notifications,
        )
    }

    // Team members

    pub async fn team_members(&self) -> Result<Vec<TeamMember>> {
        self.team.list().await
    }

    pub async fn find_team_member(&self, id: &str) -> Result<Option<TeamMember>> {
        self.team.find_by_id(id).await
    }

    pub async fn team_by_year(&self, year: CohortYear) -> Result<Vec<TeamMember>> {
        self.search_team(Some(year), None).await
    }

    pub async fn search_team(&self, year: Option<CohortYear>, term: Option<&str>) -> Result<Vec<TeamMember>> {
        Ok(filters::filter_team(self.team.list().await?, year, term))
    }

    pub async fn add_team_member(&self, member: NewTeamMember) -> Result<TeamMember> {
        let created = self.team.create(member).await?;
        tracing::debug!("Added team member {} ({})", created.name, created.id);
        self.notifications.success("Team member added successfully").await;
        Ok(created)
    }

    pub async fn update_team_member(&self, id: &str, patch: TeamMemberPatch) -> Result<Option<TeamMember>> {
        let updated = self.team.update(id, patch).await?;
        log_missing("team member", id, updated.is_some());
        self.notifications.success("Team member updated successfully").await;
        Ok(updated)
    }

    pub async fn delete_team_member(&self, id: &str) -> Result<bool> {
        let removed = self.team.delete(id).await?;
        log_missing("team member", id, removed);
        self.notifications.success("Team member removed successfully").await;
        Ok(removed)
    }

    // Events

    pub async fn events(&self) -> Result<Vec<Event>> {
        self.events.list().await
    }

    pub async fn find_event(&self, id: &str) -> Result<Option<Event>> {
        self.events.find_by_id(id).await
    }

    pub async fn upcoming_events(&self) -> Result<Vec<Event>> {
        self.search_events(EventStatus::Upcoming, None).await
    }

    pub async fn past_events(&self) -> Result<Vec<Event>> {
        self.search_events(EventStatus::Past, None).await
    }

    pub async fn search_events(&self, status: EventStatus, term: Option<&str>) -> Result<Vec<Event>> {
        Ok(filters::filter_events(self.events.list().await?, status, term))
    }

    pub async fn related_events(&self, id: &str, limit: usize) -> Result<Vec<Event>> {
        Ok(filters::others(self.events.list().await?, id, limit, |e| e.id.as_str()))
    }

    pub async fn add_event(&self, event: NewEvent) -> Result<Event> {
        let created = self.events.create(event).await?;
        tracing::debug!("Added event {} ({})", created.title, created.id);
        self.notifications.success("Event added successfully").await;
        Ok(created)
    }

    pub async fn update_event(&self, id: &str, patch: EventPatch) -> Result<Option<Event>> {
        let updated = self.events.update(id, patch).await?;
        log_missing("event", id, updated.is_some());
        self.notifications.success("Event updated successfully").await;
        Ok(updated)
    }

    pub async fn delete_event(&self, id: &str) -> Result<bool> {
        let removed = self.events.delete(id).await?;
        log_missing("event", id, removed);
        self.notifications.success("Event removed successfully").await;
        Ok(removed)
    }

    /// Counts one more registration for the event. Callers validate the
    /// registrant's details; only the count is kept.
    pub async fn register_for_event(&self, event_id: &str, registration: Registration) -> Result<Option<Event>> {
        let updated = self.events.increment_registrations(event_id).await?;
        match &updated {
            Some(event) => tracing::info!(
                "Registration for event {} from {}, now {}",
                event.id,
                registration.email,
                event.registration_count()
            ),
            None => tracing::debug!("Registration for unknown event {} ignored", event_id),
        }
        self.notifications.success("Registration successful").await;
        Ok(updated)
    }

    // Blog posts

    pub async fn blog_posts(&self) -> Result<Vec<BlogPost>> {
        self.blogs.list().await
    }

    pub async fn find_blog_post(&self, id: &str) -> Result<Option<BlogPost>> {
        self.blogs.find_by_id(id).await
    }

    pub async fn latest_blog_posts(&self, limit: usize) -> Result<Vec<BlogPost>> {
        let mut posts = filters::newest_first(self.blogs.list().await?);
        posts.truncate(limit);
        Ok(posts)
    }

    pub async fn search_blog_posts(&self, category: Option<&str>, term: Option<&str>) -> Result<Vec<BlogPost>> {
        Ok(filters::filter_blog_posts(self.blogs.list().await?, category, term))
    }

    pub async fn related_blog_posts(&self, id: &str, limit: usize) -> Result<Vec<BlogPost>> {
        Ok(filters::others(self.blogs.list().await?, id, limit, |p| p.id.as_str()))
    }

    pub async fn add_blog_post(&self, post: NewBlogPost) -> Result<BlogPost> {
        let created = self.blogs.create(post).await?;
        tracing::debug!("Added blog post {} ({})", created.title, created.id);
        self.notifications.success("Blog post added successfully").await;
        Ok(created)
    }

    pub async fn update_blog_post(&self, id: &str, patch: BlogPostPatch) -> Result<Option<BlogPost>> {
        let updated = self.blogs.update(id, patch).await?;
        log_missing("blog post", id, updated.is_some());
        self.notifications.success("Blog post updated successfully").await;
        Ok(updated)
    }

    pub async fn delete_blog_post(&self, id: &str) -> Result<bool> {
        let removed = self.blogs.delete(id).await?;
        log_missing("blog post", id, removed);
        self.notifications.success("Blog post removed successfully").await;
        Ok(removed)
    }

    // Achievements

    pub async fn achievements(&self) -> Result<Vec<Achievement>> {
        self.achievements.list().await
    }

    pub async fn find_achievement(&self, id: &str) -> Result<Option<Achievement>> {
        self.achievements.find_by_id(id).await
    }

    pub async fn add_achievement(&self, achievement: NewAchievement) -> Result<Achievement> {
        let created = self.achievements.create(achievement).await?;
        tracing::debug!("Added achievement {} ({})", created.title, created.id);
        self.notifications.success("Achievement added successfully").await;
        Ok(created)
    }

    pub async fn update_achievement(&self, id: &str, patch: AchievementPatch) -> Result<Option<Achievement>> {
        let updated = self.achievements.update(id, patch).await?;
        log_missing("achievement", id, updated.is_some());
        self.notifications.success("Achievement updated successfully").await;
        Ok(updated)
    }

    pub async fn delete_achievement(&self, id: &str) -> Result<bool> {
        let removed = self.achievements.delete(id).await?;
        log_missing("achievement", id, removed);
        self.notifications.success("Achievement removed successfully").await;
        Ok(removed)
    }

    pub async fn dashboard(&self) -> Result<DashboardStats> {
        let events = self.events.list().await?;
        let upcoming_events = events.iter().filter(|e| !e.is_past).count();

        Ok(DashboardStats {
            events: events.len(),
            upcoming_events,
            past_events: events.len() - upcoming_events,
            blog_posts: self.blogs.count().await?,
            team_members: self.team.count().await?,
            achievements: self.achievements.count().await?,
            total_registrations: events.iter().map(|e| u64::from(e.registration_count())).sum(),
        })
    }
}

fn log_missing(kind: &str, id: &str, matched: bool) {
    if !matched {
        tracing::debug!("No {} with id {}; nothing changed", kind, id);
    }
}
