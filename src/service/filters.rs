//! Pure list filters shared by the public pages and the admin area.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::{BlogPost, CohortYear, Event, TeamMember};

/// Category label meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    All,
    Upcoming,
    Past,
}

impl EventStatus {
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            EventStatus::All => true,
            EventStatus::Upcoming => !event.is_past,
            EventStatus::Past => event.is_past,
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// An empty or missing term matches everything.
fn normalized_term(term: Option<&str>) -> Option<String> {
    term.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

pub fn filter_events(events: Vec<Event>, status: EventStatus, term: Option<&str>) -> Vec<Event> {
    let term = normalized_term(term);
    events
        .into_iter()
        .filter(|event| status.matches(event))
        .filter(|event| match &term {
            Some(t) => contains_ignore_case(&event.title, t) || contains_ignore_case(&event.location, t),
            None => true,
        })
        .collect()
}

pub fn filter_blog_posts(posts: Vec<BlogPost>, category: Option<&str>, term: Option<&str>) -> Vec<BlogPost> {
    let category = category.filter(|c| !c.is_empty() && *c != ALL_CATEGORIES);
    let term = normalized_term(term);
    posts
        .into_iter()
        .filter(|post| category.map_or(true, |c| post.category == c))
        .filter(|post| match &term {
            Some(t) => {
                contains_ignore_case(&post.title, t)
                    || contains_ignore_case(&post.content, t)
                    || contains_ignore_case(&post.author, t)
            }
            None => true,
        })
        .collect()
}

pub fn filter_team(members: Vec<TeamMember>, year: Option<CohortYear>, term: Option<&str>) -> Vec<TeamMember> {
    let term = normalized_term(term);
    members
        .into_iter()
        .filter(|member| year.map_or(true, |y| member.year == y))
        .filter(|member| match &term {
            Some(t) => contains_ignore_case(&member.name, t) || contains_ignore_case(&member.role, t),
            None => true,
        })
        .collect()
}

/// Newest first. Posts whose date does not parse as `YYYY-MM-DD` go last,
/// keeping their relative order.
pub fn newest_first(mut posts: Vec<BlogPost>) -> Vec<BlogPost> {
    posts.sort_by_cached_key(|post| {
        std::cmp::Reverse(NaiveDate::parse_from_str(&post.date, "%Y-%m-%d").ok())
    });
    posts
}

/// Everything except the record with `id`, in collection order, capped at `limit`.
pub fn others<T>(items: Vec<T>, id: &str, limit: usize, id_of: impl Fn(&T) -> &str) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| id_of(item) != id)
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed;

    #[test]
    fn test_event_status_split() {
        let upcoming = filter_events(seed::events(), EventStatus::Upcoming, None);
        let past = filter_events(seed::events(), EventStatus::Past, None);

        assert_eq!(upcoming.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(), vec!["3", "4"]);
        assert_eq!(past.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(), vec!["1", "2"]);
    }

    #[test]
    fn test_event_term_matches_location() {
        let found = filter_events(seed::events(), EventStatus::All, Some("ZOOM"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "4");
    }

    #[test]
    fn test_blog_category_and_term() {
        assert_eq!(filter_blog_posts(seed::blog_posts(), Some("All"), None).len(), 3);
        assert_eq!(filter_blog_posts(seed::blog_posts(), Some("Funding"), None).len(), 1);
        assert_eq!(filter_blog_posts(seed::blog_posts(), Some("Funding"), Some("rohit")).len(), 0);
        assert_eq!(filter_blog_posts(seed::blog_posts(), None, Some("rohit")).len(), 1);
        assert_eq!(filter_blog_posts(seed::blog_posts(), None, Some("   ")).len(), 3);
    }

    #[test]
    fn test_team_by_year() {
        let members = filter_team(seed::team_members(), Some(CohortYear::Y2025To26), None);
        assert_eq!(members.iter().map(|m| m.name.as_str()).collect::<Vec<_>>(), vec!["Ananya Singh", "Vikram Mehta"]);

        let leads = filter_team(seed::team_members(), None, Some("lead"));
        assert_eq!(leads.len(), 2);
    }

    #[test]
    fn test_newest_first_puts_bad_dates_last() {
        let mut posts = seed::blog_posts();
        posts[1].date = "someday".to_string();

        let ids: Vec<String> = newest_first(posts).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_others_excludes_self() {
        let ids: Vec<String> = others(seed::events(), "2", 2, |e| e.id.as_str())
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
