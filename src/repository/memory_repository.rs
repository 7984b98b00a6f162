use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    domain::{Event, Record},
    error::Result,
    repository::{EventRepository, Repository},
};

/// A collection held in process memory. Every mutation runs under a single
/// write guard, so concurrent callers are serialized.
pub struct InMemoryRepository<T> {
    items: RwLock<Vec<T>>,
}

impl<T: Record> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

impl<T: Record> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

#[async_trait]
impl<T: Record> Repository<T> for InMemoryRepository<T> {
    async fn create(&self, new: T::New) -> Result<T> {
        let mut items = self.items.write().await;

        // Seed ids are short integers, so a UUID can only clash with another UUID.
        let mut id = generate_id();
        while items.iter().any(|item| item.id() == id) {
            id = generate_id();
        }

        let record = T::from_new(id, new);
        items.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>> {
        Ok(self.items.read().await.clone())
    }

    async fn update(&self, id: &str, patch: T::Patch) -> Result<Option<T>> {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                item.apply(patch);
                Ok(Some(item.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut items = self.items.write().await;
        match items.iter().position(|item| item.id() == id) {
            Some(index) => {
                items.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.items.read().await.len())
    }
}

#[async_trait]
impl EventRepository for InMemoryRepository<Event> {
    async fn increment_registrations(&self, id: &str) -> Result<Option<Event>> {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|event| event.id == id) {
            Some(event) => {
                // Pinned at the ceiling once an admin has set it there.
                event.registrations = Some(event.registration_count().saturating_add(1));
                Ok(Some(event.clone()))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{seed, AchievementPatch, EventPatch, NewAchievement};

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let repo = InMemoryRepository::with_items(seed::achievements());

        assert!(repo.delete("2").await.unwrap());
        assert!(!repo.delete("2").await.unwrap());

        let ids: Vec<String> = repo.list().await.unwrap().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let repo = std::sync::Arc::new(InMemoryRepository::<crate::domain::Achievement>::new());

        let mut handles = Vec::new();
        for i in 0..32 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.create(NewAchievement {
                    title: format!("Award {}", i),
                    description: "Won it".to_string(),
                    year: "2024".to_string(),
                    image: None,
                })
                .await
                .unwrap()
                .id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 32);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_none() {
        let repo = InMemoryRepository::with_items(seed::achievements());
        let before = repo.list().await.unwrap();

        let result = repo
            .update("missing", AchievementPatch { title: Some("x".to_string()), ..Default::default() })
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(repo.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_registration_count_stops_at_max() {
        let repo = InMemoryRepository::with_items(seed::events());
        repo.update("1", EventPatch { registrations: Some(Some(u32::MAX)), ..Default::default() })
            .await
            .unwrap();

        let event = repo.increment_registrations("1").await.unwrap().unwrap();
        assert_eq!(event.registrations, Some(u32::MAX));

        let event = repo.increment_registrations("3").await.unwrap().unwrap();
        assert_eq!(event.registrations, Some(1));
    }
}
