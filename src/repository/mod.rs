use async_trait::async_trait;
use crate::domain::{Event, Record};
use crate::error::Result;

pub mod memory_repository;

pub use memory_repository::InMemoryRepository;

/// Storage for one content collection. Collections keep insertion order and
/// never fail on an unknown id: lookups return `None`, mutations report
/// whether anything matched.
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    async fn create(&self, new: T::New) -> Result<T>;
    async fn find_by_id(&self, id: &str) -> Result<Option<T>>;
    async fn list(&self) -> Result<Vec<T>>;
    async fn update(&self, id: &str, patch: T::Patch) -> Result<Option<T>>;
    async fn delete(&self, id: &str) -> Result<bool>;
    async fn count(&self) -> Result<usize>;
}

#[async_trait]
pub trait EventRepository: Repository<Event> {
    /// Bump the event's registration count by one, treating a missing count
    /// as zero. Returns the updated event, or `None` if no event matched.
    async fn increment_registrations(&self, id: &str) -> Result<Option<Event>>;
}
