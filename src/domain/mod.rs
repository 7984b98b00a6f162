pub mod identity;
pub mod team;
pub mod event;
pub mod blog;
pub mod achievement;
pub mod seed;

pub use identity::*;
pub use team::*;
pub use event::*;
pub use blog::*;
pub use achievement::*;

use serde::{Deserialize, Deserializer};

/// A record that lives in a content collection and is addressed by id.
pub trait Record: Clone + Send + Sync + 'static {
    type New: Send;
    type Patch: Send;

    fn id(&self) -> &str;

    /// Build the stored record from its creation shape and a freshly assigned id.
    fn from_new(id: String, new: Self::New) -> Self;

    /// Merge the fields present in `patch` onto this record.
    fn apply(&mut self, patch: Self::Patch);
}

/// For patch fields that can be cleared: a missing key stays `None`
/// (untouched) while an explicit `null` becomes `Some(None)`.
pub(crate) fn clearable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
