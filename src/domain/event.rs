use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Calendar date as entered by the admin, `YYYY-MM-DD`.
    pub date: String,
    pub location: String,
    pub image: String,
    pub is_past: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registrations: Option<u32>,
}

impl Event {
    pub fn registration_count(&self) -> u32 {
        self.registrations.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub image: String,
    pub is_past: bool,
    #[serde(default)]
    pub registrations: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
    pub is_past: Option<bool>,
    /// `null` resets the count to "not tracked".
    #[serde(default, deserialize_with = "super::clearable")]
    pub registrations: Option<Option<u32>>,
}

/// Details a visitor submits to register for an event. Only the aggregate
/// count is kept; the registrant is never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Record for Event {
    type New = NewEvent;
    type Patch = EventPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_new(id: String, new: NewEvent) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            date: new.date,
            location: new.location,
            image: new.image,
            is_past: new.is_past,
            registrations: new.registrations,
        }
    }

    fn apply(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(is_past) = patch.is_past {
            self.is_past = is_past;
        }
        if let Some(registrations) = patch.registrations {
            self.registrations = registrations;
        }
    }
}
