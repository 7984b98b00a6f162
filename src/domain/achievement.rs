use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAchievement {
    pub title: String,
    pub description: String,
    pub year: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AchievementPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub year: Option<String>,
    /// `null` removes the image.
    #[serde(default, deserialize_with = "super::clearable")]
    pub image: Option<Option<String>>,
}

impl Record for Achievement {
    type New = NewAchievement;
    type Patch = AchievementPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_new(id: String, new: NewAchievement) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            year: new.year,
            image: new.image,
        }
    }

    fn apply(&mut self, patch: AchievementPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
    }
}
