use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    /// Free text, e.g. "President" or "Marketing Lead".
    pub role: String,
    pub year: CohortYear,
    pub image: String,
    pub linkedin: String,
}

/// The academic year a team member serves in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CohortYear {
    #[serde(rename = "2024-25")]
    Y2024To25,
    #[serde(rename = "2025-26")]
    Y2025To26,
}

impl CohortYear {
    pub fn as_str(&self) -> &'static str {
        match self {
            CohortYear::Y2024To25 => "2024-25",
            CohortYear::Y2025To26 => "2025-26",
        }
    }
}

impl fmt::Display for CohortYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CohortYear {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2024-25" => Ok(CohortYear::Y2024To25),
            "2025-26" => Ok(CohortYear::Y2025To26),
            other => Err(format!("Unknown cohort year: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTeamMember {
    pub name: String,
    pub role: String,
    pub year: CohortYear,
    pub image: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TeamMemberPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub year: Option<CohortYear>,
    pub image: Option<String>,
    pub linkedin: Option<String>,
}

impl Record for TeamMember {
    type New = NewTeamMember;
    type Patch = TeamMemberPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_new(id: String, new: NewTeamMember) -> Self {
        Self {
            id,
            name: new.name,
            role: new.role,
            year: new.year,
            image: new.image,
            linkedin: new.linkedin,
        }
    }

    fn apply(&mut self, patch: TeamMemberPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(linkedin) = patch.linkedin {
            self.linkedin = linkedin;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cohort_year_wire_format() {
        assert_eq!(serde_json::to_string(&CohortYear::Y2024To25).unwrap(), "\"2024-25\"");
        assert_eq!("2025-26".parse::<CohortYear>(), Ok(CohortYear::Y2025To26));
        assert!("2026-27".parse::<CohortYear>().is_err());
    }
}
