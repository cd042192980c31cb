use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Jobs and internships live in separate collections with independent id spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Job,
    Internship,
}

impl ListingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingKind::Job => "job",
            ListingKind::Internship => "internship",
        }
    }
}

/// A job or internship posting as stored and served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stipend: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub description: String,
    pub requirements: Vec<String>,
    pub skills: Vec<String>,
    pub category: String,
    pub experience_level: String,
    pub is_remote: bool,
    pub posted_date: NaiveDate,
    pub is_active: bool,
    pub applicants: u32,
    pub views: u32,
    /// Company account that created the listing. `None` for seeded demo data.
    #[serde(default)]
    pub posted_by: Option<Uuid>,
}

impl Listing {
    /// Formatted pay string: salary for jobs, stipend for internships.
    pub fn pay(&self) -> Option<&str> {
        self.salary.as_deref().or(self.stipend.as_deref())
    }

    /// Builds a fresh active record with zeroed counters.
    pub fn from_new(id: i64, new: NewListing, posted_date: NaiveDate) -> Self {
        Listing {
            id,
            title: new.title,
            company: new.company,
            location: new.location,
            employment_type: new.employment_type,
            salary: new.salary,
            stipend: new.stipend,
            duration: new.duration,
            description: new.description,
            requirements: new.requirements,
            skills: new.skills,
            category: new.category,
            experience_level: new.experience_level,
            is_remote: new.is_remote,
            posted_date,
            is_active: true,
            applicants: 0,
            views: 0,
            posted_by: new.posted_by,
        }
    }

    /// Shallow merge: every field present in the patch replaces the stored one.
    pub fn apply_patch(&mut self, patch: ListingPatch) {
        if let Some(v) = patch.title {
            self.title = v;
        }
        if let Some(v) = patch.company {
            self.company = v;
        }
        if let Some(v) = patch.location {
            self.location = v;
        }
        if let Some(v) = patch.employment_type {
            self.employment_type = v;
        }
        if let Some(v) = patch.salary {
            self.salary = Some(v);
        }
        if let Some(v) = patch.stipend {
            self.stipend = Some(v);
        }
        if let Some(v) = patch.duration {
            self.duration = Some(v);
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.requirements {
            self.requirements = v;
        }
        if let Some(v) = patch.skills {
            self.skills = v;
        }
        if let Some(v) = patch.category {
            self.category = v;
        }
        if let Some(v) = patch.experience_level {
            self.experience_level = v;
        }
        if let Some(v) = patch.is_remote {
            self.is_remote = v;
        }
        if let Some(v) = patch.is_active {
            self.is_active = v;
        }
    }
}

/// Payload for creating a listing. Counters, id and dates are assigned by the store.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, rename = "type")]
    pub employment_type: String,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub stipend: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub is_remote: bool,
    #[serde(skip)]
    pub posted_by: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPatch {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: Option<String>,
    pub salary: Option<String>,
    pub stipend: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub category: Option<String>,
    pub experience_level: Option<String>,
    pub is_remote: Option<bool>,
    pub is_active: Option<bool>,
}
