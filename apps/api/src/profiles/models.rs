use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: Uuid,
    pub full_name: String,
    pub headline: String,
    pub bio: String,
    pub location: String,
    pub skills: Vec<String>,
    pub resume_url: Option<String>,
    pub phone: Option<String>,
}

impl UserProfile {
    pub fn empty(user_id: Uuid) -> Self {
        Self {
            user_id,
            ..Default::default()
        }
    }

    pub fn apply_patch(&mut self, patch: UserProfilePatch) {
        if let Some(v) = patch.full_name {
            self.full_name = v;
        }
        if let Some(v) = patch.headline {
            self.headline = v;
        }
        if let Some(v) = patch.bio {
            self.bio = v;
        }
        if let Some(v) = patch.location {
            self.location = v;
        }
        if let Some(v) = patch.skills {
            self.skills = v;
        }
        if let Some(v) = patch.resume_url {
            self.resume_url = Some(v);
        }
        if let Some(v) = patch.phone {
            self.phone = Some(v);
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfilePatch {
    pub full_name: Option<String>,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub skills: Option<Vec<String>>,
    pub resume_url: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub user_id: Uuid,
    pub company_name: String,
    pub website: Option<String>,
    pub industry: String,
    pub size: String,
    pub description: String,
    pub location: String,
}

impl CompanyProfile {
    pub fn empty(user_id: Uuid) -> Self {
        Self {
            user_id,
            ..Default::default()
        }
    }

    pub fn apply_patch(&mut self, patch: CompanyProfilePatch) {
        if let Some(v) = patch.company_name {
            self.company_name = v;
        }
        if let Some(v) = patch.website {
            self.website = Some(v);
        }
        if let Some(v) = patch.industry {
            self.industry = v;
        }
        if let Some(v) = patch.size {
            self.size = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.location {
            self.location = v;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfilePatch {
    pub company_name: Option<String>,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub size: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_patch_is_shallow() {
        let mut profile = UserProfile::empty(Uuid::new_v4());
        profile.skills = vec!["Rust".to_string()];
        profile.bio = "Systems person".to_string();

        let patch: UserProfilePatch =
            serde_json::from_value(json!({ "headline": "Backend engineer" })).unwrap();
        profile.apply_patch(patch);

        assert_eq!(profile.headline, "Backend engineer");
        assert_eq!(profile.bio, "Systems person");
        assert_eq!(profile.skills, vec!["Rust".to_string()]);
    }

    #[test]
    fn test_company_patch_sets_optional_website() {
        let mut profile = CompanyProfile::empty(Uuid::new_v4());
        let patch: CompanyProfilePatch = serde_json::from_value(json!({
            "companyName": "Acme",
            "website": "https://acme.example"
        }))
        .unwrap();
        profile.apply_patch(patch);

        assert_eq!(profile.company_name, "Acme");
        assert_eq!(profile.website.as_deref(), Some("https://acme.example"));
    }
}
