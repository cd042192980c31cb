pub mod handlers;
pub mod models;

use std::collections::HashMap;

use uuid::Uuid;

use crate::profiles::models::{CompanyProfile, UserProfile};

/// Profiles keyed by account id. A missing profile reads as an empty one.
#[derive(Debug, Default)]
pub struct ProfileStore {
    users: HashMap<Uuid, UserProfile>,
    companies: HashMap<Uuid, CompanyProfile>,
}

impl ProfileStore {
    pub fn user(&self, id: Uuid) -> UserProfile {
        self.users
            .get(&id)
            .cloned()
            .unwrap_or_else(|| UserProfile::empty(id))
    }

    pub fn user_mut(&mut self, id: Uuid) -> &mut UserProfile {
        self.users
            .entry(id)
            .or_insert_with(|| UserProfile::empty(id))
    }

    pub fn company(&self, id: Uuid) -> CompanyProfile {
        self.companies
            .get(&id)
            .cloned()
            .unwrap_or_else(|| CompanyProfile::empty(id))
    }

    pub fn company_mut(&mut self, id: Uuid) -> &mut CompanyProfile {
        self.companies
            .entry(id)
            .or_insert_with(|| CompanyProfile::empty(id))
    }
}
