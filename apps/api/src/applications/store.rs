use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::{Application, ApplicationStatus};
use crate::models::listing::ListingKind;

/// Submission payload after the caller and target listing have been resolved.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub user_id: Uuid,
    pub listing_id: i64,
    pub listing_kind: ListingKind,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
    pub answers: Value,
}

/// Append-only list of submitted applications.
#[derive(Debug, Default)]
pub struct ApplicationStore {
    applications: Vec<Application>,
}

impl ApplicationStore {
    /// Records a submission. One application per user per listing.
    pub fn submit(&mut self, new: NewApplication) -> Result<Application, AppError> {
        let duplicate = self.applications.iter().any(|a| {
            a.user_id == new.user_id
                && a.listing_id == new.listing_id
                && a.listing_kind == new.listing_kind
        });
        if duplicate {
            return Err(AppError::Conflict(format!(
                "already applied to {} {}",
                new.listing_kind.as_str(),
                new.listing_id
            )));
        }

        let application = Application {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            listing_id: new.listing_id,
            listing_kind: new.listing_kind,
            cover_letter: new.cover_letter,
            resume_url: new.resume_url,
            answers: new.answers,
            status: ApplicationStatus::Pending,
            applied_at: Utc::now(),
        };
        self.applications.push(application.clone());
        Ok(application)
    }

    /// Applications by one user, newest first.
    pub fn for_user(&self, user_id: Uuid) -> Vec<Application> {
        let mut found: Vec<Application> = self
            .applications
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));
        found
    }

    pub fn get(&self, id: Uuid) -> Option<&Application> {
        self.applications.iter().find(|a| a.id == id)
    }

    pub fn set_status(&mut self, id: Uuid, status: ApplicationStatus) -> Option<Application> {
        let application = self.applications.iter_mut().find(|a| a.id == id)?;
        application.status = status;
        Some(application.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn new_app(user_id: Uuid, listing_id: i64) -> NewApplication {
        NewApplication {
            user_id,
            listing_id,
            listing_kind: ListingKind::Job,
            cover_letter: Some("Hello".to_string()),
            resume_url: Some("https://files.example.com/cv.pdf".to_string()),
            answers: json!({}),
        }
    }

    #[test]
    fn test_submit_defaults_to_pending() {
        let mut store = ApplicationStore::default();
        let app = store.submit(new_app(Uuid::new_v4(), 1)).unwrap();
        assert_eq!(app.status, ApplicationStatus::Pending);
    }

    #[test]
    fn test_duplicate_rejected_but_other_kind_allowed() {
        let mut store = ApplicationStore::default();
        let user = Uuid::new_v4();
        store.submit(new_app(user, 1)).unwrap();

        assert!(matches!(
            store.submit(new_app(user, 1)),
            Err(AppError::Conflict(_))
        ));

        let mut internship = new_app(user, 1);
        internship.listing_kind = ListingKind::Internship;
        assert!(store.submit(internship).is_ok());
    }

    #[test]
    fn test_for_user_filters_by_owner() {
        let mut store = ApplicationStore::default();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        store.submit(new_app(alice, 1)).unwrap();
        store.submit(new_app(alice, 2)).unwrap();
        store.submit(new_app(bob, 1)).unwrap();

        assert_eq!(store.for_user(alice).len(), 2);
        assert_eq!(store.for_user(bob).len(), 1);
    }

    #[test]
    fn test_set_status() {
        let mut store = ApplicationStore::default();
        let id = store.submit(new_app(Uuid::new_v4(), 9)).unwrap().id;
        let updated = store.set_status(id, ApplicationStatus::Accepted).unwrap();
        assert_eq!(updated.status, ApplicationStatus::Accepted);
        assert!(store.set_status(Uuid::new_v4(), ApplicationStatus::Rejected).is_none());
    }
}
