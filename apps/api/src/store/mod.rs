//! In-memory listing store.
//!
//! Stands in for a persistent datastore. Records are never physically removed:
//! deletion flips `is_active`, and every "active" query skips inactive records.

pub mod handlers;
pub mod seed;

use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::models::listing::{Listing, ListingKind, ListingPatch, NewListing};
use crate::search::matches_text;

/// One collection of listings with its own id space.
#[derive(Debug, Clone)]
pub struct ListingStore {
    kind: ListingKind,
    records: Vec<Listing>,
    last_id: i64,
}

impl ListingStore {
    pub fn new(kind: ListingKind) -> Self {
        Self {
            kind,
            records: Vec::new(),
            last_id: 0,
        }
    }

    /// Adds a listing with an id derived from the current timestamp (ms).
    /// If the clock has not advanced since the last insert, the id is bumped
    /// past the previous one so ids stay unique.
    pub fn add(&mut self, new: NewListing) -> Listing {
        let id = Utc::now().timestamp_millis().max(self.last_id + 1);
        self.insert_with_id(id, new, Utc::now().date_naive())
    }

    /// Inserts with an explicit id and posting date. Used for seed data.
    pub fn insert_with_id(&mut self, id: i64, new: NewListing, posted_date: NaiveDate) -> Listing {
        let listing = Listing::from_new(id, new, posted_date);
        self.last_id = self.last_id.max(id);
        self.records.push(listing.clone());
        debug!(kind = self.kind.as_str(), id, "listing added");
        listing
    }

    /// Shallow-merges `patch` into an active listing.
    pub fn update(&mut self, id: i64, patch: ListingPatch) -> Option<Listing> {
        let listing = self.active_mut(id)?;
        listing.apply_patch(patch);
        Some(listing.clone())
    }

    /// Soft delete. Returns false when no active listing has this id.
    pub fn delete(&mut self, id: i64) -> bool {
        match self.active_mut(id) {
            Some(listing) => {
                listing.is_active = false;
                debug!(kind = self.kind.as_str(), id, "listing deactivated");
                true
            }
            None => false,
        }
    }

    pub fn get_by_id(&self, id: i64) -> Option<&Listing> {
        self.records.iter().find(|l| l.id == id && l.is_active)
    }

    /// Looks up a record regardless of its active flag.
    pub fn get_raw(&self, id: i64) -> Option<&Listing> {
        self.records.iter().find(|l| l.id == id)
    }

    pub fn get_all(&self) -> Vec<&Listing> {
        self.records.iter().filter(|l| l.is_active).collect()
    }

    /// Case-insensitive substring search over active listings.
    pub fn search(&self, query: &str) -> Vec<&Listing> {
        self.records
            .iter()
            .filter(|l| l.is_active && matches_text(l, query))
            .collect()
    }

    pub fn record_view(&mut self, id: i64) -> Option<Listing> {
        let listing = self.active_mut(id)?;
        listing.views += 1;
        Some(listing.clone())
    }

    pub fn record_application(&mut self, id: i64) -> Option<Listing> {
        let listing = self.active_mut(id)?;
        listing.applicants += 1;
        Some(listing.clone())
    }

    fn active_mut(&mut self, id: i64) -> Option<&mut Listing> {
        self.records.iter_mut().find(|l| l.id == id && l.is_active)
    }
}

/// Both listing collections. Shared behind `Arc<RwLock<JobBoard>>` in `AppState`.
#[derive(Debug, Clone)]
pub struct JobBoard {
    pub jobs: ListingStore,
    pub internships: ListingStore,
}

impl Default for JobBoard {
    fn default() -> Self {
        Self {
            jobs: ListingStore::new(ListingKind::Job),
            internships: ListingStore::new(ListingKind::Internship),
        }
    }
}

impl JobBoard {
    pub fn collection(&self, kind: ListingKind) -> &ListingStore {
        match kind {
            ListingKind::Job => &self.jobs,
            ListingKind::Internship => &self.internships,
        }
    }

    pub fn collection_mut(&mut self, kind: ListingKind) -> &mut ListingStore {
        match kind {
            ListingKind::Job => &mut self.jobs,
            ListingKind::Internship => &mut self.internships,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_job(title: &str, skills: &[&str]) -> NewListing {
        NewListing {
            title: title.to_string(),
            company: "Hooli".to_string(),
            location: "Palo Alto, CA".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_add_zeroes_counters_and_is_listed() {
        let mut store = ListingStore::new(ListingKind::Job);
        let added = store.add(new_job("Platform Engineer", &[]));

        let all = store.get_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, added.id);
        assert_eq!(all[0].applicants, 0);
        assert_eq!(all[0].views, 0);
        assert!(all[0].is_active);
    }

    #[test]
    fn test_rapid_adds_get_unique_ids() {
        let mut store = ListingStore::new(ListingKind::Job);
        let ids: Vec<i64> = (0..50)
            .map(|i| store.add(new_job(&format!("Job {i}"), &[])).id)
            .collect();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_soft_delete_hides_but_keeps_record() {
        let mut store = ListingStore::new(ListingKind::Job);
        let id = store.add(new_job("SRE", &[])).id;

        assert!(store.delete(id));
        assert!(store.get_by_id(id).is_none());
        assert!(store.get_all().is_empty());

        let raw = store.get_raw(id).expect("record still stored");
        assert!(!raw.is_active);
        // deleting twice is a miss
        assert!(!store.delete(id));
    }

    #[test]
    fn test_search_matches_skill_case_insensitively() {
        let mut store = ListingStore::new(ListingKind::Job);
        let id = store.add(new_job("Frontend Developer", &["React"])).id;
        store.add(new_job("Backend Developer", &["Go"]));

        let hits = store.search("react");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, id);
    }

    #[test]
    fn test_search_skips_inactive() {
        let mut store = ListingStore::new(ListingKind::Job);
        let id = store.add(new_job("Frontend Developer", &["React"])).id;
        store.delete(id);
        assert!(store.search("react").is_empty());
    }

    #[test]
    fn test_update_merges_and_keeps_id() {
        let mut store = ListingStore::new(ListingKind::Internship);
        let id = store.add(new_job("Design Intern", &[])).id;

        let updated = store
            .update(
                id,
                ListingPatch {
                    stipend: Some("$2,000/month".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.title, "Design Intern");
        assert_eq!(updated.stipend.as_deref(), Some("$2,000/month"));
    }

    #[test]
    fn test_counters() {
        let mut store = ListingStore::new(ListingKind::Job);
        let id = store.add(new_job("Analyst", &[])).id;
        store.record_view(id);
        store.record_view(id);
        store.record_application(id);

        let listing = store.get_by_id(id).unwrap();
        assert_eq!(listing.views, 2);
        assert_eq!(listing.applicants, 1);
    }

    #[test]
    fn test_collections_are_separate() {
        let mut board = JobBoard::default();
        board.jobs.add(new_job("Job", &[]));
        assert_eq!(board.collection(ListingKind::Job).get_all().len(), 1);
        assert!(board.collection(ListingKind::Internship).get_all().is_empty());
    }
}
