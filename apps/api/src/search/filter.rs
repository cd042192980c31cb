//! Filter composer for listing pages.
//!
//! Each dimension is either disabled (empty or an "all" sentinel such as
//! `all-locations`) or contributes one predicate; active predicates are ANDed.
//! Results keep input order. Unparsable numeric values never exclude a record.

use serde::Deserialize;

use crate::models::listing::Listing;

/// UI filter values, as sent on the listing query string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingFilter {
    /// Free-text search over title, company, location and skills.
    pub q: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: Option<String>,
    /// Formatted floor, e.g. `$50,000`. Applied to salary or stipend.
    pub min_salary: Option<String>,
    pub experience: Option<String>,
    pub category: Option<String>,
    /// Comma-separated; every tag must be present in the listing's skills.
    pub tags: Option<String>,
    pub remote: Option<bool>,
}

impl ListingFilter {
    /// Returns the listings matching every active predicate, in input order.
    pub fn apply<'a, I>(&self, listings: I) -> Vec<Listing>
    where
        I: IntoIterator<Item = &'a Listing>,
    {
        listings
            .into_iter()
            .filter(|l| self.matches(l))
            .cloned()
            .collect()
    }

    /// The free-text query, or `None` when it is empty or a sentinel.
    pub fn text_query(&self) -> Option<&str> {
        active(&self.q)
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(q) = active(&self.q) {
            if !matches_text(listing, q) {
                return false;
            }
        }
        if let Some(loc) = active(&self.location) {
            if !contains_ci(&listing.location, loc) {
                return false;
            }
        }
        if let Some(t) = active(&self.employment_type) {
            if !listing.employment_type.eq_ignore_ascii_case(t) {
                return false;
            }
        }
        if let Some(level) = active(&self.experience) {
            if !listing.experience_level.eq_ignore_ascii_case(level) {
                return false;
            }
        }
        if let Some(cat) = active(&self.category) {
            if !listing.category.eq_ignore_ascii_case(cat) {
                return false;
            }
        }
        if self.remote == Some(true) && !listing.is_remote {
            return false;
        }
        if !self.tag_list().iter().all(|tag| {
            listing
                .skills
                .iter()
                .any(|s| s.eq_ignore_ascii_case(tag))
        }) {
            return false;
        }
        meets_pay_floor(listing, active(&self.min_salary))
    }

    fn tag_list(&self) -> Vec<&str> {
        active(&self.tags)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Case-insensitive substring match against title, company, location and skills.
/// An empty query matches everything.
pub fn matches_text(listing: &Listing, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    contains_ci(&listing.title, query)
        || contains_ci(&listing.company, query)
        || contains_ci(&listing.location, query)
        || listing.skills.iter().any(|s| contains_ci(s, query))
}

/// Parses a formatted amount such as `$120,000`, `₹15000/month`, `$1.5k/month`
/// or `$80k - $100k`.
///
/// Only the lower bound of a range is read. Currency symbols and thousands
/// separators are ignored; a `k` right after the number multiplies by 1000.
/// Returns `None` when no number can be read.
pub fn parse_amount(raw: &str) -> Option<u64> {
    let head = raw.split(['-', '–']).next().unwrap_or(raw);
    let start = head.find(|c: char| c.is_ascii_digit())?;
    let rest = &head[start..];
    let end = rest
        .find(|c: char| !(c.is_ascii_digit() || c == ',' || c == '.'))
        .unwrap_or(rest.len());

    let number: String = rest[..end].chars().filter(|c| *c != ',').collect();
    let amount: f64 = number.trim_end_matches('.').parse().ok()?;

    let thousands = rest[end..]
        .trim_start()
        .strip_prefix(['k', 'K'])
        .is_some_and(|after| !after.starts_with(|c: char| c.is_ascii_alphabetic()));
    let amount = if thousands { amount * 1000.0 } else { amount };

    amount.is_finite().then(|| amount.round() as u64)
}

fn meets_pay_floor(listing: &Listing, floor: Option<&str>) -> bool {
    let floor = match floor.and_then(parse_amount) {
        Some(f) if f > 0 => f,
        _ => return true,
    };
    match listing.pay().and_then(parse_amount) {
        Some(pay) => pay >= floor,
        None => true,
    }
}

/// Filter value with sentinels (`""`, `all`, `any`, `all-*`) mapped to `None`.
fn active(value: &Option<String>) -> Option<&str> {
    let v = value.as_deref()?.trim();
    let lower = v.to_ascii_lowercase();
    if v.is_empty() || lower == "all" || lower == "any" || lower.starts_with("all-") {
        None
    } else {
        Some(v)
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
