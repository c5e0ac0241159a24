//! Client-side search: a pure, case-insensitive substring match over each
//! resource's display fields, recomputed over the in-memory collection on
//! every keystroke. Never touches the API.

use shared_types::{Client, Form, Payment, Portal, Project, TrackingEntry};

pub trait Searchable {
    /// The display fields the search box matches against.
    fn haystacks(&self) -> Vec<&str>;
}

impl Searchable for Client {
    fn haystacks(&self) -> Vec<&str> {
        vec![
            &self.name,
            self.email.as_deref().unwrap_or(""),
            self.contact.as_deref().unwrap_or(""),
        ]
    }
}

impl Searchable for Project {
    fn haystacks(&self) -> Vec<&str> {
        vec![
            &self.name,
            self.status.as_deref().unwrap_or(""),
            self.description.as_deref().unwrap_or(""),
        ]
    }
}

impl Searchable for Portal {
    fn haystacks(&self) -> Vec<&str> {
        vec![
            &self.name,
            &self.link,
            self.notes.as_deref().unwrap_or(""),
        ]
    }
}

impl Searchable for Form {
    fn haystacks(&self) -> Vec<&str> {
        vec![
            &self.name,
            &self.link,
            self.excel_link.as_deref().unwrap_or(""),
            self.notes.as_deref().unwrap_or(""),
        ]
    }
}

pub fn filter<'a, T: Searchable>(records: &'a [T], needle: &str) -> Vec<&'a T> {
    let needle = needle.to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.haystacks()
                .iter()
                .any(|h| h.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Payments match on the resolved project name rather than the raw
/// `project_id`, so the reference collection comes along.
pub fn filter_payments<'a>(
    payments: &'a [Payment],
    projects: &[Project],
    needle: &str,
) -> Vec<&'a Payment> {
    let needle = needle.to_lowercase();
    payments
        .iter()
        .filter(|p| {
            let project_name = projects
                .iter()
                .find(|pr| pr.id == p.project_id)
                .map(|pr| pr.name.as_str())
                .unwrap_or("");

            project_name.to_lowercase().contains(&needle)
                || p.status
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&needle)
                || p.notes
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&needle)
        })
        .collect()
}

/// Tracking entries also match inside the serialized `details` JSON.
pub fn filter_tracking<'a>(entries: &'a [TrackingEntry], needle: &str) -> Vec<&'a TrackingEntry> {
    let needle = needle.to_lowercase();
    entries
        .iter()
        .filter(|t| {
            let details = t
                .details
                .as_ref()
                .map(|d| d.to_string())
                .unwrap_or_default();

            t.entity_type.to_lowercase().contains(&needle)
                || t.entity_id.to_lowercase().contains(&needle)
                || t.action.to_lowercase().contains(&needle)
                || details.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(name: &str, email: Option<&str>) -> Client {
        Client {
            id: name.to_lowercase(),
            name: name.to_string(),
            contact: None,
            email: email.map(str::to_string),
            created_at: None,
        }
    }

    #[test]
    fn test_single_match_case_insensitive() {
        let records = vec![
            client("Acme", Some("a@x.com")),
            client("Globex", Some("g@x.com")),
        ];

        let hits = filter(&records, "GLOB");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Globex");
    }

    #[test]
    fn test_empty_needle_matches_everything() {
        let records = vec![client("Acme", None), client("Globex", None)];
        assert_eq!(filter(&records, "").len(), 2);
    }

    #[test]
    fn test_matches_any_display_field() {
        let records = vec![
            client("Acme", Some("billing@acme.io")),
            client("Globex", Some("ops@globex.io")),
        ];

        let hits = filter(&records, "billing");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Acme");
    }

    #[test]
    fn test_payment_matches_resolved_project_name() {
        let projects = vec![Project {
            id: "p1".to_string(),
            name: "Website Revamp".to_string(),
            client_id: None,
            status: None,
            description: None,
            created_at: None,
        }];
        let payments = vec![Payment {
            id: "pay1".to_string(),
            project_id: "p1".to_string(),
            amount: 100.0,
            status: Some("paid".to_string()),
            payment_date: None,
            notes: None,
            created_at: None,
        }];

        assert_eq!(filter_payments(&payments, &projects, "revamp").len(), 1);
        // The raw id is not a display field
        assert_eq!(filter_payments(&payments, &projects, "p1").len(), 0);
    }

    #[test]
    fn test_tracking_matches_inside_details_json() {
        let entries = vec![TrackingEntry {
            id: "t1".to_string(),
            entity_type: "client".to_string(),
            entity_id: "u1".to_string(),
            action: "updated".to_string(),
            details: Some(json!({"field": "email"})),
            timestamp: None,
        }];

        assert_eq!(filter_tracking(&entries, "email").len(), 1);
        assert_eq!(filter_tracking(&entries, "missing").len(), 0);
    }
}
