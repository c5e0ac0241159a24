//! Foreign-key resolution for free-text reference fields.
//!
//! A reference input ("client" on the project form, "project" on the payment
//! form) is matched against the fetched reference collection by exact name.
//! Text that resolves to no known record must at least look like a store
//! identifier (UUID); anything else is rejected locally instead of sending
//! a doomed request.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ResolveError {
    #[error("'{0}' does not match a known record or a valid identifier")]
    Unresolved(String),
}

fn id_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
            .expect("identifier pattern is valid")
    })
}

/// Name/id lookup over a reference collection.
pub struct ReferenceIndex {
    id_by_name: HashMap<String, String>,
    name_by_id: HashMap<String, String>,
}

impl ReferenceIndex {
    pub fn new<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut id_by_name = HashMap::new();
        let mut name_by_id = HashMap::new();
        for (name, id) in pairs {
            id_by_name.insert(name.clone(), id.clone());
            name_by_id.insert(id, name);
        }
        Self {
            id_by_name,
            name_by_id,
        }
    }

    pub fn from_clients(clients: &[shared_types::Client]) -> Self {
        Self::new(clients.iter().map(|c| (c.name.clone(), c.id.clone())))
    }

    pub fn from_projects(projects: &[shared_types::Project]) -> Self {
        Self::new(projects.iter().map(|p| (p.name.clone(), p.id.clone())))
    }

    /// Resolve free text to an identifier. Empty input resolves to `None`
    /// (the field is simply absent); a name hit wins, then identifier-shaped
    /// text is accepted as-is, and everything else fails.
    pub fn resolve(&self, input: &str) -> Result<Option<String>, ResolveError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        if let Some(id) = self.id_by_name.get(input) {
            return Ok(Some(id.clone()));
        }

        if id_shape().is_match(input) {
            return Ok(Some(input.to_string()));
        }

        Err(ResolveError::Unresolved(input.to_string()))
    }

    /// Display name for a stored identifier, for table rendering.
    pub fn display_name(&self, id: &str) -> Option<&str> {
        self.name_by_id.get(id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> ReferenceIndex {
        ReferenceIndex::new(vec![
            ("Acme".to_string(), "0e3f6f0a-8c1d-4a6e-9f0b-1f2e3d4c5b6a".to_string()),
            ("Globex".to_string(), "11111111-2222-3333-4444-555555555555".to_string()),
        ])
    }

    #[test]
    fn test_exact_name_resolves_to_id() {
        let idx = index();
        assert_eq!(
            idx.resolve("Acme").unwrap(),
            Some("0e3f6f0a-8c1d-4a6e-9f0b-1f2e3d4c5b6a".to_string())
        );
    }

    #[test]
    fn test_identifier_shaped_text_passes_through() {
        let idx = index();
        let raw = "99999999-aaaa-bbbb-cccc-dddddddddddd";
        assert_eq!(idx.resolve(raw).unwrap(), Some(raw.to_string()));
    }

    #[test]
    fn test_unresolved_free_text_is_rejected() {
        let idx = index();
        assert_eq!(
            idx.resolve("acme ltd"),
            Err(ResolveError::Unresolved("acme ltd".to_string()))
        );
    }

    #[test]
    fn test_empty_input_is_absent_not_error() {
        let idx = index();
        assert_eq!(idx.resolve("   ").unwrap(), None);
    }

    #[test]
    fn test_display_name_round_trip() {
        let idx = index();
        let id = idx.resolve("Globex").unwrap().unwrap();
        assert_eq!(idx.display_name(&id), Some("Globex"));
        assert_eq!(idx.display_name("unknown"), None);
    }
}
