//! Per-page collection state.
//!
//! The collection is never authoritative: it mirrors what the store echoed.
//! Successful creates prepend, updates replace by id, deletes remove by id,
//! and failures leave the records untouched. An operation must be opened
//! with [`PageState::begin`] first, which refuses a second conflicting
//! operation on the same record until the first resolves.

use std::collections::HashSet;

use thiserror::Error;

pub trait Identify {
    fn id(&self) -> &str;
}

impl Identify for shared_types::Client {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identify for shared_types::Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identify for shared_types::Payment {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identify for shared_types::Portal {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identify for shared_types::Form {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identify for shared_types::TrackingEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Nothing in flight; `Idle` before the first load, `Loaded` after.
    Idle,
    Loading,
    Submitting,
    /// Last operation failed; retained until the next operation starts.
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Create,
    Update,
    Delete,
}

/// Receipt for an in-flight operation. Must be handed back to one of the
/// `complete_*` methods, which releases the per-record guard.
#[derive(Debug)]
pub struct OpToken {
    kind: OpKind,
    target: Option<String>,
}

impl OpToken {
    pub fn kind(&self) -> OpKind {
        self.kind
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum StateError {
    #[error("a create is already in flight")]
    CreateInFlight,
    #[error("an operation on record {0} is already in flight")]
    RecordBusy(String),
    #[error("operation on {0} requires a target record")]
    MissingTarget(&'static str),
}

pub struct PageState<T> {
    phase: Phase,
    records: Vec<T>,
    create_in_flight: bool,
    busy_records: HashSet<String>,
}

impl<T: Identify> PageState<T> {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            records: Vec::new(),
            create_in_flight: false,
            busy_records: HashSet::new(),
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Mark the initial list fetch as started.
    pub fn begin_load(&mut self) {
        self.phase = Phase::Loading;
    }

    /// Replace the collection with the store's listing.
    pub fn loaded(&mut self, records: Vec<T>) {
        self.records = records;
        self.settle();
    }

    pub fn load_failed(&mut self, message: String) {
        self.records.clear();
        self.phase = Phase::Error(message);
    }

    /// Open an operation. Update/delete take the target record id; a second
    /// conflicting request for the same record is refused until the first
    /// one resolves.
    pub fn begin(&mut self, kind: OpKind, target: Option<&str>) -> Result<OpToken, StateError> {
        let target = match kind {
            OpKind::Create => None,
            OpKind::Update | OpKind::Delete => {
                let id = target.ok_or(StateError::MissingTarget(match kind {
                    OpKind::Update => "update",
                    _ => "delete",
                }))?;
                Some(id.to_string())
            }
        };

        match &target {
            None => {
                if self.create_in_flight {
                    return Err(StateError::CreateInFlight);
                }
                self.create_in_flight = true;
            }
            Some(id) => {
                if !self.busy_records.insert(id.clone()) {
                    return Err(StateError::RecordBusy(id.clone()));
                }
            }
        }

        // Starting an operation clears a retained error
        self.phase = Phase::Submitting;
        Ok(OpToken { kind, target })
    }

    /// Merge a successful create: the echoed record goes to the front. If
    /// the store echoed an id we somehow already hold, the existing record
    /// is replaced instead (last response wins).
    pub fn complete_create(&mut self, token: OpToken, record: T) {
        self.release(&token);
        match self.position(record.id()) {
            Some(i) => self.records[i] = record,
            None => self.records.insert(0, record),
        }
        self.settle();
    }

    /// Merge a successful update: replace in place by id.
    pub fn complete_update(&mut self, token: OpToken, record: T) {
        self.release(&token);
        if let Some(i) = self.position(record.id()) {
            self.records[i] = record;
        }
        self.settle();
    }

    /// Merge a successful delete: remove by the token's target id.
    pub fn complete_delete(&mut self, token: OpToken) {
        if let Some(id) = token.target.clone() {
            self.records.retain(|r| r.id() != id);
        }
        self.release(&token);
        self.settle();
    }

    /// Record a failure. The collection is left exactly as it was; only the
    /// phase carries the message.
    pub fn complete_failed(&mut self, token: OpToken, message: String) {
        self.release(&token);
        self.phase = Phase::Error(message);
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    fn release(&mut self, token: &OpToken) {
        match &token.target {
            None => self.create_in_flight = false,
            Some(id) => {
                self.busy_records.remove(id);
            }
        }
    }

    fn settle(&mut self) {
        if !self.create_in_flight && self.busy_records.is_empty() {
            self.phase = Phase::Idle;
        }
    }
}

impl<T: Identify> Default for PageState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Client;

    fn client(id: &str, name: &str) -> Client {
        Client {
            id: id.to_string(),
            name: name.to_string(),
            contact: None,
            email: None,
            created_at: None,
        }
    }

    #[test]
    fn test_create_prepends_and_grows_by_one() {
        let mut page = PageState::new();
        page.loaded(vec![client("u1", "Acme")]);

        let token = page.begin(OpKind::Create, None).unwrap();
        assert_eq!(*page.phase(), Phase::Submitting);

        page.complete_create(token, client("u2", "Globex"));
        assert_eq!(page.len(), 2);
        assert_eq!(page.records()[0].id, "u2");
        assert_eq!(*page.phase(), Phase::Idle);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut page = PageState::new();
        page.loaded(vec![client("u1", "Acme"), client("u2", "Globex")]);

        let token = page.begin(OpKind::Update, Some("u2")).unwrap();
        page.complete_update(token, client("u2", "Globex Corp"));

        assert_eq!(page.len(), 2);
        assert_eq!(page.records()[1].name, "Globex Corp");
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut page = PageState::new();
        page.loaded(vec![client("u1", "Acme"), client("u2", "Globex")]);

        let token = page.begin(OpKind::Delete, Some("u1")).unwrap();
        page.complete_delete(token);

        assert_eq!(page.len(), 1);
        assert!(page.records().iter().all(|c| c.id != "u1"));
    }

    #[test]
    fn test_failure_leaves_collection_untouched() {
        let mut page = PageState::new();
        page.loaded(vec![client("u1", "Acme")]);

        let token = page.begin(OpKind::Delete, Some("u1")).unwrap();
        page.complete_failed(token, "Failed to delete client".to_string());

        assert_eq!(page.len(), 1);
        assert_eq!(*page.phase(), Phase::Error("Failed to delete client".to_string()));

        // The retained error clears when the next operation starts
        let token = page.begin(OpKind::Update, Some("u1")).unwrap();
        assert_eq!(*page.phase(), Phase::Submitting);
        page.complete_failed(token, "again".to_string());
    }

    #[test]
    fn test_conflicting_operation_on_same_record_is_refused() {
        let mut page = PageState::new();
        page.loaded(vec![client("u1", "Acme"), client("u2", "Globex")]);

        let first = page.begin(OpKind::Update, Some("u1")).unwrap();
        let second = page.begin(OpKind::Delete, Some("u1"));
        assert_eq!(second.unwrap_err(), StateError::RecordBusy("u1".to_string()));

        // A different record is fine while u1 is busy
        let other = page.begin(OpKind::Delete, Some("u2")).unwrap();
        page.complete_delete(other);
        assert_eq!(page.len(), 1);

        page.complete_update(first, client("u1", "Acme Ltd"));
        assert_eq!(page.records()[0].name, "Acme Ltd");
    }

    #[test]
    fn test_guard_released_after_resolution() {
        let mut page = PageState::new();
        page.loaded(vec![client("u1", "Acme")]);

        let token = page.begin(OpKind::Update, Some("u1")).unwrap();
        page.complete_failed(token, "store error".to_string());

        // Resolution releases the guard even on failure
        assert!(page.begin(OpKind::Update, Some("u1")).is_ok());
    }

    #[test]
    fn test_double_create_refused_until_first_resolves() {
        let mut page: PageState<Client> = PageState::new();

        let first = page.begin(OpKind::Create, None).unwrap();
        assert_eq!(page.begin(OpKind::Create, None).unwrap_err(), StateError::CreateInFlight);

        page.complete_create(first, client("u1", "Acme"));
        assert!(page.begin(OpKind::Create, None).is_ok());
    }

    #[test]
    fn test_create_echoing_known_id_replaces_instead_of_duplicating() {
        let mut page = PageState::new();
        page.loaded(vec![client("u1", "Acme")]);

        let token = page.begin(OpKind::Create, None).unwrap();
        page.complete_create(token, client("u1", "Acme again"));

        assert_eq!(page.len(), 1);
        assert_eq!(page.records()[0].name, "Acme again");
    }
}
