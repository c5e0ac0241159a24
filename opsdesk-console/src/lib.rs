//! Console state layer for the opsdesk API.
//!
//! One [`collection::PageState`] per resource page mirrors the store's
//! responses: the initial list fetch populates it and later operations merge
//! the echoed records back in, never re-fetching. Everything here is plain
//! state manipulation; HTTP lives in [`client::ConsoleClient`] and a UI
//! shell drives both.

pub mod client;
pub mod collection;
pub mod forms;
pub mod resolve;
pub mod search;

pub use client::{ConsoleClient, ConsoleError};
pub use collection::{Identify, OpKind, OpToken, PageState, Phase};
pub use resolve::ReferenceIndex;
