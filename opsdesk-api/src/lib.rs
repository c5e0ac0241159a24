pub mod config;
pub mod error;
pub mod handlers;
pub mod normalize;
pub mod sessions;
pub mod store;

pub use store::StoreClient;
