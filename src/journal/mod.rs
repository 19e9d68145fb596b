pub mod sample;
pub mod store;

pub use store::{CatalogEntry, JournalStore};
