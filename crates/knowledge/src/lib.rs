//! The VeggieTools knowledge store.
//!
//! Two immutable tables compiled into the binary: plant records keyed by a
//! lowercase snake_case identifier, and frost-date ranges keyed by USDA
//! hardiness zone. Build the store once with [`KnowledgeStore::builtin`],
//! wrap it in an `Arc`, and hand it to whoever needs to read it.

mod data;
pub mod plant;
pub mod store;
pub mod zone;

pub use plant::{PlantRecord, Variety};
pub use store::{KnowledgeError, KnowledgeStore};
pub use zone::ZoneRecord;
