//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Pure domain services.
pub mod services;

pub use entities::{DocumentRecord, EventRecord, NewsRecord, RecordId};
pub use errors::{MediaError, StoreError};
pub use ports::{ContentStorePort, MediaHostPort};
