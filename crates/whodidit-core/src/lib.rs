mod error;
pub use error::Error;

pub mod host;
pub use host::{FieldLookup, PendingSave, RelationRegistry, SessionStore};

pub mod schema;
pub use schema::Schema;

pub mod session;
pub use session::Session;

pub mod stmt;

/// A Result type alias that uses whodidit's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
