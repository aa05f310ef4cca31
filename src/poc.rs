//! PoC Files
//!
//! Turns one PoC definition file on disk into the identifier records the rest of the
//! pipeline works with.

pub mod loader;
pub mod record;

pub use loader::{is_supported_extension, load_poc, SUPPORTED_EXTENSIONS};
pub use record::IdentifierRecord;
