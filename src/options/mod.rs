//! Persistent named options with defaults
//!
//! - [`StoredOption`]: the persisted (value, default) pair
//! - [`OptionHandle`]: reads, updates and resets one option
//! - [`Options`]: enumerates, creates and removes options

pub mod collection;
pub mod option;
pub mod resolve;
pub mod stored;

pub use collection::Options;
pub use option::OptionHandle;
pub use resolve::Resolved;
pub use stored::{StoredOption, STANDARD_DEFAULT};
