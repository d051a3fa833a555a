pub mod get;
pub mod list;
pub mod remove;
pub mod reset;
pub mod set;

pub use get::{default_command, get_command};
pub use list::list_command;
pub use remove::remove_command;
pub use reset::{reset_all_command, reset_command};
pub use set::{append_command, set_command};
