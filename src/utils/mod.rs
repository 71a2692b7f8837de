//! Small standalone helpers: email validation, password checks and an
//! append-only message log. None of them is used by the merge itself.

pub mod log;
pub mod password;
pub mod validation;

pub use log::{LOG_FILE, log_message, log_message_to};
pub use password::{hash_password, is_strong_password};
pub use validation::is_valid_email;
