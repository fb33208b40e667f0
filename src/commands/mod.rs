//! Interactive command layer.
//!
//! Thin glue between a line of user input and the address book: parse the
//! line, run the matching handler, and map any error to a fixed message.
//! Nothing in the core depends on this module.

mod handlers;
pub mod messages;
mod parser;
mod session;

pub use handlers::{Assistant, Reply};
pub use messages::user_message;
pub use parser::{parse_input, Command};
