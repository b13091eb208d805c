//! Screen Actions
//!
//! What each screen does on submit or click, free of any view code so the
//! flows can be driven from tests.

mod auth;
mod board;

pub use auth::*;
pub use board::*;
