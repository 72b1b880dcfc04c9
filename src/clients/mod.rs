//! Typed clients over the generic resource actors.
//!
//! The clients are the transport boundary: raw string-keyed patch payloads
//! are decoded here, before any message is sent, and store-level errors are
//! mapped to the per-entity error enums exactly once.

#[macro_use]
mod macros;

mod book_client;
mod employee_client;
mod user_client;

pub use book_client::BookClient;
pub use employee_client::EmployeeClient;
pub use user_client::UserClient;
