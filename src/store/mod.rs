//! External record store access: filter formulas and the table client.
//!
//! The store is authoritative — nothing is persisted locally. The core
//! consumes it through exactly two operations: query-with-filter and
//! update-named-fields-by-id.

pub mod client;
pub mod filter;
