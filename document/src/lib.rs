//! Document definitions for every collection the API persists.
//!
//! Each module defines the stored shape of one collection, including any
//! embedded sub-documents owned by the parent (roles, dependents, players,
//! invoices). Documents serialize with camelCase field names so the stored
//! representation matches the wire representation, and every top-level
//! document carries an immutable `_id` generated at construction.

pub mod composer;
pub mod customer;
pub mod person;
pub mod team;
pub mod user;
