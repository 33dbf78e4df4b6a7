//! Document store repository layer for all collections.
//!
//! This module contains repository structs that perform the store operations
//! (find-all, find-one-by-filter, insert, atomic find-and-update,
//! find-and-delete) for each collection. Repositories wrap a typed
//! `Collection<T>` and return driver errors at this boundary; translation to
//! HTTP-facing errors happens above, in the service and error layers. No
//! repository performs a read-modify-write: array appends use the store's
//! native push primitive so concurrent appends cannot lose updates.

pub mod composer;
pub mod customer;
pub mod person;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
