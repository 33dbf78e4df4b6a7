//! Document factories for inserting test fixtures.
//!
//! Each factory inserts a document with sensible defaults that can be
//! overridden through a builder pattern, mirroring how the application
//! itself constructs documents. Defaults incorporate an auto-incremented id
//! so repeated calls produce distinct values.

pub mod composer;
pub mod customer;
pub mod helpers;
pub mod person;
pub mod team;
pub mod user;
