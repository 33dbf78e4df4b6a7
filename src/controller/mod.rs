//! HTTP request handlers for every resource.
//!
//! Controllers validate and convert DTOs into params, invoke the matching
//! service, and convert documents back into response DTOs. Each handler
//! carries a `utoipa::path` annotation; the OpenAPI document served at
//! `/api-docs` is assembled from these annotations in the router.

pub mod composer;
pub mod customer;
pub mod person;
pub mod session;
pub mod team;
