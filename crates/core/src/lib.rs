//! Domain types and pure logic for the Cinelog catalog.
//!
//! Nothing in this crate touches the database or the network; the store
//! lives in `cinelog-db` and the HTTP surface in `cinelog-api`.

pub mod error;
pub mod filters;
pub mod runtime;
pub mod staff;
pub mod types;
pub mod validation;
pub mod video;
