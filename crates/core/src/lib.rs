//! Domain types and pure logic for the cinema service.
//!
//! Nothing in this crate performs I/O: validation helpers and the
//! partial-update statement builder are plain functions so both the
//! repository layer and the HTTP layer can share (and unit test) them.

pub mod cinema;
pub mod error;
pub mod partial_update;
pub mod types;
pub mod validation;
