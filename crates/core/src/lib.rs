//! Domain logic for the mountfit compatibility service.
//!
//! Everything in this crate is pure computation over request data: no I/O,
//! no HTTP types, no state shared between calls. The `mountfit-api` crate
//! owns transport.

pub mod compatibility;
pub mod error;
