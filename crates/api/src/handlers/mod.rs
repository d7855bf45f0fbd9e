//! Request handlers.
//!
//! Handlers are thin: parse the body, run the core pipeline, map errors via
//! [`AppError`](crate::error::AppError). All decision logic lives in
//! `mountfit-core`.

pub mod compatibility;
