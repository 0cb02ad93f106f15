//! # Domain Models
//!
//! Pure domain types for the campus portal with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, networking, or heavy logic. Data, parsing and simple helpers only.

pub mod config;
pub mod constants;
pub mod notice;
pub mod registry;
pub mod role;
pub mod session;
