//! Session state observed by the access guard.

pub mod session;
