//! # Domain Models
//!
//! Plain data shared by every xrkit crate: configuration shapes, handedness,
//! and the interaction binding model used by controller mappings.
//! Keep it lean: no I/O and no resolution logic, just data and simple helpers.

pub mod config;
pub mod constants;
pub mod handedness;
pub mod input;
