//! Shared utilities for pomcraft.
//!
//! This crate provides the cross-cutting concerns used by the other pomcraft
//! crates: the unified error type and a few filesystem helpers.

pub mod errors;
pub mod fs;
