//! Core types shared across LodgeX facilities
//!
//! This crate provides foundational types used by both the business core
//! and any embedding surface (HTTP API, CLI, tests):
//!
//! - **Identity types**: `Identity`, `Caller` — an already-verified caller
//!   identity as a plain value, independent of any authentication transport

pub mod identity;

pub use identity::{Caller, Identity};
