//! Shared types for the renmap mapping renderer.
//!
//! This crate provides the foundational pieces used across renmap crates:
//! - Rename-table records (`RenameTable`, `ClassMapping`, `MemberMapping`)
//! - Internal/external class-name conversion (`names`)

pub mod model;
pub mod names;

pub use model::{ClassMapping, MemberMapping, RenameTable};
