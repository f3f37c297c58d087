//! # SunPlan Core
//!
//! Core types and utilities shared by the SunPlan crates.
//! Provides the building data model, property validation, and the
//! constants that tie screen-space thresholds to the editor.

pub mod constants;
pub mod data;
pub mod error;

pub use data::{Building, BuildingId, BuildingPatch, GroupId, Point, DEFAULT_PALETTE};
pub use error::{Error, Result, ValidationError};
