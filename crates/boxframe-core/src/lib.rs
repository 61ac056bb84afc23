#![forbid(unsafe_code)]

//! Core vocabulary for the boxframe layout engine.
//!
//! This crate defines the grid coordinate system, scroll metrics, render
//! triggers, and the color-token/tier vocabulary shared by the render kernel
//! and the painters. It has no dependencies and no I/O.

pub mod event;
pub mod geometry;
pub mod scroll;
pub mod token;

pub use event::Trigger;
pub use geometry::{DimensionSource, FixedDims, GridDims, Track};
pub use scroll::ScrollMetrics;
pub use token::{ColorToken, Tier};
