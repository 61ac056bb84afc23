#![forbid(unsafe_code)]

//! Render kernel for boxframe.
//!
//! The kernel is deliberately small: painters produce a [`plan::Plan`] of
//! [`cell::Cell`]s, and a [`surface::Surface`] adapter applies the plan to
//! whatever the host renders with. [`buffer::GridBuffer`] is the reference
//! surface, and [`diff::BufferDiff`] lets incremental adapters upload only
//! the slots that changed between passes.

pub mod buffer;
pub mod cell;
pub mod diff;
pub mod plan;
pub mod surface;

pub use buffer::{GridBuffer, Slot};
pub use cell::{Cell, Layer};
pub use diff::BufferDiff;
pub use plan::Plan;
pub use surface::{ContentHost, Surface};
