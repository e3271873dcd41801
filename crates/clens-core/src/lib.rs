#![forbid(unsafe_code)]

//! Geometry and canonical input events for cluster-lens.
//!
//! This crate is the shared vocabulary of the workspace: rectangles for
//! layout bounds and hit testing, and the mouse event types the host feeds
//! into the view layer. It has no rendering or store dependencies.

pub mod event;
pub mod geometry;
