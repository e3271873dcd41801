#![forbid(unsafe_code)]

//! Render kernel: cells, buffers, and frames.
//!
//! # Role in cluster-lens
//! `clens-render` is the deterministic rendering surface. Widgets write
//! styled text spans into a [`buffer::Buffer`] and register clickable
//! regions in a [`frame::Frame`]'s hit grid; the host diffs and presents
//! buffers however it likes.
//!
//! # Primary responsibilities
//! - **Cell/Buffer**: 2D grid of styled graphemes with wide-glyph handling.
//! - **Frame**: buffer plus the mouse hit grid used for click routing.

pub mod buffer;
pub mod cell;
pub mod frame;
