#![forbid(unsafe_code)]

//! Style types for cluster-lens with CSS-like cascading semantics.
//!
//! This crate is the shared vocabulary for colors and styling. The render
//! crate stores these values in cells and the widgets crate computes them
//! for UI components, without either dragging in the other's concerns.
//!
//! - [`Style`] for unified text styling with override merging ([`Style::patch`]).
//! - [`InteractiveStyle`] for state-dependent variants (hover, selected).
//! - [`Color`] for ANSI-16 and RGB values.

pub mod interactive;
pub mod style;

pub use interactive::{InteractionState, InteractiveStyle};
pub use style::{Color, Style, StyleFlags};
