#![forbid(unsafe_code)]

//! Reactive state containers for cluster-lens.
//!
//! # Role in cluster-lens
//! The view layer owns no state of its own. It reads from, and requests
//! mutations on, the two stores defined here:
//!
//! - [`ClusterStore`]: the current cluster hierarchy plus a loading flag,
//!   populated by an external fetch/clustering process.
//! - [`ClusterSelectionStore`]: the set of currently selected clusters,
//!   mutated only through user interaction.
//!
//! Both are built on [`Observable`], an explicit subscribe/notify container:
//! hosts register a callback and re-render on notification instead of relying
//! on implicit mutation tracking.

pub mod cluster;
pub mod data;
pub mod observable;
pub mod selection;

pub use cluster::{ClusterId, ClusterNode};
pub use data::{ClusterData, ClusterStore};
pub use observable::{Observable, Subscription};
pub use selection::ClusterSelectionStore;
