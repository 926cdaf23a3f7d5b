//! Core traits for the cobweb workspace.
//!
//! This crate defines the shared abstractions that the map variants, the
//! trajectory generator, and the presentation layer build on:
//!
//! - [`Map`] — a pure scalar map `state ↦ next state`
//! - [`Observer`] — receives iteration events and optionally returns control actions

mod map;
mod observer;

pub use map::Map;
pub use observer::Observer;
