//! Dashboard composition for the Landsat surface-index explorer.
//!
//! This crate turns a filtered observation series into everything one
//! dashboard tab needs to draw itself:
//!
//! - [`summary`] reduces a series to descriptive statistics
//! - [`seasonal`] pivots a series into a year-by-month grid
//! - [`plan`] defines the [`plan::RenderPlan`] handed to the renderers
//! - [`composer`] runs the queries and assembles the plan
//!
//! Everything here is pure data in, pure data out. No DOM, no JS, no
//! rendering. The shell crate owns the side effects.

pub mod composer;
pub mod plan;
pub mod seasonal;
pub mod summary;
