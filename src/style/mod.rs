//! Data-driven style resolution.
//!
//! This module maps feature property values to visual attribute values
//! through ordered stop tables:
//!
//! - [`NumericStyle`] / [`ColorStyle`]: per-attribute stop tables with a
//!   default and a [`FunctionType`]
//! - [`numeric_map`] / [`color_map`]: resolve a single value
//! - [`numeric_join_table`] / [`color_join_table`]: resolve a whole
//!   record batch into a join table for vector-source data joins
//! - [`StyleError`]: errors from batch resolution
//!
//! Every visualization kind shares this one resolver; individual layers
//! hold a style struct per attribute they drive (color, radius, width,
//! height, weight) instead of composing lookup names dynamically.

mod error;
mod join;
mod resolve;
mod stops;

pub use error::StyleError;
pub use join::{color_join_table, numeric_join_table, JoinTable};
pub use resolve::{color_map, numeric_map};
pub use stops::{ColorStyle, FunctionType, NumericStyle};
