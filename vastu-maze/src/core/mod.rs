//! Core types for the vastu-maze library.
//!
//! - [`Point2D`]: planar coordinates in window units
//! - [`ArmShape`]: the three shape states, one maze layer each
//! - [`Configuration`] and [`GridIndex`]: continuous and discrete configurations
//! - [`CellLabel`]: classification of a sampled configuration

mod cell;
mod configuration;
mod point;
mod shape;

pub use cell::CellLabel;
pub use configuration::{Configuration, GridIndex};
pub use point::Point2D;
pub use shape::ArmShape;
