//! Outlines of **involute spur gears**, ring gears and their mating racks,
//! computed from a handful of engineering parameters.
//!
//! The crate is a pure geometry engine: a [`GearParameters`](gear::GearParameters)
//! record goes in, ordered point and arc sequences come out. Nothing is read
//! from or written to a document; serializing the result is left to the
//! caller or to the optional [`io`] exporters.
//!
//! ```
//! use gearrs::gear::{DrawingRequest, GearDrawing, GearParameters, SkeletonParameters};
//!
//! let params = GearParameters::new(24, 6.0, 20.0).with_clearance(0.1);
//! let request = DrawingRequest::new(params).with_skeleton(SkeletonParameters::default());
//! let drawing = GearDrawing::generate(&request).unwrap();
//! assert_eq!(drawing.outline.teeth, 24);
//! assert!(drawing.warnings.is_empty());
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: export drawings as SVG through the `svg` crate
//! - **cli**: the `gearrs` binary (`clap`, `env_logger`, JSON option files)
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to assemble teeth on a thread pool

#![forbid(unsafe_code)]
#![warn(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod aabb;
pub mod config;
pub mod errors;
pub mod float_types;
pub mod gear;
pub mod io;
pub mod math;
pub mod path;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::{GearError, GearWarning};
pub use gear::{DerivedGeometry, GearDrawing, GearOutline, GearParameters};
