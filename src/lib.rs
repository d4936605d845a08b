// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Scroll-driven flight along a 3D route.
//!
//! A page's scroll offset is mapped onto a Catmull-Rom curve. Each frame a
//! camera rig eases toward the curve point at that progress and turns to
//! face a look-ahead sample, while a vehicle model riding the rig rolls
//! into the turns within a fixed bank envelope.
//!
//! # Key entry points
//!
//! - [`flight::Flight`] - route plus configuration; advances a
//!   [`flight::FlightState`] once per frame
//! - [`path::PathCurve`] - the route spline and its arc-length queries
//! - [`options::Options`] - TOML-backed configuration (path, camera,
//!   vehicle, scroll)
//! - [`input::ScrollDriver`] - reference damped scroll source
//!
//! # Frame flow
//!
//! The host reads a [`frame::FrameInput`] (scroll offset, delta time) and
//! calls [`flight::Flight::update`]. Path targets are sampled once, the
//! [`camera::CameraRig`] smooths toward them, and the
//! [`vehicle::VehicleState`] banks off the same unsmoothed look direction.
//! Rendering is left to the host: [`camera::Viewpoint`] and
//! [`ribbon::RibbonMesh`] hand over plain matrices and vertex data.

pub mod camera;
pub mod error;
pub mod flight;
pub mod frame;
pub mod input;
pub mod options;
pub mod path;
pub mod ribbon;
pub mod util;
pub mod vehicle;

pub use error::FlightError;
pub use flight::{Flight, FlightState};
pub use frame::FrameInput;
