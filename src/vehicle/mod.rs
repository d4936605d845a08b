//! Vehicle banking: the roll the model leans into as the route turns.

/// Bank angle derivation from the route tangent.
pub mod bank;
/// Smoothed vehicle orientation state.
pub mod orientation;

pub use bank::{bank_angle, bank_from_tangent};
pub use orientation::VehicleState;
