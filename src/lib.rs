//! Parking Simulation Library
//!
//! An arcade parking game library that can run independently or with a Bevy UI.

pub mod simulation;

#[cfg(feature = "ui")]
pub mod ui;
