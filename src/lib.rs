//! Autonomous rider for a grid-based light-cycle arena.
//!
//! The decision core lives in [`bots`]; [`session`] drives it one tick at
//! a time over the narrow transport seam defined in [`connection`].

pub mod bots;
pub mod connection;
pub mod grid;
pub mod session;
