//! Seats a roster into fixed-size teams while spreading members of the same
//! affinity group (friend circles, clubs, ...) across different teams.

pub mod allocation;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod web;

pub use error::{AllocationError, AppError};
