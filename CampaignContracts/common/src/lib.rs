//! Helpers shared by the campaign, billing and token contracts.

#![no_std]

pub mod fixed_point;
pub mod time;

pub use fixed_point::*;
pub use time::TimeMode;
