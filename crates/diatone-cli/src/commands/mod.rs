//! CLI command implementations

pub mod freq;
pub mod interval;
pub mod json_output;
pub mod meter;
pub mod modes;
pub mod note;
pub mod pitch;
pub mod respell;
pub mod scale;

mod reporting;
