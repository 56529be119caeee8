//! Diatone CLI library.
//!
//! This crate provides the command implementations behind the `diatone`
//! binary, plus loading of the step-pattern configuration file.

pub mod commands;
pub mod config;
