//! Inline module - Include resolution and the end-to-end pipeline
//!
//! - `preflight`: input/output checks run before parsing
//! - `resolve`: the include resolver
//! - `report`: progress and timing reports
//! - `run`: parse, resolve, indent and write

pub mod preflight;
pub mod report;
pub mod resolve;
pub mod run;
