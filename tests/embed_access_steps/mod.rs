//! Step definitions for embed access scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
