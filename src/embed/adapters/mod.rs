//! Adapter implementations for embed page ports.

pub mod http;
pub mod memory;
pub mod postgres;
pub mod templates;
