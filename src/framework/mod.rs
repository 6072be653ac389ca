//! Service plumbing: configuration, shared state, and the HTTP surface.

pub mod config;
pub use config::Config;

pub mod data;
pub use data::{AppData, Error as DataError};

pub mod http;
pub mod logging;
