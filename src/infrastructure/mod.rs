//! Infrastructure: configuration and logging bootstrap.

pub mod config;
