//! Core Module
//!
//! Infraestrutura comum ao driver: logging.

pub mod logging;
