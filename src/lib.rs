//! Caloric Needs Calculator Library
//!
//! Harris-Benedict daily calorie estimates, the form that collects their
//! inputs, and the sinks that store each result.

pub mod build_info;
pub mod calculator;
pub mod config;
pub mod db;
pub mod form;
pub mod mcp;
pub mod models;
pub mod persistence;
pub mod tools;
