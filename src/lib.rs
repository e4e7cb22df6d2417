// Library exports for testing
pub mod config;
pub mod constants;
pub mod density;
pub mod generator;
pub mod icon;
pub mod logging;
pub mod runner;
pub mod source;
