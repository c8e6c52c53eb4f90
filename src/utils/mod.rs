// Utility modules
pub mod config;
pub mod error;
pub mod gnuplot;
pub mod logging;
pub mod validation;
