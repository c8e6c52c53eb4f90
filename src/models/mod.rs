// Models module for data structures
pub mod method;
pub mod samples;
