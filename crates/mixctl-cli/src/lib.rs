//! Command-line front end for the OSS mixer

pub mod app;
