// gridstore-tools - platform/mod.rs
//
// Platform abstraction layer: config files, filesystem handles, child
// processes.
// Dependencies: standard library, directories, toml.
// Must NOT depend on: app.

pub mod config;
pub mod fs;
pub mod process;
