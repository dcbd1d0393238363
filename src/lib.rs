// gridstore-tools - lib.rs
//
// Library entry point shared by the `dump_indexes` and `process_logs`
// binaries and the integration tests.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
