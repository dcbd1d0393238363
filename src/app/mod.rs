// gridstore-tools - app/mod.rs
//
// Application layer: one orchestration module per tool.
// Dependencies: core, platform, util.

pub mod dump;
pub mod process_logs;
