// gridstore-tools - core/mod.rs
//
// Core logic layer.
// Dependencies: standard library, serde/serde_json, tracing.
// Must NOT depend on: platform or app, and never opens files itself.

pub mod export;
pub mod manifest;
pub mod output;
pub mod phrasematch;
pub mod scanner;
