//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` — run/run-date/refresh-map/log/submit/chart.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate client logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod runtime;

pub use runtime::handle_runtime_commands;
