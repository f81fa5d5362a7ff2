//! Shared data model layer (structs/enums only).
//!
//! ## Files
//! - `models.rs` — response envelopes, page state, records, config, reports.
//! - `constants.rs` — endpoint paths and fixed user-facing messages.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs. Keep them
//! synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
