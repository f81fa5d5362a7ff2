//! Service layer containing client logic and side-effect helpers.
//!
//! ## Service map
//! - `controller.rs` — clustering runs, map refresh, record submission.
//! - `page.rs` — page view seam and the in-memory page the CLI renders.
//! - `sequence.rs` — status write ordering across concurrent requests.
//! - `cache_bust.rs` — cache-busting image sources.
//! - `submission.rs` — client-side patient record validation.
//! - `config.rs` — config file + flag layering.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Network access goes through `api::ClusterApi`; page access through
//!   `page::PageView`. Both are passed in, never looked up.
//! - Keep command handlers thin; delegate to services.

pub mod cache_bust;
pub mod config;
pub mod controller;
pub mod output;
pub mod page;
pub mod sequence;
pub mod submission;
