//! # Core Application Logic
//!
//! Business state and the action reducer. This module knows nothing about
//! ratatui, crossterm, or how the external `ipfw` binary is invoked.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Side effects (running `ipfw`) are described by [`action::Effect`] values
//! and executed by the caller, which keeps every state transition testable.
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all session state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: TOML configuration loading and resolution

pub mod action;
pub mod config;
pub mod state;
