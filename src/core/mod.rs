//! # Core Application Logic
//!
//! This module contains ocnav's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. No terminal.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum, named-action table and `update()` reducer
//! - [`catalog`]: The immutable menu tree
//! - [`nav`]: Stack-based menu navigation
//! - [`exec`]: The subprocess boundary (the one blocking call in the app)
//! - [`history`]: Append-only command history with persistence
//! - [`status`]: Baseline/overlay status line with generation-counted flashes
//! - [`config`]: TOML configuration

pub mod action;
pub mod catalog;
pub mod config;
pub mod exec;
pub mod history;
pub mod nav;
pub mod state;
pub mod status;
