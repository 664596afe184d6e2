//! # Core Application Logic
//!
//! This module contains Atlas's business logic.
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
//!                    │  • Navigation (shell)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │ countries  │
//!            │  Adapter   │            │  (client)  │
//!            │ (ratatui)  │            │ (reqwest)  │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and the Home list's view state machine
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`navigation`]: Tabs and the screen stack
//! - [`config`]: Settings file and override resolution

pub mod action;
pub mod config;
pub mod navigation;
pub mod state;
