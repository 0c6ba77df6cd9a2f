//! # Core Application Logic
//!
//! This module contains lgbrowse's business logic.
//! It knows nothing about any specific UI technology or cloud SDK.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • BrowserState         │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • fetch_all()          │
//!                    └───────────┬─────────────┘
//!                                │
//!                ┌───────────────┴───────────────┐
//!                ▼                               ▼
//!         ┌────────────┐                  ┌────────────┐
//!         │    TUI     │                  │    AWS     │
//!         │  Adapter   │                  │  Adapter   │
//!         │ (ratatui)  │                  │ (aws-sdk)  │
//!         └────────────┘                  └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`log_group`]: `LogGroupName` and the immutable `LogGroupCollection`
//! - [`filter`]: substring matching and the case policy
//! - [`state`]: `BrowserState`, everything the list view needs
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`fetch`]: the pagination loop and the backend traits it drives
//! - [`config`]: layered configuration
//! - [`error`]: the error taxonomy and exit codes

pub mod action;
pub mod config;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod log_group;
pub mod state;
