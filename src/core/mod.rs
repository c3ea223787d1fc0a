//! # Core Application Logic
//!
//! Screen navigation, CV data and the contact form model.
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
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effects
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │   notify   │
//!           │  Adapter   │              │ (dispatch) │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all navigation state in one place
//! - [`action`]: `Action`, `Effect` and the `update()` reducer
//! - [`catalog`]: Employer/project data and its loader
//! - [`config`]: Layered settings resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod cursor;
pub mod email;
pub mod profile;
pub mod screen;
pub mod state;
