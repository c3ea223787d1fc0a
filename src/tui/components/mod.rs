//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `EmailInput`: the contact form field rendered as a styled line
//!
//! ### Stateful Components
//!
//! - `ContentView`: scrollable viewport over the current screen's body text.
//!   Its `ContentViewState` persists in `TuiState` across frames.

pub mod content_view;
pub mod email_input;

pub use content_view::{ContentView, ContentViewState};
pub use email_input::EmailInput;
