//! Library interface for morsekb.
//!
//! Everything except board bring-up lives here and builds on the host:
//! the Morse table and entry state machine, touch input classification,
//! view rendering, and the session controller.
//!
//! Usage: `cargo test` (host) or `cargo run --release --features embedded`
//! (nRF52840 via probe-rs).
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and links against this library.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod input;
pub mod morse;
pub mod session;
pub mod ui;

pub use error::Error;
pub use input::{InputEvent, Swipe};
pub use morse::{Literal, SessionState, Signal, Text};
pub use session::{Completion, DisplaySurface, Haptics, InputBinding, Pulse, SessionController};
