//! Tween API - Command and query interface for canvas operations.
//!
//! This crate defines the typed command language for all Tween operations.
//! Commands represent user intent and are:
//! - Serializable (for recording, scripting and replay)
//! - Intent-based (what to do, not how to do it)
//! - Applied through the same canvas paths as pointer input
//!
//! # Example
//! ```ignore
//! use api::{Command, execute_command};
//!
//! let mut canvas = Canvas::default();
//! let cmd = Command::CreateShape {
//!     position: Vec2::new(100.0, 100.0),
//!     size: Vec2::new(50.0, 50.0),
//!     identifier: None,
//!     fill: None,
//!     stroke: None,
//!     opacity: None,
//! };
//! let result = execute_command(&mut canvas, cmd);
//! ```

mod command;
mod executor;
mod query;
mod target;

pub use command::*;
pub use executor::{execute_command, execute_query};
pub use query::*;
pub use target::*;
