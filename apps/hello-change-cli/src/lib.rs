//! # hello-change-cli: Line Interpreter for the Cash Register
//!
//! Reads commands from an async line source, runs them against one shared
//! [`CashRegister`](hello_change_core::CashRegister), and writes one reply per
//! command.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            Session Flow                                 │
//! │                                                                         │
//! │  CliConfig::load() ──► seed register ──► print banner                   │
//! │                                              │                          │
//! │                    ┌─────────────────────────▼─────────────────────┐    │
//! │                    │  next line ──► Command::parse ──► execute     │    │
//! │                    │      ▲               │ Err            │        │    │
//! │                    │      │               ▼                ▼        │    │
//! │                    │      └──────── print ArgsError ◄── print reply │    │
//! │                    └──────────────────────────────┬────────────────┘    │
//! │                                                   │ quit / EOF          │
//! │                                                   ▼                     │
//! │                                                 exit                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`command`] - Line grammar and argument validation
//! - [`interpreter`] - Executes commands and drives the read loop
//! - [`config`] - Environment-based startup configuration
//! - [`error`] - User-facing argument errors

pub mod command;
pub mod config;
pub mod error;
pub mod interpreter;

pub use command::Command;
pub use config::{CliConfig, ConfigError};
pub use error::ArgsError;
pub use interpreter::{Interpreter, Reply};
