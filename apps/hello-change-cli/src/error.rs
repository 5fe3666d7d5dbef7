//! # Argument Errors
//!
//! What the interpreter prints when a command line cannot be executed.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Interpreter                        │
//! │                                                                         │
//! │  "put 1 x 3 4 5"                                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Command::parse ─── ArgsError::CashNotInteger ──► printed verbatim      │
//! │         │                                         (loop continues)      │
//! │         ▼                                                               │
//! │  CashRegister::remove ─── CoreError::InsufficientFunds                  │
//! │         │                  └──► "Sorry: ..." + current contents         │
//! │         ▼                                                               │
//! │  CashRegister::change ─── Ok(None) ──► "sorry"                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `Display` text of every variant is the exact line shown to the user.

use hello_change_core::CoreError;
use thiserror::Error;

use crate::command::SUPPORTED_COMMANDS;

/// A command line that could not be turned into a [`Command`](crate::Command).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    /// First token is not a known command name.
    #[error(
        "Unsupported command: [{name}]. Please use one of the supported commands [{}]",
        SUPPORTED_COMMANDS.join(", ")
    )]
    UnsupportedCommand { name: String },

    /// Cash command with the wrong number of arguments.
    #[error("Command [{command}] expects {expected} non-negative integer arguments as cash definition.")]
    CashArity { command: String, expected: usize },

    /// Cash argument that is not an integer.
    #[error(
        "Command [{command}] expects {expected} non-negative integer arguments as cash definition: cannot parse [{token}] to integer."
    )]
    CashNotInteger {
        command: String,
        expected: usize,
        token: String,
    },

    /// Cash argument below zero.
    #[error(
        "Command [{command}] expects {expected} non-negative integer arguments as cash definition: argument [{token}] is negative."
    )]
    CashNegative {
        command: String,
        expected: usize,
        token: String,
    },

    /// Change command with the wrong number of arguments.
    #[error("Command [{command}] expects non-negative integer argument as change amount.")]
    AmountArity { command: String },

    /// Change amount that is not an integer.
    #[error(
        "Command [{command}] expects non-negative integer argument as change amount: cannot parse [{token}] to integer."
    )]
    AmountNotInteger { command: String, token: String },

    /// Change amount below zero.
    #[error(
        "Command [{command}] expects non-negative integer argument as change amount: argument [{token}] is negative."
    )]
    AmountNegative { command: String, token: String },

    /// Rejected by the core after parsing.
    #[error(transparent)]
    Core(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_command_lists_commands() {
        let err = ArgsError::UnsupportedCommand {
            name: "pay".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unsupported command: [pay]. Please use one of the supported commands [change, put, quit, show, take]"
        );
    }

    #[test]
    fn test_cash_messages() {
        let err = ArgsError::CashNegative {
            command: "put".to_string(),
            expected: 5,
            token: "-1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Command [put] expects 5 non-negative integer arguments as cash definition: argument [-1] is negative."
        );
    }
}
