//! # Commands
//!
//! Turns one input line into a [`Command`].
//!
//! ## Grammar
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  show                     print register contents                       │
//! │  put  <20> <10> <5> <2> <1>   deposit bills                             │
//! │  take <20> <10> <5> <2> <1>   withdraw bills                            │
//! │  change <amount>          hand out change                               │
//! │  quit                     stop                                          │
//! │                                                                         │
//! │  Tokens are separated by any whitespace. Counts are listed largest      │
//! │  bill first, the same order the register prints them in.                │
//! │  Counts and amounts are 32-bit: at most 2147483647.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use hello_change_core::{Cash, Denomination};

use crate::error::ArgsError;

/// Names accepted as the first token, sorted.
pub const SUPPORTED_COMMANDS: [&str; 5] = [CHANGE, PUT, QUIT, SHOW, TAKE];

const CHANGE: &str = "change";
const PUT: &str = "put";
const QUIT: &str = "quit";
const SHOW: &str = "show";
const TAKE: &str = "take";

/// A parsed, validated command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Put(Cash),
    Take(Cash),
    Change(i64),
    Quit,
}

impl Command {
    /// Parses one input line.
    ///
    /// Returns `Ok(None)` for a blank line.
    ///
    /// ## Example
    /// ```rust
    /// use hello_change_cli::Command;
    ///
    /// assert_eq!(Command::parse("  change 13 ").unwrap(), Some(Command::Change(13)));
    /// assert_eq!(Command::parse("   ").unwrap(), None);
    /// assert!(Command::parse("change -1").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Option<Command>, ArgsError> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match name {
            SHOW => Command::Show,
            QUIT => Command::Quit,
            PUT => Command::Put(parse_cash(PUT, &args)?),
            TAKE => Command::Take(parse_cash(TAKE, &args)?),
            CHANGE => Command::Change(parse_amount(CHANGE, &args)?),
            other => {
                return Err(ArgsError::UnsupportedCommand {
                    name: other.to_string(),
                })
            }
        };

        Ok(Some(command))
    }
}

/// Parses five bill counts, largest denomination first.
///
/// Each count must fit in an `i32`, so a single deposit stays far below the
/// register's `u64` capacity. `command` only names the source in error
/// messages.
pub fn parse_cash(command: &str, args: &[&str]) -> Result<Cash, ArgsError> {
    let expected = Denomination::COUNT;
    if args.len() != expected {
        return Err(ArgsError::CashArity {
            command: command.to_string(),
            expected,
        });
    }

    let mut counts = [0i64; Denomination::COUNT];
    for (slot, token) in counts.iter_mut().zip(args) {
        let count: i32 = token.parse().map_err(|_| ArgsError::CashNotInteger {
            command: command.to_string(),
            expected,
            token: token.to_string(),
        })?;
        if count < 0 {
            return Err(ArgsError::CashNegative {
                command: command.to_string(),
                expected,
                token: token.to_string(),
            });
        }
        *slot = i64::from(count);
    }

    Ok(Cash::from_descending_counts(counts)?)
}

fn parse_amount(command: &str, args: &[&str]) -> Result<i64, ArgsError> {
    let [token] = args else {
        return Err(ArgsError::AmountArity {
            command: command.to_string(),
        });
    };

    let amount: i32 = token.parse().map_err(|_| ArgsError::AmountNotInteger {
        command: command.to_string(),
        token: token.to_string(),
    })?;
    if amount < 0 {
        return Err(ArgsError::AmountNegative {
            command: command.to_string(),
            token: token.to_string(),
        });
    }

    Ok(i64::from(amount))
}
