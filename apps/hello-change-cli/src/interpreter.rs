//! # Interpreter
//!
//! Reads command lines, runs them against a shared [`CashRegister`], and
//! writes one reply per command.
//!
//! ## Command → Register → Reply
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command            Register call             Reply                     │
//! │  ───────            ─────────────             ─────                     │
//! │  show ────────────► contents() ─────────────► "$68 1 2 3 4 5"           │
//! │  put  a b c d e ──► add(cash) ─────┬────────► new contents              │
//! │                                    └─ Err ──► "Sorry: ..." + contents   │
//! │  take a b c d e ──► remove(cash) ──┬────────► new contents              │
//! │                                    └─ Err ──► "Sorry: ..." + contents   │
//! │  change n ────────► change(n) ─────┬────────► change handed out         │
//! │                                    └─ None ─► "sorry"                   │
//! │  quit ────────────────────────────────────► "Bye" (stop)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bad input never stops the loop; only `quit` or end of input does.

use std::io;
use std::ops::ControlFlow;
use std::sync::Arc;

use hello_change_core::{CashRegister, ChangeStrategy, CoreError, DpChangeStrategy};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::command::Command;

/// Printed when `change` has no solution.
pub const NO_CHANGE_REPLY: &str = "sorry";

/// Printed on `quit`.
pub const QUIT_REPLY: &str = "Bye";

/// Text to print for one command, and whether to keep reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub flow: ControlFlow<()>,
}

impl Reply {
    fn carry_on(text: impl Into<String>) -> Self {
        Reply {
            text: text.into(),
            flow: ControlFlow::Continue(()),
        }
    }

    fn stop(text: impl Into<String>) -> Self {
        Reply {
            text: text.into(),
            flow: ControlFlow::Break(()),
        }
    }
}

/// Line interpreter bound to one register.
#[derive(Debug)]
pub struct Interpreter<S = DpChangeStrategy> {
    register: Arc<CashRegister<S>>,
}

impl<S: ChangeStrategy> Interpreter<S> {
    /// Creates an interpreter driving `register`.
    pub fn new(register: Arc<CashRegister<S>>) -> Self {
        Interpreter { register }
    }

    /// The register this interpreter drives.
    pub fn register(&self) -> &CashRegister<S> {
        &self.register
    }

    /// Runs one command against the register.
    pub fn execute(&self, command: Command) -> Reply {
        debug!(?command, "executing command");

        match command {
            Command::Show => Reply::carry_on(self.register.contents().to_string()),
            Command::Put(cash) => match self.register.add(&cash) {
                Ok(contents) => Reply::carry_on(contents.to_string()),
                Err(err) => self.rejected("put", &err),
            },
            Command::Take(cash) => match self.register.remove(&cash) {
                Ok(contents) => Reply::carry_on(contents.to_string()),
                Err(err) => self.rejected("take", &err),
            },
            Command::Change(amount) => match self.register.change(amount) {
                Ok(Some(change)) => Reply::carry_on(change.to_string()),
                Ok(None) => Reply::carry_on(NO_CHANGE_REPLY),
                Err(err) => {
                    debug!(%err, "change rejected");
                    Reply::carry_on(format!("Sorry: {err}"))
                }
            },
            Command::Quit => Reply::stop(QUIT_REPLY),
        }
    }

    fn rejected(&self, command: &'static str, err: &CoreError) -> Reply {
        debug!(command, %err, "register rejected command");
        Reply::carry_on(format!("Sorry: {err}\n{}", self.register.contents()))
    }

    /// Parses and runs one input line. Blank lines produce no reply.
    pub fn handle_line(&self, line: &str) -> Option<Reply> {
        match Command::parse(line) {
            Ok(Some(command)) => Some(self.execute(command)),
            Ok(None) => None,
            Err(err) => {
                debug!(%err, line, "rejected command line");
                Some(Reply::carry_on(err.to_string()))
            }
        }
    }

    /// Prints `banner`, then serves commands from `input` until `quit` or end
    /// of input.
    pub async fn run<R, W>(&self, input: R, mut output: W, banner: &str) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        write_line(&mut output, banner).await?;

        let mut lines = input.lines();
        let mut served: u64 = 0;
        while let Some(line) = lines.next_line().await? {
            let Some(reply) = self.handle_line(&line) else {
                continue;
            };
            served += 1;

            write_line(&mut output, &reply.text).await?;
            if reply.flow.is_break() {
                info!(served, "quit requested");
                output.flush().await?;
                return Ok(());
            }
        }

        warn!(served, "input closed without quit");
        output.flush().await
    }
}

async fn write_line<W>(output: &mut W, text: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}
