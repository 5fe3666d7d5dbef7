//! # hello-change-core: Pure Business Logic for Hello Change
//!
//! This crate is the **heart** of the cash register. It models the bills in
//! the drawer, decides which bills to hand out as change, and guards the
//! drawer against concurrent updates. It does no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Hello Change Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 hello-change-cli (line interpreter)             │   │
//! │  │      show ──► put ──► take ──► change ──► quit                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ hello-change-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │  ┌──────────────┐ ┌──────────┐ ┌──────────────┐ ┌────────────┐ │   │
//! │  │  │ denomination │ │   cash   │ │    change    │ │  register  │ │   │
//! │  │  │ $1 .. $20    │ │   Cash   │ │   Solution   │ │CashRegister│ │   │
//! │  │  │              │ │          │ │ DpChange...  │ │  (ArcSwap) │ │   │
//! │  │  └──────────────┘ └──────────┘ └──────────────┘ └────────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • IMMUTABLE VALUES • ONE SHARED, LOCK-FREE REGISTER    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`denomination`] - The fixed set of bill face values
//! - [`cash`] - Immutable bill counts with exact arithmetic
//! - [`change`] - Fewest-bills change under bounded supply
//! - [`register`] - Shared register with compare-and-swap transitions
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use hello_change_core::{Cash, CashRegister};
//!
//! let register = CashRegister::with_contents(Cash::from_descending_counts([0, 1, 0, 4, 0]).unwrap());
//!
//! // Greedy would grab the $10 first and get stuck; the register pays in twos
//! let change = register.change(8).unwrap().unwrap();
//! assert_eq!(change.to_string(), "$8 0 0 0 4 0");
//! assert_eq!(register.contents().to_string(), "$10 0 1 0 0 0");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cash;
pub mod change;
pub mod denomination;
pub mod error;
pub mod register;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cash::Cash;
pub use change::{ChangeStrategy, DpChangeStrategy, Solution};
pub use denomination::Denomination;
pub use error::{CoreError, CoreResult};
pub use register::CashRegister;
