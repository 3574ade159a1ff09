//! Low-level tokenizer building blocks for swiftfmt.
//!
//! This crate provides a standalone character scanner with **zero workspace
//! dependencies**. It is designed to be reusable by external tools (editor
//! extensions, syntax highlighters) without pulling in the token model or the
//! formatting engine.
//!
//! # Architecture
//!
//! swiftfmt's lexer is split into two layers:
//!
//! - **`swiftfmt_lexer_core`** (this crate): a restartable [`Cursor`] over
//!   Unicode scalars plus the explicit scalar-range classification tables in
//!   [`scalars`]. No tokens, no scopes, no diagnostics.
//! - **`swiftfmt_lexer`**: recognizers and the scope-aware tokenizer driver
//!   built on top of the cursor.
//!
//! # Checkpointing
//!
//! [`Cursor`] is [`Copy`]: a recognizer that may need to back out of a
//! partial match snapshots the cursor by value and restores it on failure.
//!
//! ```
//! use swiftfmt_lexer_core::Cursor;
//!
//! let mut cursor = Cursor::new("0x_");
//! let checkpoint = cursor;
//! cursor.advance();
//! cursor.advance();
//! // "0x" with no digit: back out
//! cursor = checkpoint;
//! assert_eq!(cursor.peek(), Some('0'));
//! ```

mod cursor;
pub mod scalars;

pub use cursor::Cursor;
