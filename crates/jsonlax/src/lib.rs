//! A tokenizer, parser, and serializer for a relaxed JSON dialect.
//!
//! The dialect accepts standard JSON plus the looser habits of hand-written
//! documents: `//` and `/* */` comments, single-quoted strings, bare
//! identifier keys, case-insensitive keywords, leading signs and dot-led
//! numbers, trailing commas in both containers, and omitted commas between
//! array elements. Output is always compact standard JSON.
//!
//! Parsing never panics and allocates only for the value tree; failures come
//! back as a [`ParseError`] carrying an error code, the line and column of
//! the failure, and the token kinds the grammar would have accepted there.
//!
//! ```
//! use jsonlax::{parse, stringify};
//!
//! let value = parse(
//!     "{
//!         // configuration
//!         name: 'demo',
//!         retries: +3,
//!         flags: [true false],
//!     }",
//! )?;
//! assert_eq!(
//!     stringify(&value),
//!     r#"{"name":"demo", "retries":3, "flags":[true, false]}"#
//! );
//! # Ok::<(), jsonlax::ParseError>(())
//! ```
//!
//! The crate is `no_std` and needs only `alloc`.

#![no_std]
#![allow(missing_docs)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod lexer;
mod parser;
mod ser;
mod table;
#[cfg(test)]
mod tests;
mod token;
mod value;

pub use lexer::{LexError, Lexer};
pub use parser::{parse, ParseError, ParseErrorCode};
pub use ser::stringify;
pub use table::{Entries, Table};
pub use token::{Token, TokenKind};
pub use value::{Value, ValueKind};
