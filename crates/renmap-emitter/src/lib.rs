//! Streaming renderers for rename tables.
//!
//! The emitter walks an already-resolved rename table and prints one nested
//! JSON entry per class, old names mapped to new names:
//!
//! ```text
//!   "com.example.Foo": {
//!     "name": "a.a",
//!     "members": {
//!       "counter": "b"
//!     }
//!   }
//! ```
//!
//! Rendering is a single left-to-right pass streamed to any [`std::io::Write`]
//! sink: separators are placed on the fly, overloaded members collapse to one
//! line, and nothing is buffered.

pub mod document;
pub mod json_printer;
pub mod visitor;

pub use document::write_document;
pub use json_printer::MappingJsonPrinter;
pub use visitor::{MappingVisitor, accept};
