//! Whole-document rendering.

use std::io::{self, Write};

use renmap_common::ClassMapping;

use crate::json_printer::MappingJsonPrinter;
use crate::visitor::accept;

/// Render a full mapping document: the class-entry sequence wrapped in the
/// enclosing object. Returns the sink so callers can flush or reclaim it.
///
/// An empty table renders as a bare `{}` pair.
pub fn write_document<W: Write>(out: W, classes: &[ClassMapping]) -> io::Result<W> {
    let _span = tracing::trace_span!("write_document", classes = classes.len()).entered();

    let mut out = out;
    writeln!(out, "{{")?;

    let mut printer = MappingJsonPrinter::new(out);
    accept(classes, &mut printer)?;
    let mut out = printer.into_inner();

    // The last class entry is left unterminated by the printer.
    if !classes.is_empty() {
        writeln!(out)?;
    }
    writeln!(out, "}}")?;
    Ok(out)
}
