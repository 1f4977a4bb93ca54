//! Streaming JSON mapping printer.

use std::io::{self, Write};

use renmap_common::names::external_class_name;
use renmap_common::{ClassMapping, MemberMapping};
use rustc_hash::FxHashSet;

use crate::visitor::MappingVisitor;

/// Prints renamed classes and class members with their old names and new
/// names, as a comma-separated sequence of nested JSON entries.
///
/// The printer emits only the entry sequence; the enclosing object belongs to
/// the caller (see [`crate::document::write_document`]). One printer instance
/// serves one traversal — the separator flag and the per-class member set are
/// not reentrant, so concurrent traversals need independent instances.
///
/// Names are written raw: valid bytecode identifiers cannot contain quote or
/// control characters, so no escaping is performed.
pub struct MappingJsonPrinter<W: Write> {
    out: W,

    // Member names already printed for the currently open class, so
    // overloads sharing one source name are printed once (first wins).
    // Emptiness doubles as the "no members printed yet" flag.
    visited_members: FxHashSet<String>,

    at_least_one_class: bool,
}

impl<W: Write> MappingJsonPrinter<W> {
    /// Create a printer that writes to the given sink.
    pub fn new(out: W) -> Self {
        MappingJsonPrinter {
            out,
            visited_members: FxHashSet::default(),
            at_least_one_class: false,
        }
    }

    /// Consume the printer, handing back the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MappingVisitor for MappingJsonPrinter<W> {
    fn enter_class(&mut self, class: &ClassMapping) -> io::Result<()> {
        if self.at_least_one_class {
            writeln!(self.out, ",")?;
        }

        let original = external_class_name(&class.original);
        let renamed = external_class_name(class.resolved_name());
        tracing::trace!(class = %original, renamed = %renamed, "class entry");

        writeln!(self.out, "  \"{}\": {{", original)?;
        writeln!(self.out, "    \"name\": \"{}\",", renamed)?;
        writeln!(self.out, "    \"members\": {{")?;

        self.visited_members.clear();
        self.at_least_one_class = true;
        Ok(())
    }

    fn visit_member(&mut self, member: &MemberMapping) -> io::Result<()> {
        if self.visited_members.contains(&member.original) {
            // Overloads collapse to one entry; the first visit decided it.
            tracing::trace!(member = %member.original, "duplicate member name skipped");
            return Ok(());
        }

        if !self.visited_members.is_empty() {
            writeln!(self.out, ",")?;
        }
        write!(
            self.out,
            "      \"{}\": \"{}\"",
            member.original,
            member.resolved_name()
        )?;

        self.visited_members.insert(member.original.clone());
        Ok(())
    }

    fn exit_class(&mut self) -> io::Result<()> {
        // The last member line is still unterminated; an empty members block
        // closes directly after its opening line.
        if !self.visited_members.is_empty() {
            writeln!(self.out)?;
        }
        writeln!(self.out, "    }}")?;
        write!(self.out, "  }}")?;
        Ok(())
    }
}
