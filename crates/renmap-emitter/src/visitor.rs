//! The visit seam between table traversal and rendering.

use std::io;

use renmap_common::{ClassMapping, MemberMapping};

/// Per-event callbacks for one traversal of a rename table.
///
/// The driver guarantees the event grammar: `enter_class`, then zero or more
/// `visit_member` calls for that class (fields before methods), then exactly
/// one `exit_class`, before the next `enter_class`. The only failure mode is
/// the sink's I/O error; an error aborts the traversal with the current entry
/// left open.
pub trait MappingVisitor {
    fn enter_class(&mut self, class: &ClassMapping) -> io::Result<()>;

    fn visit_member(&mut self, member: &MemberMapping) -> io::Result<()>;

    fn exit_class(&mut self) -> io::Result<()>;
}

/// Drive one traversal: every class in table order, fields before methods.
pub fn accept<V: MappingVisitor>(classes: &[ClassMapping], visitor: &mut V) -> io::Result<()> {
    for class in classes {
        visitor.enter_class(class)?;
        for field in &class.fields {
            visitor.visit_member(field)?;
        }
        for method in &class.methods {
            visitor.visit_member(method)?;
        }
        visitor.exit_class()?;
    }
    Ok(())
}
