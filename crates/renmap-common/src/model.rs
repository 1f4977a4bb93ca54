//! Immutable rename-table records.
//!
//! A [`RenameTable`] is the document root of the JSON input format: a list of
//! classes, each carrying its renamed fields and methods. Records are plain
//! data — name resolution already happened upstream, so a `renamed` of `None`
//! means the entity kept its original name.

use serde::{Deserialize, Serialize};

/// Document root of the rename-table input format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenameTable {
    /// Classes in traversal order.
    #[serde(default)]
    pub classes: Vec<ClassMapping>,
}

/// One class and its renamed members.
///
/// `original` and `renamed` are internal (slash-separated) class names;
/// conversion to the external dot-separated form happens at emission time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassMapping {
    pub original: String,

    /// Replacement name, absent when the class kept its original name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renamed: Option<String>,

    /// Fields are visited before methods.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<MemberMapping>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MemberMapping>,
}

/// One field or method of the enclosing class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberMapping {
    pub original: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renamed: Option<String>,
}

impl ClassMapping {
    /// The internal name this class maps to: the replacement when present,
    /// the original otherwise.
    pub fn resolved_name(&self) -> &str {
        self.renamed.as_deref().unwrap_or(&self.original)
    }
}

impl MemberMapping {
    /// The name this member maps to: the replacement when present, the
    /// original otherwise.
    pub fn resolved_name(&self) -> &str {
        self.renamed.as_deref().unwrap_or(&self.original)
    }
}
