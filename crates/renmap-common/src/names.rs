//! Internal/external class-name conversion.
//!
//! Rename tables store class names in their internal, slash-separated form
//! (`com/example/Foo`); rendered mappings use the external dot-separated form
//! (`com.example.Foo`). Member names have no package part and never convert.

use std::borrow::Cow;

use memchr::memchr;

/// Package separator in internal class names.
pub const INTERNAL_SEPARATOR: u8 = b'/';

/// Package separator in external class names.
pub const EXTERNAL_SEPARATOR: u8 = b'.';

/// Convert an internal class name to its external form.
///
/// Borrows when the name contains no separator (default-package classes).
pub fn external_class_name(internal: &str) -> Cow<'_, str> {
    match memchr(INTERNAL_SEPARATOR, internal.as_bytes()) {
        None => Cow::Borrowed(internal),
        Some(_) => Cow::Owned(internal.replace('/', ".")),
    }
}

/// Convert an external class name back to its internal form.
pub fn internal_class_name(external: &str) -> Cow<'_, str> {
    match memchr(EXTERNAL_SEPARATOR, external.as_bytes()) {
        None => Cow::Borrowed(external),
        Some(_) => Cow::Owned(external.replace('.', "/")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_packages_to_dots() {
        assert_eq!(external_class_name("com/example/Foo"), "com.example.Foo");
    }

    #[test]
    fn default_package_borrows() {
        assert!(matches!(external_class_name("Foo"), Cow::Borrowed("Foo")));
    }

    #[test]
    fn inner_class_marker_is_preserved() {
        assert_eq!(external_class_name("com/example/Foo$Bar"), "com.example.Foo$Bar");
    }

    #[test]
    fn conversion_round_trips() {
        let external = external_class_name("com/example/Foo");
        assert_eq!(internal_class_name(&external), "com/example/Foo");
    }
}
