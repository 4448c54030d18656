//! Short and package names of type paths
//!
//! Paths may use `::` (Rust) or `.` (JVM style) separators. Generic
//! arguments are kept on the short name and never searched for separators;
//! `$` in nested names is shown as `.`; binary array descriptors such as
//! `[Ljava.lang.String;` are normalized to `String[]` first.

use super::descriptor::TypeDescriptor;

/// Split `path` into the part before any generic arguments and the rest
fn split_generics(path: &str) -> (&str, &str) {
    match path.find('<') {
        Some(pos) => path.split_at(pos),
        None => (path, ""),
    }
}

/// Position and width of the last `::` or `.` separator
fn last_separator(base: &str) -> Option<(usize, usize)> {
    let colons = base.rfind("::").map(|pos| (pos, 2));
    let dot = base.rfind('.').map(|pos| (pos, 1));
    match (colons, dot) {
        (Some(c), Some(d)) => Some(if c.0 > d.0 { c } else { d }),
        (c, d) => c.or(d),
    }
}

/// Canonical form of a binary array descriptor, or the path itself
fn normalize(path: &str) -> String {
    let path = path.trim();
    if path.starts_with('[') {
        if let Ok(descriptor) = TypeDescriptor::parse(path) {
            return descriptor.canonical_name();
        }
    }
    path.to_string()
}

/// The last segment of a type path
///
/// # Arguments
///
/// * `path` - A `::`- or `.`-separated type path, possibly generic or an
///   array descriptor
///
/// # Returns
///
/// The unqualified name; `""` for an empty path
///
/// # Example
///
/// ```rust
/// use commons_util::types::short_name;
///
/// assert_eq!(short_name("std::collections::HashMap<String, i32>"), "HashMap<String, i32>");
/// assert_eq!(short_name("java.util.Map$Entry"), "Map.Entry");
/// assert_eq!(short_name("[Ljava.lang.String;"), "String[]");
/// ```
pub fn short_name(path: &str) -> String {
    let path = normalize(path);
    let (base, generics) = split_generics(&path);
    let simple = match last_separator(base) {
        Some((pos, width)) => &base[pos + width..],
        None => base,
    };
    format!("{}{}", simple.replace('$', "."), generics)
}

/// Everything before the last segment of a type path
///
/// # Example
///
/// ```rust
/// use commons_util::types::package_name;
///
/// assert_eq!(package_name("java.lang.String"), "java.lang");
/// assert_eq!(package_name("std::vec::Vec<std::string::String>"), "std::vec");
/// assert_eq!(package_name("[[Ljava.util.List;"), "java.util");
/// assert_eq!(package_name("i32"), "");
/// ```
pub fn package_name(path: &str) -> String {
    let path = normalize(path);
    let (base, _) = split_generics(&path);
    let base = base.trim_end_matches("[]");
    match last_separator(base) {
        Some((pos, _)) => base[..pos].to_string(),
        None => String::new(),
    }
}

/// [`short_name`] of the Rust type `T`
///
/// The underlying [`std::any::type_name`] text is best-effort, so the
/// result is meant for display and diagnostics.
pub fn short_type_name<T: ?Sized>() -> String {
    short_name(std::any::type_name::<T>())
}

/// [`package_name`] of the Rust type `T`
pub fn package_name_of<T: ?Sized>() -> String {
    package_name(std::any::type_name::<T>())
}
