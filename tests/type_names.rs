//! Primitive kinds, type names and descriptors
//!
//! Run: cargo test --test type_names

use commons_util::types::{self, is_assignable};
use commons_util::{PrimitiveKind, TypeDescriptor, UtilError};
use pretty_assertions::assert_eq;

#[test]
fn test_widening_matrix() {
    use PrimitiveKind::*;

    let numeric = [Byte, Short, Char, Int, Long, Float, Double];
    let expected_targets = [
        (Byte, vec![Short, Int, Long, Float, Double]),
        (Short, vec![Int, Long, Float, Double]),
        (Char, vec![Int, Long, Float, Double]),
        (Int, vec![Long, Float, Double]),
        (Long, vec![Float, Double]),
        (Float, vec![Double]),
        (Double, vec![]),
    ];

    for (from, targets) in expected_targets {
        let actual: Vec<PrimitiveKind> = numeric.iter().copied().filter(|to| from.widens_to(*to)).collect();
        assert_eq!(actual, targets, "widening targets of {}", from);
        assert!(is_assignable(from, from));
    }

    assert!(!is_assignable(Boolean, Int));
    assert!(is_assignable(Void, Void));
}

#[test]
fn test_rust_types_map_to_kinds() {
    assert_eq!(PrimitiveKind::of::<i8>(), Some(PrimitiveKind::Byte));
    assert_eq!(PrimitiveKind::of::<f32>(), Some(PrimitiveKind::Float));
    assert_eq!(PrimitiveKind::of::<Vec<i32>>(), None);

    for kind in PrimitiveKind::all() {
        let parsed: PrimitiveKind = kind.rust_name().parse().unwrap();
        assert_eq!(parsed, *kind);
    }
}

#[test]
fn test_short_and_package_names() {
    let cases = [
        ("java.lang.String", "String", "java.lang"),
        ("java.util.Map$Entry", "Map.Entry", "java.util"),
        ("[Ljava.lang.String;", "String[]", "java.lang"),
        ("[[D", "double[][]", ""),
        ("std::collections::HashMap<K, V>", "HashMap<K, V>", "std::collections"),
        ("Plain", "Plain", ""),
    ];

    for (path, short, package) in cases {
        assert_eq!(types::short_name(path), short, "short name of {}", path);
        assert_eq!(types::package_name(path), package, "package name of {}", path);
    }
}

#[test]
fn test_rust_type_names() {
    assert_eq!(types::short_type_name::<String>(), "String");
    assert_eq!(types::short_type_name::<TypeDescriptor>(), "TypeDescriptor");
    assert!(types::package_name_of::<TypeDescriptor>().starts_with("commons_util::types"));
}

#[test]
fn test_descriptor_forms() {
    let cases = [
        ("int[][]", "int", 2, "[[I"),
        ("[[I", "int", 2, "[[I"),
        ("[Ljava.lang.String;", "java.lang.String", 1, "[Ljava.lang.String;"),
        ("java.lang.String[]", "java.lang.String", 1, "[Ljava.lang.String;"),
        ("char", "char", 0, "char"),
    ];

    for (text, component, dimensions, binary) in cases {
        let descriptor = TypeDescriptor::parse(text).unwrap();
        assert_eq!(descriptor.component(), component, "component of {}", text);
        assert_eq!(descriptor.dimensions(), dimensions, "dimensions of {}", text);
        assert_eq!(descriptor.binary_name(), binary, "binary name of {}", text);
    }

    let d = TypeDescriptor::new("long", 3);
    assert_eq!(d.to_string(), "long[][][]");
    assert_eq!(d.primitive(), Some(PrimitiveKind::Long));
}

#[test]
fn test_descriptor_errors() {
    let err = "int[[]".parse::<TypeDescriptor>().unwrap_err();
    assert_eq!(err, UtilError::InvalidTypeDescriptor("int[[]".to_string()));
    assert!(err.is_argument_error());
    assert_eq!(err.to_string(), "Invalid type descriptor: int[[]");
}
