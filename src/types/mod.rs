//! Type introspection helpers
//!
//! Primitive kinds with their names and widening rules, short and package
//! names of type paths, and array-aware type descriptors.

pub mod descriptor;
pub mod names;
pub mod primitive;

pub use descriptor::TypeDescriptor;
pub use names::{package_name, package_name_of, short_name, short_type_name};
pub use primitive::{is_assignable, PrimitiveKind};
