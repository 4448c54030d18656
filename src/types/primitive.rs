//! Primitive kinds, their names and the widening rules between them

use std::any::TypeId;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, UtilError};

/// The primitive types, plus `void`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    /// `boolean`, Rust `bool`
    Boolean,
    /// `byte`, Rust `i8`
    Byte,
    /// `char`, a UTF-16 code unit; Rust `char` maps here too
    Char,
    /// `short`, Rust `i16`
    Short,
    /// `int`, Rust `i32`
    Int,
    /// `long`, Rust `i64`
    Long,
    /// `float`, Rust `f32`
    Float,
    /// `double`, Rust `f64`
    Double,
    /// `void`, Rust `()`
    Void,
}

use PrimitiveKind::*;

const ALL: [PrimitiveKind; 9] = [Boolean, Byte, Char, Short, Int, Long, Float, Double, Void];

impl PrimitiveKind {
    /// Every kind, `Void` last
    pub fn all() -> &'static [PrimitiveKind] {
        &ALL
    }

    /// Keyword name (`"int"`)
    pub fn name(&self) -> &'static str {
        match self {
            Boolean => "boolean",
            Byte => "byte",
            Char => "char",
            Short => "short",
            Int => "int",
            Long => "long",
            Float => "float",
            Double => "double",
            Void => "void",
        }
    }

    /// Boxed wrapper name (`"Integer"`)
    pub fn wrapper_name(&self) -> &'static str {
        match self {
            Boolean => "Boolean",
            Byte => "Byte",
            Char => "Character",
            Short => "Short",
            Int => "Integer",
            Long => "Long",
            Float => "Float",
            Double => "Double",
            Void => "Void",
        }
    }

    /// The Rust type of the same width (`"i32"`)
    pub fn rust_name(&self) -> &'static str {
        match self {
            Boolean => "bool",
            Byte => "i8",
            Char => "char",
            Short => "i16",
            Int => "i32",
            Long => "i64",
            Float => "f32",
            Double => "f64",
            Void => "()",
        }
    }

    /// Single-letter binary descriptor (`'I'`)
    pub fn descriptor(&self) -> char {
        match self {
            Boolean => 'Z',
            Byte => 'B',
            Char => 'C',
            Short => 'S',
            Int => 'I',
            Long => 'J',
            Float => 'F',
            Double => 'D',
            Void => 'V',
        }
    }

    fn find(pred: impl Fn(&PrimitiveKind) -> bool, text: &str) -> Result<Self> {
        ALL.iter()
            .copied()
            .find(|kind| pred(kind))
            .ok_or_else(|| UtilError::UnknownPrimitive(text.to_string()))
    }

    /// Look up by keyword name
    pub fn from_name(name: &str) -> Result<Self> {
        Self::find(|k| k.name() == name, name)
    }

    /// Look up by wrapper name; a qualified `java.lang.` prefix is accepted
    pub fn from_wrapper_name(name: &str) -> Result<Self> {
        let simple = name.strip_prefix("java.lang.").unwrap_or(name);
        Self::find(|k| k.wrapper_name() == simple, name)
    }

    /// Look up by Rust type name
    pub fn from_rust_name(name: &str) -> Result<Self> {
        Self::find(|k| k.rust_name() == name, name)
    }

    /// Look up by binary descriptor letter
    pub fn from_descriptor(descriptor: char) -> Result<Self> {
        Self::find(|k| k.descriptor() == descriptor, &descriptor.to_string())
    }

    /// The kind backing the Rust type `T`, if it is one of the primitives
    ///
    /// # Example
    ///
    /// ```rust
    /// use commons_util::types::PrimitiveKind;
    ///
    /// assert_eq!(PrimitiveKind::of::<i64>(), Some(PrimitiveKind::Long));
    /// assert_eq!(PrimitiveKind::of::<String>(), None);
    /// ```
    pub fn of<T: ?Sized + 'static>() -> Option<Self> {
        let id = TypeId::of::<T>();
        let table = [
            (TypeId::of::<bool>(), Boolean),
            (TypeId::of::<i8>(), Byte),
            (TypeId::of::<char>(), Char),
            (TypeId::of::<i16>(), Short),
            (TypeId::of::<i32>(), Int),
            (TypeId::of::<i64>(), Long),
            (TypeId::of::<f32>(), Float),
            (TypeId::of::<f64>(), Double),
            (TypeId::of::<()>(), Void),
        ];
        table.into_iter().find(|(t, _)| *t == id).map(|(_, kind)| kind)
    }

    /// `true` for the integer and floating-point kinds
    pub fn is_numeric(&self) -> bool {
        matches!(self, Byte | Short | Int | Long | Float | Double)
    }

    /// `true` if a value of this kind converts to `target` without an
    /// explicit cast, excluding identity
    ///
    /// # Example
    ///
    /// ```rust
    /// use commons_util::types::PrimitiveKind;
    ///
    /// assert!(PrimitiveKind::Int.widens_to(PrimitiveKind::Double));
    /// assert!(PrimitiveKind::Char.widens_to(PrimitiveKind::Int));
    /// assert!(!PrimitiveKind::Char.widens_to(PrimitiveKind::Short));
    /// assert!(!PrimitiveKind::Long.widens_to(PrimitiveKind::Int));
    /// ```
    pub fn widens_to(&self, target: PrimitiveKind) -> bool {
        let wider: &[PrimitiveKind] = match self {
            Byte => &[Short, Int, Long, Float, Double],
            Short | Char => &[Int, Long, Float, Double],
            Int => &[Long, Float, Double],
            Long => &[Float, Double],
            Float => &[Double],
            Boolean | Double | Void => &[],
        };
        wider.contains(&target)
    }
}

/// `true` if a `from` value may be assigned to a `to` slot: identity or a
/// widening conversion
pub fn is_assignable(from: PrimitiveKind, to: PrimitiveKind) -> bool {
    from == to || from.widens_to(to)
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrimitiveKind {
    type Err = UtilError;

    /// Accepts the keyword, wrapper or Rust name
    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
            .or_else(|_| Self::from_wrapper_name(s))
            .or_else(|_| Self::from_rust_name(s))
    }
}
