//! Textual type descriptors with array dimensions

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use super::primitive::PrimitiveKind;
use crate::error::{Result, UtilError};

const IDENT: &str = r"[A-Za-z_$][A-Za-z0-9_$]*";

static PATTERN: OnceLock<Regex> = OnceLock::new();

/// Compiled descriptor grammar, built on first use
///
/// Either a binary form (`[[I`, `[Ljava.lang.String;`) or a source form
/// (`int[][]`, `java.lang.String[]`, `std::string::String`).
fn pattern() -> Result<&'static Regex> {
    if let Some(re) = PATTERN.get() {
        return Ok(re);
    }
    let source = format!(
        r"^(?:(?P<dims>\[+)(?:(?P<prim>[ZBCSIJFD])|L(?P<class>{id}(?:\.{id})*);)|(?P<name>{id}(?:(?:\.|::){id})*)(?P<suffix>(?:\[\])*))$",
        id = IDENT
    );
    let re = Regex::new(&source).map_err(|e| UtilError::custom(format!("descriptor pattern: {e}")))?;
    Ok(PATTERN.get_or_init(|| re))
}

/// A component type name plus an array dimension count
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    component: String,
    dimensions: usize,
}

impl TypeDescriptor {
    /// Descriptor for `component` with `dimensions` array levels
    pub fn new(component: impl Into<String>, dimensions: usize) -> Self {
        TypeDescriptor {
            component: component.into(),
            dimensions,
        }
    }

    /// Parse a source-form or binary-form descriptor
    ///
    /// Whitespace is ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use commons_util::types::{PrimitiveKind, TypeDescriptor};
    ///
    /// let d = TypeDescriptor::parse("[[I").unwrap();
    /// assert_eq!(d.canonical_name(), "int[][]");
    /// assert_eq!(d.primitive(), Some(PrimitiveKind::Int));
    ///
    /// let d = TypeDescriptor::parse("java.lang.String[]").unwrap();
    /// assert_eq!(d.binary_name(), "[Ljava.lang.String;");
    ///
    /// assert!(TypeDescriptor::parse("int[").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let rejected = || {
            debug!(descriptor = text, "rejected type descriptor");
            UtilError::InvalidTypeDescriptor(text.to_string())
        };

        let caps = pattern()?.captures(&compact).ok_or_else(rejected)?;

        let descriptor = if let Some(dims) = caps.name("dims") {
            let component = match (caps.name("prim"), caps.name("class")) {
                (Some(prim), _) => prim
                    .as_str()
                    .chars()
                    .next()
                    .and_then(|c| PrimitiveKind::from_descriptor(c).ok())
                    .map(|kind| kind.name().to_string())
                    .ok_or_else(rejected)?,
                (None, Some(class)) => class.as_str().to_string(),
                (None, None) => return Err(rejected()),
            };
            TypeDescriptor::new(component, dims.as_str().len())
        } else {
            let name = caps.name("name").ok_or_else(rejected)?.as_str();
            let suffix = caps.name("suffix").map_or(0, |m| m.as_str().len());
            TypeDescriptor::new(name, suffix / 2)
        };

        if descriptor.dimensions > 0 && descriptor.primitive() == Some(PrimitiveKind::Void) {
            return Err(rejected());
        }
        Ok(descriptor)
    }

    /// Element type name with all array levels removed
    pub fn component(&self) -> &str {
        &self.component
    }

    /// Number of array levels
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// `true` when there is at least one array level
    pub fn is_array(&self) -> bool {
        self.dimensions > 0
    }

    /// The primitive kind of the component, if it names one
    pub fn primitive(&self) -> Option<PrimitiveKind> {
        PrimitiveKind::from_name(&self.component).ok()
    }

    /// Source form: `int[][]`
    pub fn canonical_name(&self) -> String {
        format!("{}{}", self.component, "[]".repeat(self.dimensions))
    }

    /// Binary form: `[[I`, `[Ljava.lang.String;`; non-arrays keep their name
    pub fn binary_name(&self) -> String {
        if self.dimensions == 0 {
            return self.component.clone();
        }
        let element = match self.primitive() {
            Some(kind) => kind.descriptor().to_string(),
            None => format!("L{};", self.component),
        };
        format!("{}{}", "[".repeat(self.dimensions), element)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}

impl FromStr for TypeDescriptor {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
