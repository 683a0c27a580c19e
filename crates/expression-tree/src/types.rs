//! Descriptors attached to expression nodes: types, members, methods, labels,
//! and constant values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A type descriptor. Only the display name is modeled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef {
    pub name: String,
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn void() -> Self {
        Self::new("Void")
    }

    pub fn is_void(&self) -> bool {
        self.name == "Void"
    }
}

impl From<&str> for TypeRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TypeRef {
    fn from(value: String) -> Self {
        Self { name: value }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// What kind of member a [`MemberRef`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberKind {
    Field,
    Property,
    Method,
    Constructor,
    Event,
}

impl MemberKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MemberKind::Field => "Field",
            MemberKind::Property => "Property",
            MemberKind::Method => "Method",
            MemberKind::Constructor => "Constructor",
            MemberKind::Event => "Event",
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field, property, or other member, with the type that declares it.
///
/// `declaring_type` is absent for members that live outside any type
/// (module-level functions and the like).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaring_type: Option<TypeRef>,
    pub name: String,
    pub member_kind: MemberKind,
}

impl MemberRef {
    pub fn new(declaring_type: impl Into<TypeRef>, name: impl Into<String>, member_kind: MemberKind) -> Self {
        Self {
            declaring_type: Some(declaring_type.into()),
            name: name.into(),
            member_kind,
        }
    }

    pub fn property(declaring_type: impl Into<TypeRef>, name: impl Into<String>) -> Self {
        Self::new(declaring_type, name, MemberKind::Property)
    }

    pub fn field(declaring_type: impl Into<TypeRef>, name: impl Into<String>) -> Self {
        Self::new(declaring_type, name, MemberKind::Field)
    }
}

/// A method, constructor, or operator implementation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaring_type: Option<TypeRef>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeRef>,
}

impl MethodRef {
    pub fn new(declaring_type: impl Into<TypeRef>, name: impl Into<String>) -> Self {
        Self {
            declaring_type: Some(declaring_type.into()),
            name: name.into(),
            return_type: None,
        }
    }

    pub fn returning(mut self, return_type: impl Into<TypeRef>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }
}

/// Jump target used by goto, label, and loop nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LabelTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeRef>,
}

impl LabelTarget {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ty: None,
        }
    }

    pub fn with_type(mut self, ty: impl Into<TypeRef>) -> Self {
        self.ty = Some(ty.into());
        self
    }
}

/// Source document referenced by debug-info nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolDocument {
    pub file_name: String,
}

/// Literal carried by a constant node.
///
/// `Display` quotes and escapes text values so a rendered constant always
/// stays on one line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConstantValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Char(char),
    String(String),
    /// A value of some other runtime type, already rendered to text.
    Other { type_name: String, text: String },
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Null => f.write_str("null"),
            ConstantValue::Bool(b) => write!(f, "{b}"),
            ConstantValue::Int(i) => write!(f, "{i}"),
            ConstantValue::Float(x) => write!(f, "{x:?}"),
            ConstantValue::Char(c) => write!(f, "{c:?}"),
            ConstantValue::String(s) => write!(f, "{s:?}"),
            ConstantValue::Other { type_name, text } => {
                write!(f, "{} ({})", text.escape_debug(), type_name.escape_debug())
            }
        }
    }
}

/// Control-flow flavour of a goto node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GotoKind {
    Goto,
    Return,
    Break,
    Continue,
}

impl fmt::Display for GotoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GotoKind::Goto => "Goto",
            GotoKind::Return => "Return",
            GotoKind::Break => "Break",
            GotoKind::Continue => "Continue",
        };
        f.write_str(name)
    }
}
