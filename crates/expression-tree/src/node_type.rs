//! Node type tags.
//!
//! Every [`Expression`](crate::Expression) carries one of these tags next to
//! its structural [`ExpressionKind`](crate::ExpressionKind). The tag says what
//! the node means (`Add` vs `Subtract`); the kind says what it holds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of expression node tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    Add,
    AddChecked,
    And,
    AndAlso,
    ArrayLength,
    ArrayIndex,
    Call,
    Coalesce,
    Conditional,
    Constant,
    Convert,
    ConvertChecked,
    Divide,
    Equal,
    ExclusiveOr,
    GreaterThan,
    GreaterThanOrEqual,
    Invoke,
    Lambda,
    LeftShift,
    LessThan,
    LessThanOrEqual,
    ListInit,
    MemberAccess,
    MemberInit,
    Modulo,
    Multiply,
    MultiplyChecked,
    Negate,
    UnaryPlus,
    NegateChecked,
    New,
    NewArrayInit,
    NewArrayBounds,
    Not,
    NotEqual,
    Or,
    OrElse,
    Parameter,
    Power,
    Quote,
    RightShift,
    Subtract,
    SubtractChecked,
    TypeAs,
    TypeIs,
    Assign,
    Block,
    DebugInfo,
    Decrement,
    Dynamic,
    Default,
    Extension,
    Goto,
    Increment,
    Index,
    Label,
    RuntimeVariables,
    Loop,
    Switch,
    Throw,
    Try,
    Unbox,
    AddAssign,
    AndAssign,
    DivideAssign,
    ExclusiveOrAssign,
    LeftShiftAssign,
    ModuloAssign,
    MultiplyAssign,
    OrAssign,
    PowerAssign,
    RightShiftAssign,
    SubtractAssign,
    AddAssignChecked,
    MultiplyAssignChecked,
    SubtractAssignChecked,
    PreIncrementAssign,
    PreDecrementAssign,
    PostIncrementAssign,
    PostDecrementAssign,
    TypeEqual,
    OnesComplement,
    IsTrue,
    IsFalse,
}

impl NodeType {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::Add => "Add",
            NodeType::AddChecked => "AddChecked",
            NodeType::And => "And",
            NodeType::AndAlso => "AndAlso",
            NodeType::ArrayLength => "ArrayLength",
            NodeType::ArrayIndex => "ArrayIndex",
            NodeType::Call => "Call",
            NodeType::Coalesce => "Coalesce",
            NodeType::Conditional => "Conditional",
            NodeType::Constant => "Constant",
            NodeType::Convert => "Convert",
            NodeType::ConvertChecked => "ConvertChecked",
            NodeType::Divide => "Divide",
            NodeType::Equal => "Equal",
            NodeType::ExclusiveOr => "ExclusiveOr",
            NodeType::GreaterThan => "GreaterThan",
            NodeType::GreaterThanOrEqual => "GreaterThanOrEqual",
            NodeType::Invoke => "Invoke",
            NodeType::Lambda => "Lambda",
            NodeType::LeftShift => "LeftShift",
            NodeType::LessThan => "LessThan",
            NodeType::LessThanOrEqual => "LessThanOrEqual",
            NodeType::ListInit => "ListInit",
            NodeType::MemberAccess => "MemberAccess",
            NodeType::MemberInit => "MemberInit",
            NodeType::Modulo => "Modulo",
            NodeType::Multiply => "Multiply",
            NodeType::MultiplyChecked => "MultiplyChecked",
            NodeType::Negate => "Negate",
            NodeType::UnaryPlus => "UnaryPlus",
            NodeType::NegateChecked => "NegateChecked",
            NodeType::New => "New",
            NodeType::NewArrayInit => "NewArrayInit",
            NodeType::NewArrayBounds => "NewArrayBounds",
            NodeType::Not => "Not",
            NodeType::NotEqual => "NotEqual",
            NodeType::Or => "Or",
            NodeType::OrElse => "OrElse",
            NodeType::Parameter => "Parameter",
            NodeType::Power => "Power",
            NodeType::Quote => "Quote",
            NodeType::RightShift => "RightShift",
            NodeType::Subtract => "Subtract",
            NodeType::SubtractChecked => "SubtractChecked",
            NodeType::TypeAs => "TypeAs",
            NodeType::TypeIs => "TypeIs",
            NodeType::Assign => "Assign",
            NodeType::Block => "Block",
            NodeType::DebugInfo => "DebugInfo",
            NodeType::Decrement => "Decrement",
            NodeType::Dynamic => "Dynamic",
            NodeType::Default => "Default",
            NodeType::Extension => "Extension",
            NodeType::Goto => "Goto",
            NodeType::Increment => "Increment",
            NodeType::Index => "Index",
            NodeType::Label => "Label",
            NodeType::RuntimeVariables => "RuntimeVariables",
            NodeType::Loop => "Loop",
            NodeType::Switch => "Switch",
            NodeType::Throw => "Throw",
            NodeType::Try => "Try",
            NodeType::Unbox => "Unbox",
            NodeType::AddAssign => "AddAssign",
            NodeType::AndAssign => "AndAssign",
            NodeType::DivideAssign => "DivideAssign",
            NodeType::ExclusiveOrAssign => "ExclusiveOrAssign",
            NodeType::LeftShiftAssign => "LeftShiftAssign",
            NodeType::ModuloAssign => "ModuloAssign",
            NodeType::MultiplyAssign => "MultiplyAssign",
            NodeType::OrAssign => "OrAssign",
            NodeType::PowerAssign => "PowerAssign",
            NodeType::RightShiftAssign => "RightShiftAssign",
            NodeType::SubtractAssign => "SubtractAssign",
            NodeType::AddAssignChecked => "AddAssignChecked",
            NodeType::MultiplyAssignChecked => "MultiplyAssignChecked",
            NodeType::SubtractAssignChecked => "SubtractAssignChecked",
            NodeType::PreIncrementAssign => "PreIncrementAssign",
            NodeType::PreDecrementAssign => "PreDecrementAssign",
            NodeType::PostIncrementAssign => "PostIncrementAssign",
            NodeType::PostDecrementAssign => "PostDecrementAssign",
            NodeType::TypeEqual => "TypeEqual",
            NodeType::OnesComplement => "OnesComplement",
            NodeType::IsTrue => "IsTrue",
            NodeType::IsFalse => "IsFalse",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
