//! Text fragments shared by the printer.

use expression_tree::{ElementInit, Expression, LabelTarget, MemberRef, MethodRef, TypeRef};

/// Two spaces per nesting level.
pub const TAB: &str = "  ";

pub const NO_PARAMETERS: &str = "(No Parameters)";
pub const NO_EXPRESSIONS: &str = "(No Expressions)";

fn owner_name(declaring_type: Option<&TypeRef>) -> &str {
    declaring_type.map(|t| t.name.as_str()).unwrap_or("")
}

/// `Owner.Method`; the owner is empty when the method has no declaring type.
/// A known return type is appended as ` (Returns: T)`.
pub fn qualified_method(method: &MethodRef) -> String {
    let name = format!("{}.{}", owner_name(method.declaring_type.as_ref()), method.name);
    match &method.return_type {
        Some(ty) => format!("{name} (Returns: {ty})"),
        None => name,
    }
}

/// `Owner.Member`; the owner is empty when the member has no declaring type.
pub fn qualified_member(member: &MemberRef) -> String {
    format!("{}.{}", owner_name(member.declaring_type.as_ref()), member.name)
}

/// `name (Type: type)` for goto and label targets.
pub fn label_target(target: &LabelTarget) -> String {
    format!(
        "{} (Type: {})",
        target.name.as_deref().unwrap_or("Unnamed Target"),
        target.ty.as_ref().map(|t| t.name.as_str()).unwrap_or("Void")
    )
}

/// Bare label name for loop break/continue labels.
pub fn label_name(target: &LabelTarget) -> &str {
    target.name.as_deref().unwrap_or("Unnamed")
}

/// Line introducing one collection initializer call.
pub fn element_init(init: &ElementInit) -> String {
    format!(
        "- {} (Method: {})",
        init.add_method.name,
        qualified_method(&init.add_method)
    )
}

/// `Node Type: .. (Node Shape: ..) (Return Type: ..)` line under each header.
pub fn node_info(expression: &Expression) -> String {
    format!(
        "Node Type: {} (Node Shape: {}) (Return Type: {})",
        expression.node_type,
        expression.shape_name(),
        expression.ty
    )
}

pub fn header(name: &str) -> String {
    format!("--- {name} ---")
}
