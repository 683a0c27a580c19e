//! expression-tree - typed expression tree node model.
//!
//! An [`Expression`] is a node tag ([`NodeType`]), a static result type
//! ([`TypeRef`]), and a variant payload ([`ExpressionKind`]) drawn from a
//! closed set: binary and unary operators, member access, method calls,
//! lambdas, object and array creation, initializers, blocks, try/catch,
//! switch, loops, labels and gotos, dynamic dispatch, type tests, debug info,
//! and an `Extension` variant for shapes outside that set.
//!
//! Trees are plain owned data. They derive serde traits so they can be stored
//! as JSON ([`from_json_str`], [`to_json_string`]).

mod error;
mod expr;
mod json;
mod node_type;
mod types;

pub use error::TreeError;
pub use expr::{
    CatchBlock, ElementInit, Expression, ExpressionKind, MemberBinding, MemberBindingType,
    SwitchCase,
};
pub use json::{from_json_str, from_reader, to_json_string};
pub use node_type::NodeType;
pub use types::{
    ConstantValue, GotoKind, LabelTarget, MemberKind, MemberRef, MethodRef, SymbolDocument,
    TypeRef,
};
