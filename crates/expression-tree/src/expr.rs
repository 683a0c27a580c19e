//! Expression nodes.
//!
//! An [`Expression`] pairs a [`NodeType`] tag and a static result type with an
//! [`ExpressionKind`] holding the variant-specific children and metadata. The
//! tree is fully owned: shared sub-trees are cloned values.

use serde::{Deserialize, Serialize};

use crate::node_type::NodeType;
use crate::types::{
    ConstantValue, GotoKind, LabelTarget, MemberKind, MemberRef, MethodRef, SymbolDocument,
    TypeRef,
};

/// A typed expression tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub node_type: NodeType,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    pub kind: ExpressionKind,
}

/// Variant-specific payload of an [`Expression`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExpressionKind {
    /// Arithmetic, comparison, logical, and assignment operators.
    Binary {
        left: Box<Expression>,
        right: Box<Expression>,
        /// User-defined operator implementation.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        method: Option<MethodRef>,
        /// Conversion lambda for coalesce and compound assignment.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        conversion: Option<Box<Expression>>,
    },
    /// Sequence of expressions with scoped variables.
    Block {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        variables: Vec<Expression>,
        expressions: Vec<Expression>,
    },
    Conditional {
        test: Box<Expression>,
        if_true: Box<Expression>,
        if_false: Box<Expression>,
    },
    Constant {
        value: ConstantValue,
    },
    DebugInfo {
        start_line: u32,
        start_column: u32,
        end_line: u32,
        end_column: u32,
        document: SymbolDocument,
    },
    /// Default value of the node's type.
    Default,
    /// Late-bound operation resolved by a binder at run time.
    Dynamic {
        binder: String,
        arguments: Vec<Expression>,
    },
    /// A node shape outside the built-in set. Printers render it generically.
    Extension {
        type_name: String,
        full_name: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<Expression>,
    },
    Goto {
        goto_kind: GotoKind,
        target: LabelTarget,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<Box<Expression>>,
    },
    /// Indexed property or array access.
    Index {
        object: Box<Expression>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        indexer: Option<MemberRef>,
        arguments: Vec<Expression>,
    },
    /// Invocation of a delegate or lambda value.
    Invocation {
        expression: Box<Expression>,
        arguments: Vec<Expression>,
    },
    Label {
        target: LabelTarget,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_value: Option<Box<Expression>>,
    },
    Lambda {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        parameters: Vec<Expression>,
        body: Box<Expression>,
    },
    ListInit {
        new_expression: Box<Expression>,
        initializers: Vec<ElementInit>,
    },
    Loop {
        body: Box<Expression>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        break_label: Option<LabelTarget>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        continue_label: Option<LabelTarget>,
    },
    /// Field or property access. `expression` is absent for static members.
    Member {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expression: Option<Box<Expression>>,
        member: MemberRef,
    },
    MemberInit {
        new_expression: Box<Expression>,
        bindings: Vec<MemberBinding>,
    },
    /// Method call. `object` is absent for static methods.
    MethodCall {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        object: Option<Box<Expression>>,
        method: MethodRef,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        arguments: Vec<Expression>,
    },
    New {
        /// Absent for parameterless value-type construction.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        constructor: Option<MethodRef>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        arguments: Vec<Expression>,
        /// Member names of an anonymous type, one per argument.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        members: Vec<MemberRef>,
    },
    /// Array creation. Whether `expressions` are elements or bounds is
    /// told by the node type (`NewArrayInit` or `NewArrayBounds`).
    NewArray {
        element_type: TypeRef,
        expressions: Vec<Expression>,
    },
    Parameter {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        by_ref: bool,
    },
    RuntimeVariables {
        variables: Vec<Expression>,
    },
    Switch {
        switch_value: Box<Expression>,
        cases: Vec<SwitchCase>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_body: Option<Box<Expression>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comparison: Option<MethodRef>,
    },
    Try {
        body: Box<Expression>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        handlers: Vec<CatchBlock>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        finally: Option<Box<Expression>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fault: Option<Box<Expression>>,
    },
    /// `TypeIs` / `TypeEqual` test against `type_operand`.
    TypeBinary {
        expression: Box<Expression>,
        type_operand: TypeRef,
    },
    Unary {
        /// Absent only for a rethrow.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        operand: Option<Box<Expression>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        method: Option<MethodRef>,
    },
}

/// One `Add` call of a collection initializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementInit {
    pub add_method: MethodRef,
    pub arguments: Vec<Expression>,
}

/// Member initializer inside a [`ExpressionKind::MemberInit`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MemberBinding {
    /// `Member = expression`
    Assignment {
        member: MemberRef,
        expression: Expression,
    },
    /// `Member = { a, b }` on a collection member.
    ListBinding {
        member: MemberRef,
        initializers: Vec<ElementInit>,
    },
    /// `Member = { Inner = ... }` on a nested object member.
    MemberMemberBinding {
        member: MemberRef,
        bindings: Vec<MemberBinding>,
    },
}

/// Secondary discriminator of a [`MemberBinding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberBindingType {
    Assignment,
    MemberBinding,
    ListBinding,
}

impl MemberBindingType {
    pub fn as_str(self) -> &'static str {
        match self {
            MemberBindingType::Assignment => "Assignment",
            MemberBindingType::MemberBinding => "MemberBinding",
            MemberBindingType::ListBinding => "ListBinding",
        }
    }
}

impl MemberBinding {
    pub fn binding_type(&self) -> MemberBindingType {
        match self {
            MemberBinding::Assignment { .. } => MemberBindingType::Assignment,
            MemberBinding::ListBinding { .. } => MemberBindingType::ListBinding,
            MemberBinding::MemberMemberBinding { .. } => MemberBindingType::MemberBinding,
        }
    }

    pub fn member(&self) -> &MemberRef {
        match self {
            MemberBinding::Assignment { member, .. }
            | MemberBinding::ListBinding { member, .. }
            | MemberBinding::MemberMemberBinding { member, .. } => member,
        }
    }

    fn collect_children<'a>(&'a self, out: &mut Vec<&'a Expression>) {
        match self {
            MemberBinding::Assignment { expression, .. } => out.push(expression),
            MemberBinding::ListBinding { initializers, .. } => {
                for init in initializers {
                    out.extend(init.arguments.iter());
                }
            }
            MemberBinding::MemberMemberBinding { bindings, .. } => {
                for binding in bindings {
                    binding.collect_children(out);
                }
            }
        }
    }
}

/// Exception handler of a [`ExpressionKind::Try`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchBlock {
    /// Caught exception type. Absent for a catch-all handler.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<TypeRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<Box<Expression>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Box<Expression>>,
    pub body: Expression,
}

/// One `case` arm of a [`ExpressionKind::Switch`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchCase {
    pub test_values: Vec<Expression>,
    pub body: Expression,
}

impl ExpressionKind {
    /// Header name of the variant, e.g. `MemberExpression`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ExpressionKind::Binary { .. } => "BinaryExpression",
            ExpressionKind::Block { .. } => "BlockExpression",
            ExpressionKind::Conditional { .. } => "ConditionalExpression",
            ExpressionKind::Constant { .. } => "ConstantExpression",
            ExpressionKind::DebugInfo { .. } => "DebugInfoExpression",
            ExpressionKind::Default => "DefaultExpression",
            ExpressionKind::Dynamic { .. } => "DynamicExpression",
            ExpressionKind::Extension { .. } => "ExtensionExpression",
            ExpressionKind::Goto { .. } => "GotoExpression",
            ExpressionKind::Index { .. } => "IndexExpression",
            ExpressionKind::Invocation { .. } => "InvocationExpression",
            ExpressionKind::Label { .. } => "LabelExpression",
            ExpressionKind::Lambda { .. } => "LambdaExpression",
            ExpressionKind::ListInit { .. } => "ListInitExpression",
            ExpressionKind::Loop { .. } => "LoopExpression",
            ExpressionKind::Member { .. } => "MemberExpression",
            ExpressionKind::MemberInit { .. } => "MemberInitExpression",
            ExpressionKind::MethodCall { .. } => "MethodCallExpression",
            ExpressionKind::New { .. } => "NewExpression",
            ExpressionKind::NewArray { .. } => "NewArrayExpression",
            ExpressionKind::Parameter { .. } => "ParameterExpression",
            ExpressionKind::RuntimeVariables { .. } => "RuntimeVariablesExpression",
            ExpressionKind::Switch { .. } => "SwitchExpression",
            ExpressionKind::Try { .. } => "TryExpression",
            ExpressionKind::TypeBinary { .. } => "TypeBinaryExpression",
            ExpressionKind::Unary { .. } => "UnaryExpression",
        }
    }
}

impl Expression {
    pub fn new(node_type: NodeType, ty: impl Into<TypeRef>, kind: ExpressionKind) -> Self {
        Self {
            node_type,
            ty: ty.into(),
            kind,
        }
    }

    /// Name of the concrete node shape. Finer-grained than
    /// [`ExpressionKind::kind_name`]: a member access reports whether it reads
    /// a field or a property, a binary node whether it is logical, an
    /// assignment, or operator-method backed.
    pub fn shape_name(&self) -> &str {
        match &self.kind {
            ExpressionKind::Binary { method, conversion, .. } => match self.node_type {
                NodeType::AndAlso | NodeType::OrElse => "LogicalBinaryExpression",
                NodeType::Assign => "AssignBinaryExpression",
                NodeType::Coalesce if conversion.is_some() => "CoalesceConversionBinaryExpression",
                _ if conversion.is_some() => "OpAssignMethodConversionBinaryExpression",
                _ if method.is_some() => "MethodBinaryExpression",
                _ => "SimpleBinaryExpression",
            },
            ExpressionKind::Block { variables, expressions } => {
                if !variables.is_empty() {
                    return "ScopeNExpression";
                }
                // Fixed-arity shapes exist for two to five expressions only.
                match expressions.len() {
                    2 => "Block2",
                    3 => "Block3",
                    4 => "Block4",
                    5 => "Block5",
                    _ => "BlockN",
                }
            }
            ExpressionKind::Conditional { .. } => {
                if self.ty.is_void() {
                    "FullConditionalExpression"
                } else {
                    "FullConditionalExpressionWithType"
                }
            }
            ExpressionKind::Constant { .. } => "ConstantExpression",
            ExpressionKind::DebugInfo { start_line, end_line, .. } => {
                if *start_line == 0xfeefee && *end_line == 0xfeefee {
                    "ClearDebugInfoExpression"
                } else {
                    "SpanDebugInfoExpression"
                }
            }
            ExpressionKind::Default => "DefaultExpression",
            ExpressionKind::Dynamic { .. } => "DynamicExpressionN",
            ExpressionKind::Extension { type_name, .. } => type_name,
            ExpressionKind::Goto { .. } => "GotoExpression",
            ExpressionKind::Index { .. } => "IndexExpression",
            ExpressionKind::Invocation { .. } => "InvocationExpressionN",
            ExpressionKind::Label { .. } => "LabelExpression",
            ExpressionKind::Lambda { .. } => "Expression1",
            ExpressionKind::ListInit { .. } => "ListInitExpression",
            ExpressionKind::Loop { .. } => "LoopExpression",
            ExpressionKind::Member { member, .. } => match member.member_kind {
                MemberKind::Field => "FieldExpression",
                MemberKind::Property => "PropertyExpression",
                _ => "MemberExpression",
            },
            ExpressionKind::MemberInit { .. } => "MemberInitExpression",
            ExpressionKind::MethodCall { object, .. } => {
                if object.is_some() {
                    "InstanceMethodCallExpressionN"
                } else {
                    "MethodCallExpressionN"
                }
            }
            ExpressionKind::New { .. } => "NewExpression",
            ExpressionKind::NewArray { .. } => match self.node_type {
                NodeType::NewArrayBounds => "NewArrayBoundsExpression",
                _ => "NewArrayInitExpression",
            },
            ExpressionKind::Parameter { by_ref, .. } => {
                if *by_ref {
                    "ByRefParameterExpression"
                } else {
                    "TypedParameterExpression"
                }
            }
            ExpressionKind::RuntimeVariables { .. } => "RuntimeVariablesExpression",
            ExpressionKind::Switch { .. } => "SwitchExpression",
            ExpressionKind::Try { .. } => "TryExpression",
            ExpressionKind::TypeBinary { .. } => "TypeBinaryExpression",
            ExpressionKind::Unary { .. } => "UnaryExpression",
        }
    }

    /// Direct expression children, in print order. Children reached through
    /// bindings, element initializers, catch blocks, and switch cases are
    /// flattened in.
    pub fn children(&self) -> Vec<&Expression> {
        let mut out: Vec<&Expression> = Vec::new();
        match &self.kind {
            ExpressionKind::Binary { left, right, conversion, .. } => {
                out.push(left);
                out.push(right);
                if let Some(conversion) = conversion {
                    out.push(conversion);
                }
            }
            ExpressionKind::Block { variables, expressions } => {
                out.extend(variables.iter());
                out.extend(expressions.iter());
            }
            ExpressionKind::Conditional { test, if_true, if_false } => {
                out.push(test);
                out.push(if_true);
                out.push(if_false);
            }
            ExpressionKind::Constant { .. }
            | ExpressionKind::DebugInfo { .. }
            | ExpressionKind::Default
            | ExpressionKind::Parameter { .. } => {}
            ExpressionKind::Dynamic { arguments, .. } => out.extend(arguments.iter()),
            ExpressionKind::Extension { children, .. } => out.extend(children.iter()),
            ExpressionKind::Goto { value, .. } => out.extend(value.as_deref()),
            ExpressionKind::Index { object, arguments, .. } => {
                out.push(object);
                out.extend(arguments.iter());
            }
            ExpressionKind::Invocation { expression, arguments } => {
                out.push(expression);
                out.extend(arguments.iter());
            }
            ExpressionKind::Label { default_value, .. } => out.extend(default_value.as_deref()),
            ExpressionKind::Lambda { parameters, body, .. } => {
                out.extend(parameters.iter());
                out.push(body);
            }
            ExpressionKind::ListInit { new_expression, initializers } => {
                out.push(new_expression);
                for init in initializers {
                    out.extend(init.arguments.iter());
                }
            }
            ExpressionKind::Loop { body, .. } => out.push(body),
            ExpressionKind::Member { expression, .. } => out.extend(expression.as_deref()),
            ExpressionKind::MemberInit { new_expression, bindings } => {
                out.push(new_expression);
                for binding in bindings {
                    binding.collect_children(&mut out);
                }
            }
            ExpressionKind::MethodCall { object, arguments, .. } => {
                out.extend(object.as_deref());
                out.extend(arguments.iter());
            }
            ExpressionKind::New { arguments, .. } => out.extend(arguments.iter()),
            ExpressionKind::NewArray { expressions, .. } => out.extend(expressions.iter()),
            ExpressionKind::RuntimeVariables { variables } => out.extend(variables.iter()),
            ExpressionKind::Switch { switch_value, cases, default_body, .. } => {
                out.push(switch_value);
                for case in cases {
                    out.extend(case.test_values.iter());
                    out.push(&case.body);
                }
                out.extend(default_body.as_deref());
            }
            ExpressionKind::Try { body, handlers, finally, fault } => {
                out.push(body);
                for handler in handlers {
                    out.extend(handler.variable.as_deref());
                    out.extend(handler.filter.as_deref());
                    out.push(&handler.body);
                }
                out.extend(finally.as_deref());
                out.extend(fault.as_deref());
            }
            ExpressionKind::TypeBinary { expression, .. } => out.push(expression),
            ExpressionKind::Unary { operand, .. } => out.extend(operand.as_deref()),
        }
        out
    }

    /// Number of expression nodes in the tree, this one included.
    pub fn node_count(&self) -> usize {
        1 + self.children().into_iter().map(Expression::node_count).sum::<usize>()
    }

    // -- Data constructors --

    pub fn parameter(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self::new(
            NodeType::Parameter,
            ty,
            ExpressionKind::Parameter {
                name: Some(name.into()),
                by_ref: false,
            },
        )
    }

    pub fn constant(value: ConstantValue, ty: impl Into<TypeRef>) -> Self {
        Self::new(NodeType::Constant, ty, ExpressionKind::Constant { value })
    }

    /// Member access of `member` on `target` (absent for static members).
    pub fn member_access(target: Option<Expression>, member: MemberRef, ty: impl Into<TypeRef>) -> Self {
        Self::new(
            NodeType::MemberAccess,
            ty,
            ExpressionKind::Member {
                expression: target.map(Box::new),
                member,
            },
        )
    }

    /// Property read `target.name`, declared on `declaring_type`.
    pub fn property(
        target: Expression,
        declaring_type: impl Into<TypeRef>,
        name: impl Into<String>,
        ty: impl Into<TypeRef>,
    ) -> Self {
        Self::member_access(Some(target), MemberRef::property(declaring_type, name), ty)
    }

    /// Field read `target.name`, declared on `declaring_type`.
    pub fn field(
        target: Expression,
        declaring_type: impl Into<TypeRef>,
        name: impl Into<String>,
        ty: impl Into<TypeRef>,
    ) -> Self {
        Self::member_access(Some(target), MemberRef::field(declaring_type, name), ty)
    }

    pub fn call(
        object: Option<Expression>,
        method: MethodRef,
        arguments: Vec<Expression>,
        ty: impl Into<TypeRef>,
    ) -> Self {
        Self::new(
            NodeType::Call,
            ty,
            ExpressionKind::MethodCall {
                object: object.map(Box::new),
                method,
                arguments,
            },
        )
    }

    /// Lambda of delegate type `delegate_type`; the node's type is the
    /// delegate type.
    pub fn lambda(delegate_type: impl Into<TypeRef>, parameters: Vec<Expression>, body: Expression) -> Self {
        Self::new(
            NodeType::Lambda,
            delegate_type,
            ExpressionKind::Lambda {
                name: None,
                parameters,
                body: Box::new(body),
            },
        )
    }

    pub fn unary(node_type: NodeType, operand: Expression, ty: impl Into<TypeRef>) -> Self {
        Self::new(
            node_type,
            ty,
            ExpressionKind::Unary {
                operand: Some(Box::new(operand)),
                method: None,
            },
        )
    }

    /// Type conversion of `operand` to `ty`.
    pub fn convert(operand: Expression, ty: impl Into<TypeRef>) -> Self {
        Self::unary(NodeType::Convert, operand, ty)
    }

    pub fn binary(node_type: NodeType, left: Expression, right: Expression, ty: impl Into<TypeRef>) -> Self {
        Self::new(
            node_type,
            ty,
            ExpressionKind::Binary {
                left: Box::new(left),
                right: Box::new(right),
                method: None,
                conversion: None,
            },
        )
    }

    /// Conditional whose type is taken from `if_true`.
    pub fn conditional(test: Expression, if_true: Expression, if_false: Expression) -> Self {
        let ty = if_true.ty.clone();
        Self::new(
            NodeType::Conditional,
            ty,
            ExpressionKind::Conditional {
                test: Box::new(test),
                if_true: Box::new(if_true),
                if_false: Box::new(if_false),
            },
        )
    }

    pub fn new_object(constructor: Option<MethodRef>, arguments: Vec<Expression>, ty: impl Into<TypeRef>) -> Self {
        Self::new(
            NodeType::New,
            ty,
            ExpressionKind::New {
                constructor,
                arguments,
                members: Vec::new(),
            },
        )
    }
}
