//! Indented structural dump of an expression tree.
//!
//! Each node prints a `--- <Kind> ---` header and a node-info line, then its
//! metadata at the same depth, then each child under a label line with the
//! child one level deeper. Absent optional children print nothing; empty
//! parameter and expression lists print an explicit placeholder.

use expression_tree::{
    CatchBlock, ElementInit, Expression, ExpressionKind, MemberBinding, SwitchCase,
};

use crate::format::{self, NO_EXPRESSIONS, NO_PARAMETERS, TAB};

/// Reusable printer. Buffer and depth are reset by every [`TreePrinter::print`].
#[derive(Debug, Default)]
pub struct TreePrinter {
    out: String,
    depth: usize,
}

impl TreePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `expression` and its whole subtree.
    pub fn print(&mut self, expression: &Expression) -> String {
        self.out.clear();
        self.depth = 0;
        log::trace!(
            "printing {} tree ({} nodes)",
            expression.node_type,
            expression.node_count()
        );
        self.visit(expression);
        debug_assert_eq!(self.depth, 0, "unbalanced indentation");
        std::mem::take(&mut self.out)
    }

    /// Current nesting depth. Zero between calls.
    pub fn depth(&self) -> usize {
        self.depth
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(TAB);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }

    fn child(&mut self, label: &str, expression: &Expression) {
        self.line(label);
        self.nested(|p| p.visit(expression));
    }

    fn optional_child(&mut self, label: &str, expression: Option<&Expression>) {
        if let Some(expression) = expression {
            self.child(label, expression);
        }
    }

    fn expression_list(&mut self, label: &str, expressions: &[Expression]) {
        self.line(label);
        self.nested(|p| {
            if expressions.is_empty() {
                p.line(NO_EXPRESSIONS);
            }
            for expression in expressions {
                p.visit(expression);
            }
        });
    }

    fn parameter_list(&mut self, label: &str, parameters: &[Expression]) {
        self.line(label);
        self.nested(|p| {
            if parameters.is_empty() {
                p.line(NO_PARAMETERS);
            }
            for parameter in parameters {
                p.visit(parameter);
            }
        });
    }

    fn visit(&mut self, expression: &Expression) {
        self.line(&format::header(expression.kind.kind_name()));
        self.line(&format::node_info(expression));

        match &expression.kind {
            ExpressionKind::Binary {
                left,
                right,
                method,
                conversion,
            } => {
                self.line(&format!("Operation: {}", expression.node_type));
                if let Some(method) = method {
                    self.line(&format!("Method: {}", format::qualified_method(method)));
                }
                self.child("Left:", left);
                self.child("Right:", right);
                self.optional_child("Conversion:", conversion.as_deref());
            }
            ExpressionKind::Block {
                variables,
                expressions,
            } => {
                self.line(&format!("Result Type: {}", expression.ty));
                if !variables.is_empty() {
                    self.parameter_list("Variables:", variables);
                }
                self.expression_list("Expressions:", expressions);
            }
            ExpressionKind::Conditional {
                test,
                if_true,
                if_false,
            } => {
                self.child("Test:", test);
                self.child("If True (ValueIfTrue):", if_true);
                self.child("If False (ValueIfFalse):", if_false);
            }
            ExpressionKind::Constant { value } => {
                self.line(&format!("Value: {value}"));
            }
            ExpressionKind::DebugInfo {
                start_line,
                start_column,
                end_line,
                end_column,
                document,
            } => {
                self.line(&format!(
                    "Start Line: {start_line}, Start Column: {start_column}"
                ));
                self.line(&format!("End Line: {end_line}, End Column: {end_column}"));
                self.line(&format!("Document: {}", document.file_name));
            }
            ExpressionKind::Default => {
                self.line(&format!("Default Value Type: {}", expression.ty));
            }
            ExpressionKind::Dynamic { binder, arguments } => {
                self.line(&format!("Binder Type: {binder}"));
                self.expression_list("Arguments:", arguments);
            }
            ExpressionKind::Extension {
                type_name,
                full_name,
                children,
            } => {
                log::debug!("generic rendering for extension node {type_name}");
                self.line(&format!("Custom Type: {full_name}"));
                if !children.is_empty() {
                    self.line("Children:");
                    self.nested(|p| {
                        for child in children {
                            p.visit(child);
                        }
                    });
                }
            }
            ExpressionKind::Goto {
                goto_kind,
                target,
                value,
            } => {
                self.line(&format!("Kind: {goto_kind}"));
                self.line(&format!("Target: {}", format::label_target(target)));
                self.optional_child("Value:", value.as_deref());
            }
            ExpressionKind::Index {
                object,
                indexer,
                arguments,
            } => {
                let indexer = indexer
                    .as_ref()
                    .map(|m| m.name.as_str())
                    .unwrap_or("Default Indexer");
                self.line(&format!("Indexer: {indexer}"));
                self.child("Object:", object);
                self.expression_list("Arguments:", arguments);
            }
            ExpressionKind::Invocation {
                expression: target,
                arguments,
            } => {
                self.child("Expression (Target):", target);
                self.expression_list("Arguments:", arguments);
            }
            ExpressionKind::Label {
                target,
                default_value,
            } => {
                self.line(&format!("Target: {}", format::label_target(target)));
                self.optional_child("Default Value:", default_value.as_deref());
            }
            ExpressionKind::Lambda {
                name,
                parameters,
                body,
            } => {
                self.line(&format!("Delegate Type: {}", expression.ty));
                if let Some(name) = name {
                    self.line(&format!("Name: {name}"));
                }
                self.parameter_list("Parameters:", parameters);
                self.child("Body:", body);
            }
            ExpressionKind::ListInit {
                new_expression,
                initializers,
            } => {
                self.child("New Expression:", new_expression);
                self.element_inits(initializers);
            }
            ExpressionKind::Loop {
                body,
                break_label,
                continue_label,
            } => {
                if let Some(label) = break_label {
                    self.line(&format!("Break Label: {}", format::label_name(label)));
                }
                if let Some(label) = continue_label {
                    self.line(&format!("Continue Label: {}", format::label_name(label)));
                }
                self.child("Body:", body);
            }
            ExpressionKind::Member {
                expression: target,
                member,
            } => {
                self.line(&format!(
                    "Member: {} (Member Type: {})",
                    format::qualified_member(member),
                    member.member_kind
                ));
                self.optional_child("Expression (Object/Container):", target.as_deref());
            }
            ExpressionKind::MemberInit {
                new_expression,
                bindings,
            } => {
                self.child("New Expression:", new_expression);
                self.line("Bindings:");
                self.nested(|p| {
                    for binding in bindings {
                        p.member_binding(binding);
                    }
                });
            }
            ExpressionKind::MethodCall {
                object,
                method,
                arguments,
            } => {
                self.line(&format!("Method: {}", format::qualified_method(method)));
                self.optional_child("Object (Instance):", object.as_deref());
                if !arguments.is_empty() {
                    self.expression_list("Arguments:", arguments);
                }
            }
            ExpressionKind::New {
                constructor,
                arguments,
                members,
            } => {
                self.line(&format!("Type: {}", expression.ty));
                if let Some(constructor) = constructor {
                    self.line(&format!(
                        "Constructor: {}",
                        format::qualified_method(constructor)
                    ));
                }
                if !arguments.is_empty() {
                    self.expression_list("Arguments:", arguments);
                }
                if !members.is_empty() {
                    self.line("Members (Anonymous Type):");
                    self.nested(|p| {
                        for member in members {
                            p.line(&format!("- {}", member.name));
                        }
                    });
                }
            }
            ExpressionKind::NewArray {
                element_type,
                expressions,
            } => {
                self.line(&format!("Array Type: {element_type}[]"));
                self.line(&format!("Array Kind: {}", expression.node_type));
                self.expression_list("Expressions (Elements/Bounds):", expressions);
            }
            ExpressionKind::Parameter { name, by_ref } => {
                self.line(&format!(
                    "Name: {}",
                    name.as_deref().unwrap_or("Unnamed Parameter")
                ));
                if *by_ref {
                    self.line("By Ref: true");
                }
            }
            ExpressionKind::RuntimeVariables { variables } => {
                self.parameter_list("Variables:", variables);
            }
            ExpressionKind::Switch {
                switch_value,
                cases,
                default_body,
                comparison,
            } => {
                if let Some(comparison) = comparison {
                    self.line(&format!(
                        "Comparison Method: {}",
                        format::qualified_method(comparison)
                    ));
                }
                self.child("Switch Value:", switch_value);
                self.line("Cases:");
                self.nested(|p| {
                    for case in cases {
                        p.switch_case(case);
                    }
                });
                self.optional_child("Default Body:", default_body.as_deref());
            }
            ExpressionKind::Try {
                body,
                handlers,
                finally,
                fault,
            } => {
                self.child("Body:", body);
                self.line("Catch Blocks:");
                self.nested(|p| {
                    for handler in handlers {
                        p.catch_block(handler);
                    }
                });
                self.optional_child("Finally Block:", finally.as_deref());
                self.optional_child("Fault Block:", fault.as_deref());
            }
            ExpressionKind::TypeBinary {
                expression: operand,
                type_operand,
            } => {
                self.line(&format!("Operation: {}", expression.node_type));
                self.line(&format!("Target Type: {type_operand}"));
                self.child("Expression:", operand);
            }
            ExpressionKind::Unary { operand, method } => {
                self.line(&format!("Operation: {}", expression.node_type));
                if let Some(method) = method {
                    self.line(&format!("Method: {}", format::qualified_method(method)));
                }
                self.optional_child("Operand:", operand.as_deref());
            }
        }
    }

    fn element_inits(&mut self, initializers: &[ElementInit]) {
        self.line("Initializers:");
        self.nested(|p| {
            for init in initializers {
                p.line(&format::element_init(init));
                p.nested(|p| p.expression_list("Arguments:", &init.arguments));
            }
        });
    }

    fn switch_case(&mut self, case: &SwitchCase) {
        self.line("- Case:");
        self.nested(|p| {
            p.expression_list("Test Values:", &case.test_values);
            p.child("Body:", &case.body);
        });
    }

    fn catch_block(&mut self, handler: &CatchBlock) {
        self.line(&format::header("CatchBlock"));
        let caught = handler
            .test
            .as_ref()
            .map(|t| t.name.as_str())
            .unwrap_or("General Exception");
        self.line(&format!("Type: {caught}"));
        self.optional_child("Variable:", handler.variable.as_deref());
        self.optional_child("Filter:", handler.filter.as_deref());
        self.child("Body:", &handler.body);
    }

    fn member_binding(&mut self, binding: &MemberBinding) {
        self.line(&format::header("MemberBinding"));
        self.line(&format!("Binding Type: {}", binding.binding_type().as_str()));
        let member = format!("Member: {}", format::qualified_member(binding.member()));
        match binding {
            MemberBinding::Assignment { expression, .. } => {
                self.line(&format::header("MemberAssignment"));
                self.line(&member);
                self.child("Expression (Value):", expression);
            }
            MemberBinding::ListBinding { initializers, .. } => {
                self.line(&format::header("MemberListBinding"));
                self.line(&member);
                self.element_inits(initializers);
            }
            MemberBinding::MemberMemberBinding { bindings, .. } => {
                self.line(&format::header("MemberMemberBinding"));
                self.line(&member);
                self.line("Bindings:");
                self.nested(|p| {
                    for nested in bindings {
                        p.member_binding(nested);
                    }
                });
            }
        }
    }
}

/// Render `expression` with a fresh [`TreePrinter`].
pub fn print_tree(expression: &Expression) -> String {
    TreePrinter::new().print(expression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use expression_tree::{
        ConstantValue, LabelTarget, MemberRef, MethodRef, NodeType, SymbolDocument, TypeRef,
    };

    fn x() -> Expression {
        Expression::parameter("x", "Widget")
    }

    fn int(value: i64) -> Expression {
        Expression::constant(ConstantValue::Int(value), "Int32")
    }

    #[test]
    fn parameter_block() {
        assert_eq!(
            print_tree(&x()),
            "--- ParameterExpression ---\n\
             Node Type: Parameter (Node Shape: TypedParameterExpression) (Return Type: Widget)\n\
             Name: x\n"
        );
    }

    #[test]
    fn member_access_nests_target_one_level_deeper() {
        let expr = Expression::property(x(), "Widget", "Count", "Int32");
        let expected = "\
--- MemberExpression ---
Node Type: MemberAccess (Node Shape: PropertyExpression) (Return Type: Int32)
Member: Widget.Count (Member Type: Property)
Expression (Object/Container):
  --- ParameterExpression ---
  Node Type: Parameter (Node Shape: TypedParameterExpression) (Return Type: Widget)
  Name: x
";
        assert_eq!(print_tree(&expr), expected);
    }

    #[test]
    fn lambda_with_parameters_and_body() {
        let expr = Expression::lambda(
            "Func`2",
            vec![x()],
            Expression::property(x(), "Widget", "Count", "Int32"),
        );
        let expected = "\
--- LambdaExpression ---
Node Type: Lambda (Node Shape: Expression1) (Return Type: Func`2)
Delegate Type: Func`2
Parameters:
  --- ParameterExpression ---
  Node Type: Parameter (Node Shape: TypedParameterExpression) (Return Type: Widget)
  Name: x
Body:
  --- MemberExpression ---
  Node Type: MemberAccess (Node Shape: PropertyExpression) (Return Type: Int32)
  Member: Widget.Count (Member Type: Property)
  Expression (Object/Container):
    --- ParameterExpression ---
    Node Type: Parameter (Node Shape: TypedParameterExpression) (Return Type: Widget)
    Name: x
";
        assert_eq!(print_tree(&expr), expected);
    }

    #[test]
    fn lambda_without_parameters_prints_placeholder() {
        let expr = Expression::lambda("Func`1", vec![], int(7));
        let text = print_tree(&expr);
        assert!(text.contains("Parameters:\n  (No Parameters)\nBody:\n"));
    }

    #[test]
    fn static_member_omits_target_section() {
        let expr = Expression::member_access(
            None,
            MemberRef::field("Widget", "Default"),
            "Widget",
        );
        let text = print_tree(&expr);
        assert!(text.contains("Node Shape: FieldExpression"));
        assert!(text.contains("Member: Widget.Default (Member Type: Field)\n"));
        assert!(!text.contains("Expression (Object/Container):"));
    }

    #[test]
    fn binary_prints_operation_method_and_operands() {
        let mut expr = Expression::binary(NodeType::Add, int(1), int(2), "Int32");
        if let ExpressionKind::Binary { method, .. } = &mut expr.kind {
            *method = Some(MethodRef::new("Money", "op_Addition"));
        }
        let expected = "\
--- BinaryExpression ---
Node Type: Add (Node Shape: MethodBinaryExpression) (Return Type: Int32)
Operation: Add
Method: Money.op_Addition
Left:
  --- ConstantExpression ---
  Node Type: Constant (Node Shape: ConstantExpression) (Return Type: Int32)
  Value: 1
Right:
  --- ConstantExpression ---
  Node Type: Constant (Node Shape: ConstantExpression) (Return Type: Int32)
  Value: 2
";
        assert_eq!(print_tree(&expr), expected);
    }

    #[test]
    fn multi_line_string_constant_stays_indented() {
        let expr = Expression::convert(
            Expression::constant(
                ConstantValue::String("x\n--- ParameterExpression ---".into()),
                "String",
            ),
            "Object",
        );
        let expected = "\
--- UnaryExpression ---
Node Type: Convert (Node Shape: UnaryExpression) (Return Type: Object)
Operation: Convert
Operand:
  --- ConstantExpression ---
  Node Type: Constant (Node Shape: ConstantExpression) (Return Type: String)
  Value: \"x\\n--- ParameterExpression ---\"
";
        assert_eq!(print_tree(&expr), expected);
    }

    #[test]
    fn method_return_type_is_part_of_the_method_line() {
        let call = |ret: &str| {
            Expression::call(None, MethodRef::new("Math", "Max").returning(ret), vec![], "Int32")
        };
        let text = print_tree(&call("Int32"));
        assert!(text.contains("Method: Math.Max (Returns: Int32)\n"));
        assert_ne!(text, print_tree(&call("Int64")));
    }

    #[test]
    fn method_call_without_arguments_omits_section() {
        let expr = Expression::call(
            Some(x()),
            MethodRef::new("Widget", "Reset"),
            vec![],
            "Void",
        );
        let text = print_tree(&expr);
        assert!(text.contains("Method: Widget.Reset\nObject (Instance):\n"));
        assert!(!text.contains("Arguments:"));
        assert!(!text.contains(NO_EXPRESSIONS));
    }

    #[test]
    fn invocation_with_empty_arguments_prints_placeholder() {
        let callee = Expression::parameter("f", "Action");
        let expr = Expression::new(
            NodeType::Invoke,
            "Void",
            ExpressionKind::Invocation {
                expression: Box::new(callee),
                arguments: vec![],
            },
        );
        let text = print_tree(&expr);
        assert!(text.ends_with("Arguments:\n  (No Expressions)\n"));
    }

    #[test]
    fn unary_convert_wraps_operand() {
        let expr = Expression::convert(x(), "IWidget");
        let expected = "\
--- UnaryExpression ---
Node Type: Convert (Node Shape: UnaryExpression) (Return Type: IWidget)
Operation: Convert
Operand:
  --- ParameterExpression ---
  Node Type: Parameter (Node Shape: TypedParameterExpression) (Return Type: Widget)
  Name: x
";
        assert_eq!(print_tree(&expr), expected);
    }

    #[test]
    fn rethrow_has_no_operand_section() {
        let expr = Expression::new(
            NodeType::Throw,
            "Void",
            ExpressionKind::Unary {
                operand: None,
                method: None,
            },
        );
        assert!(!print_tree(&expr).contains("Operand:"));
    }

    #[test]
    fn try_with_catch_all_and_finally() {
        let expr = Expression::new(
            NodeType::Try,
            "Int32",
            ExpressionKind::Try {
                body: Box::new(int(1)),
                handlers: vec![CatchBlock {
                    test: None,
                    variable: None,
                    filter: None,
                    body: int(0),
                }],
                finally: Some(Box::new(Expression::new(
                    NodeType::Default,
                    TypeRef::void(),
                    ExpressionKind::Default,
                ))),
                fault: None,
            },
        );
        let expected = "\
--- TryExpression ---
Node Type: Try (Node Shape: TryExpression) (Return Type: Int32)
Body:
  --- ConstantExpression ---
  Node Type: Constant (Node Shape: ConstantExpression) (Return Type: Int32)
  Value: 1
Catch Blocks:
  --- CatchBlock ---
  Type: General Exception
  Body:
    --- ConstantExpression ---
    Node Type: Constant (Node Shape: ConstantExpression) (Return Type: Int32)
    Value: 0
Finally Block:
  --- DefaultExpression ---
  Node Type: Default (Node Shape: DefaultExpression) (Return Type: Void)
  Default Value Type: Void
";
        assert_eq!(print_tree(&expr), expected);
    }

    #[test]
    fn switch_cases_keep_source_order() {
        let expr = Expression::new(
            NodeType::Switch,
            "Void",
            ExpressionKind::Switch {
                switch_value: Box::new(int(3)),
                cases: vec![
                    SwitchCase {
                        test_values: vec![int(2), int(1)],
                        body: int(20),
                    },
                    SwitchCase {
                        test_values: vec![],
                        body: int(30),
                    },
                ],
                default_body: None,
                comparison: Some(MethodRef::new("Comparer", "Same")),
            },
        );
        let text = print_tree(&expr);
        assert!(text.contains("Comparison Method: Comparer.Same\nSwitch Value:\n"));
        let two = text.find("Value: 2").unwrap();
        let one = text.find("Value: 1\n").unwrap();
        assert!(two < one);
        assert!(text.contains("  - Case:\n    Test Values:\n      (No Expressions)\n    Body:\n"));
        assert!(!text.contains("Default Body:"));
    }

    #[test]
    fn goto_label_and_loop_targets() {
        let exit = LabelTarget::named("exit").with_type("Int32");
        let goto = Expression::new(
            NodeType::Goto,
            "Void",
            ExpressionKind::Goto {
                goto_kind: expression_tree::GotoKind::Break,
                target: exit.clone(),
                value: Some(Box::new(int(5))),
            },
        );
        let looped = Expression::new(
            NodeType::Loop,
            "Int32",
            ExpressionKind::Loop {
                body: Box::new(goto),
                break_label: Some(exit),
                continue_label: Some(LabelTarget::default()),
            },
        );
        let expected = "\
--- LoopExpression ---
Node Type: Loop (Node Shape: LoopExpression) (Return Type: Int32)
Break Label: exit
Continue Label: Unnamed
Body:
  --- GotoExpression ---
  Node Type: Goto (Node Shape: GotoExpression) (Return Type: Void)
  Kind: Break
  Target: exit (Type: Int32)
  Value:
    --- ConstantExpression ---
    Node Type: Constant (Node Shape: ConstantExpression) (Return Type: Int32)
    Value: 5
";
        assert_eq!(print_tree(&looped), expected);
    }

    #[test]
    fn member_init_dispatches_on_binding_type() {
        let expr = Expression::new(
            NodeType::MemberInit,
            "Order",
            ExpressionKind::MemberInit {
                new_expression: Box::new(Expression::new_object(
                    Some(MethodRef::new("Order", ".ctor")),
                    vec![],
                    "Order",
                )),
                bindings: vec![
                    MemberBinding::Assignment {
                        member: MemberRef::property("Order", "Id"),
                        expression: int(4),
                    },
                    MemberBinding::MemberMemberBinding {
                        member: MemberRef::property("Order", "Address"),
                        bindings: vec![MemberBinding::ListBinding {
                            member: MemberRef::property("Address", "Lines"),
                            initializers: vec![ElementInit {
                                add_method: MethodRef::new("List`1", "Add"),
                                arguments: vec![],
                            }],
                        }],
                    },
                ],
            },
        );
        let expected = "\
--- MemberInitExpression ---
Node Type: MemberInit (Node Shape: MemberInitExpression) (Return Type: Order)
New Expression:
  --- NewExpression ---
  Node Type: New (Node Shape: NewExpression) (Return Type: Order)
  Type: Order
  Constructor: Order..ctor
Bindings:
  --- MemberBinding ---
  Binding Type: Assignment
  --- MemberAssignment ---
  Member: Order.Id
  Expression (Value):
    --- ConstantExpression ---
    Node Type: Constant (Node Shape: ConstantExpression) (Return Type: Int32)
    Value: 4
  --- MemberBinding ---
  Binding Type: MemberBinding
  --- MemberMemberBinding ---
  Member: Order.Address
  Bindings:
    --- MemberBinding ---
    Binding Type: ListBinding
    --- MemberListBinding ---
    Member: Address.Lines
    Initializers:
      - Add (Method: List`1.Add)
        Arguments:
          (No Expressions)
";
        assert_eq!(print_tree(&expr), expected);
    }

    #[test]
    fn anonymous_new_lists_member_names() {
        let mut expr = Expression::new_object(
            Some(MethodRef::new("<>f__AnonymousType0`2", ".ctor")),
            vec![int(1), int(2)],
            "<>f__AnonymousType0`2",
        );
        if let ExpressionKind::New { members, .. } = &mut expr.kind {
            members.push(MemberRef::property("<>f__AnonymousType0`2", "A"));
            members.push(MemberRef::property("<>f__AnonymousType0`2", "B"));
        }
        let text = print_tree(&expr);
        assert!(text.ends_with("Members (Anonymous Type):\n  - A\n  - B\n"));
    }

    #[test]
    fn new_array_reports_element_type_and_kind() {
        let expr = Expression::new(
            NodeType::NewArrayBounds,
            "Int32[]",
            ExpressionKind::NewArray {
                element_type: TypeRef::new("Int32"),
                expressions: vec![int(10)],
            },
        );
        let text = print_tree(&expr);
        assert!(text.contains("Node Shape: NewArrayBoundsExpression"));
        assert!(text.contains("Array Type: Int32[]\nArray Kind: NewArrayBounds\n"));
        assert!(text.contains("Expressions (Elements/Bounds):\n  --- ConstantExpression ---\n"));
    }

    #[test]
    fn debug_info_and_dynamic() {
        let info = Expression::new(
            NodeType::DebugInfo,
            "Void",
            ExpressionKind::DebugInfo {
                start_line: 3,
                start_column: 5,
                end_line: 3,
                end_column: 17,
                document: SymbolDocument {
                    file_name: "query.cs".into(),
                },
            },
        );
        let text = print_tree(&info);
        assert!(text.contains("Start Line: 3, Start Column: 5\nEnd Line: 3, End Column: 17\nDocument: query.cs\n"));

        let dynamic = Expression::new(
            NodeType::Dynamic,
            "Object",
            ExpressionKind::Dynamic {
                binder: "GetMemberBinder".into(),
                arguments: vec![x()],
            },
        );
        let text = print_tree(&dynamic);
        assert!(text.contains("Binder Type: GetMemberBinder\nArguments:\n  --- ParameterExpression ---\n"));
    }

    #[test]
    fn extension_falls_back_to_generic_rendering() {
        let expr = Expression::new(
            NodeType::Extension,
            "Widget",
            ExpressionKind::Extension {
                type_name: "QueryRootExpression".into(),
                full_name: "Shop.Query.QueryRootExpression".into(),
                children: vec![x()],
            },
        );
        let expected = "\
--- ExtensionExpression ---
Node Type: Extension (Node Shape: QueryRootExpression) (Return Type: Widget)
Custom Type: Shop.Query.QueryRootExpression
Children:
  --- ParameterExpression ---
  Node Type: Parameter (Node Shape: TypedParameterExpression) (Return Type: Widget)
  Name: x
";
        assert_eq!(print_tree(&expr), expected);
    }

    #[test]
    fn printer_is_reusable_and_resets() {
        let mut printer = TreePrinter::new();
        let first = printer.print(&x());
        assert_eq!(printer.depth(), 0);
        let other = printer.print(&int(1));
        assert_eq!(printer.depth(), 0);
        assert!(!other.contains("Name: x"));
        assert_eq!(printer.print(&x()), first);
    }
}
