//! Property access captured through a concrete type, an interface, and a
//! constrained generic parameter.
//!
//! The trees model `x => x.IntProperty` as a compiler reifies it in each
//! setting. A direct access is a member node over the lambda parameter; the
//! generic case may instead wrap the parameter in a `Convert` to the
//! interface before reading the member.

use expression_tree::{Expression, ExpressionKind, MemberRef, NodeType};
use expression_tree_printer::{first_difference, print_equivalent, print_tree};

const CONCRETE: &str = "ClassWithIntProperty";
const INTERFACE: &str = "IWithIntProperty";
const PROPERTY: &str = "IntProperty";

fn key_selector(parameter_type: &str, body: Expression) -> Expression {
    Expression::lambda(
        "Func`2",
        vec![Expression::parameter("x", parameter_type)],
        body,
    )
}

/// `x => x.IntProperty`, reading `member` directly off the parameter.
fn direct(parameter_type: &str, declaring_type: &str) -> Expression {
    key_selector(
        parameter_type,
        Expression::property(
            Expression::parameter("x", parameter_type),
            declaring_type,
            PROPERTY,
            "Int32",
        ),
    )
}

/// `x => ((IWithIntProperty)x).IntProperty`
fn converted(parameter_type: &str) -> Expression {
    key_selector(
        parameter_type,
        Expression::property(
            Expression::convert(Expression::parameter("x", parameter_type), INTERFACE),
            INTERFACE,
            PROPERTY,
            "Int32",
        ),
    )
}

fn assert_is_member_expression_with_parameter_expression(expression: &Expression) {
    let ExpressionKind::Lambda { body, .. } = &expression.kind else {
        panic!("expected lambda, got {:?}", expression.kind);
    };
    let ExpressionKind::Member { expression: target, member } = &body.kind else {
        panic!("expected member access body, got {:?}", body.kind);
    };
    assert_eq!(member.name, PROPERTY);
    let target = target.as_deref().expect("instance member must have a target");
    assert_eq!(target.node_type, NodeType::Parameter);
}

#[test]
fn from_concrete_class() {
    let expression = direct(CONCRETE, CONCRETE);
    assert_is_member_expression_with_parameter_expression(&expression);

    let text = print_tree(&expression);
    assert!(text.contains("Member: ClassWithIntProperty.IntProperty (Member Type: Property)"));
    assert!(!text.contains("--- UnaryExpression ---"));
}

#[test]
fn from_interface() {
    let expression = direct(INTERFACE, INTERFACE);
    assert_is_member_expression_with_parameter_expression(&expression);

    let text = print_tree(&expression);
    assert!(text.contains("Member: IWithIntProperty.IntProperty (Member Type: Property)"));
    assert!(!text.contains("Operation: Convert"));
}

#[test]
fn via_generic_type_without_conversion() {
    // T = ClassWithIntProperty, member bound through the interface constraint.
    let expression = direct(CONCRETE, INTERFACE);
    assert_is_member_expression_with_parameter_expression(&expression);
}

/// Rebinds the member read in `x => x.Member` to the implementation declared
/// on `implementing_type`.
fn resolve_to(selector: &Expression, implementing_type: &str) -> Expression {
    let ExpressionKind::Lambda { parameters, body, .. } = &selector.kind else {
        panic!("expected lambda, got {:?}", selector.kind);
    };
    let ExpressionKind::Member { expression: target, member } = &body.kind else {
        panic!("expected member access body, got {:?}", body.kind);
    };
    let resolved = Expression::member_access(
        target.as_deref().cloned(),
        MemberRef::new(implementing_type, member.name.clone(), member.member_kind),
        body.ty.clone(),
    );
    Expression::lambda(selector.ty.clone(), parameters.clone(), resolved)
}

#[test]
fn interface_access_resolved_to_concrete_member_prints_identically() {
    let concrete = direct(CONCRETE, CONCRETE);
    let through_interface = direct(CONCRETE, INTERFACE);
    assert!(!print_equivalent(&concrete, &through_interface));

    let resolved = resolve_to(&through_interface, CONCRETE);
    assert!(print_equivalent(&concrete, &resolved));
    assert_eq!(first_difference(&concrete, &resolved), None);
}

#[test]
fn concrete_and_interface_declarations_differ_only_in_types() {
    let concrete = direct(CONCRETE, CONCRETE);
    let generic = direct(CONCRETE, INTERFACE);
    let diff = first_difference(&concrete, &generic).expect("declaring types differ");
    assert_eq!(diff.line, 11);
    assert_eq!(
        diff.left.as_deref(),
        Some("  Member: ClassWithIntProperty.IntProperty (Member Type: Property)")
    );
    assert_eq!(
        diff.right.as_deref(),
        Some("  Member: IWithIntProperty.IntProperty (Member Type: Property)")
    );
}

#[test]
fn unnecessary_convert_is_visible_in_the_dump() {
    let plain = direct(CONCRETE, INTERFACE);
    let wrapped = converted(CONCRETE);
    assert!(!print_equivalent(&plain, &wrapped));

    let diff = first_difference(&plain, &wrapped).expect("convert node adds lines");
    assert_eq!(diff.line, 13);
    assert_eq!(diff.left.as_deref(), Some("    --- ParameterExpression ---"));
    assert_eq!(diff.right.as_deref(), Some("    --- UnaryExpression ---"));

    let text = print_tree(&wrapped);
    let expected_tail = "\
  Expression (Object/Container):
    --- UnaryExpression ---
    Node Type: Convert (Node Shape: UnaryExpression) (Return Type: IWithIntProperty)
    Operation: Convert
    Operand:
      --- ParameterExpression ---
      Node Type: Parameter (Node Shape: TypedParameterExpression) (Return Type: ClassWithIntProperty)
      Name: x
";
    assert!(text.ends_with(expected_tail), "unexpected dump:\n{text}");
}

#[test]
fn converted_tree_fails_the_direct_access_check() {
    let wrapped = converted(CONCRETE);
    let result = std::panic::catch_unwind(|| {
        assert_is_member_expression_with_parameter_expression(&wrapped)
    });
    assert!(result.is_err());
}

#[test]
fn member_ref_identity_drives_equivalence() {
    let a = Expression::member_access(
        Some(Expression::parameter("x", CONCRETE)),
        MemberRef::property(CONCRETE, PROPERTY),
        "Int32",
    );
    let b = Expression::property(Expression::parameter("x", CONCRETE), CONCRETE, PROPERTY, "Int32");
    assert_eq!(a, b);
    assert!(print_equivalent(&a, &b));
}
