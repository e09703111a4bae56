use crate::type_expr::MAX_LIST_DEPTH;
use crate::{DescriptorFault, TypeExpr};

fn fault(descriptor: &str) -> DescriptorFault {
    TypeExpr::parse(descriptor).unwrap_err().reason
}

#[test]
fn parse_named() {
    assert_eq!(TypeExpr::parse("ID").unwrap(), TypeExpr::named("ID"));
}

#[test]
fn parse_non_null() {
    let ty = TypeExpr::parse("String!").unwrap();
    assert_eq!(ty, TypeExpr::non_null(TypeExpr::named("String")));
    assert!(ty.is_non_null());
}

#[test]
fn parse_list_of_non_null() {
    let ty = TypeExpr::parse("[ID!]!").unwrap();
    assert_eq!(
        ty,
        TypeExpr::non_null(TypeExpr::list(TypeExpr::non_null(TypeExpr::named("ID"))))
    );
}

#[test]
fn parse_nested_lists() {
    let ty = TypeExpr::parse("[[ID!]]!").unwrap();
    assert_eq!(
        ty,
        TypeExpr::NonNull(Box::new(TypeExpr::List(Box::new(TypeExpr::List(Box::new(
            TypeExpr::NonNull(Box::new(TypeExpr::Named("ID".into())))
        ))))))
    );
    assert_eq!(ty.to_string(), "[[ID!]]!");
}

#[test]
fn render_roundtrip() {
    for descriptor in [
        "ID",
        "ID!",
        "[ID]",
        "[ID]!",
        "[ID!]",
        "[ID!]!",
        "[[Int]]",
        "[[[Float!]!]]!",
        "_Any",
    ] {
        let ty: TypeExpr = descriptor.parse().unwrap();
        assert_eq!(ty.to_string(), descriptor);
    }
}

#[test]
fn reject_double_non_null() {
    assert_eq!(fault("ID!!"), DescriptorFault::NestedNonNull);
    assert_eq!(fault("[ID]!!"), DescriptorFault::NestedNonNull);
}

#[test]
fn reject_unclosed_list() {
    assert_eq!(fault("[ID"), DescriptorFault::UnclosedList);
    assert_eq!(fault("[ID!"), DescriptorFault::UnclosedList);
}

#[test]
fn reject_unbalanced_brackets() {
    assert_eq!(fault("ID]"), DescriptorFault::UnbalancedBrackets);
    assert_eq!(fault("[ID]]"), DescriptorFault::UnbalancedBrackets);
    assert_eq!(fault("[A][B]"), DescriptorFault::UnbalancedBrackets);
    assert_eq!(fault("[[ID]"), DescriptorFault::UnbalancedBrackets);
}

#[test]
fn reject_empty() {
    assert_eq!(fault(""), DescriptorFault::Empty);
    assert_eq!(fault("!"), DescriptorFault::Empty);
    assert_eq!(fault("[]"), DescriptorFault::Empty);
}

#[test]
fn reject_invalid_name() {
    assert_eq!(fault("Order Id"), DescriptorFault::InvalidName);
    assert_eq!(fault("1D"), DescriptorFault::InvalidName);
}

#[test]
fn error_carries_raw_descriptor() {
    let err = TypeExpr::parse("[ID!").unwrap_err();
    assert_eq!(err.descriptor, "[ID!");
    assert_eq!(
        err.to_string(),
        "malformed type descriptor `[ID!`: unclosed list type"
    );
}

#[test]
fn base_name_and_nullable() {
    let ty = TypeExpr::parse("[Order!]!").unwrap();
    assert_eq!(ty.base_name(), "Order");
    assert_eq!(ty.nullable().to_string(), "[Order!]");
    assert_eq!(TypeExpr::named("Int").nullable().to_string(), "Int");
}

#[test]
fn non_null_constructor_does_not_double_wrap() {
    let once = TypeExpr::non_null(TypeExpr::named("ID"));
    let twice = TypeExpr::non_null(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn long_bang_run_is_rejected() {
    let descriptor = format!("ID{}", "!".repeat(200_000));
    assert_eq!(fault(&descriptor), DescriptorFault::NestedNonNull);
    assert_eq!(fault("!!"), DescriptorFault::NestedNonNull);
}

#[test]
fn list_depth_is_capped() {
    let at_cap = format!("{}ID{}", "[".repeat(MAX_LIST_DEPTH), "]".repeat(MAX_LIST_DEPTH));
    let ty = TypeExpr::parse(&at_cap).unwrap();
    assert_eq!(ty.to_string(), at_cap);

    let over = format!("{}ID{}", "[".repeat(MAX_LIST_DEPTH + 1), "]".repeat(MAX_LIST_DEPTH + 1));
    assert_eq!(fault(&over), DescriptorFault::TooDeep);

    let huge = format!("{}ID!{}", "[".repeat(200_000), "]!".repeat(200_000));
    assert_eq!(fault(&huge), DescriptorFault::TooDeep);
}
