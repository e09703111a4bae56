use crate::utils::{is_valid_name, to_pascal_case};

#[test]
fn valid_names() {
    assert!(is_valid_name("id"));
    assert!(is_valid_name("_private"));
    assert!(is_valid_name("order2"));
    assert!(is_valid_name("discountedPriceTotal"));
}

#[test]
fn invalid_names() {
    assert!(!is_valid_name(""));
    assert!(!is_valid_name("2order"));
    assert!(!is_valid_name("$var"));
    assert!(!is_valid_name("order-id"));
    assert!(!is_valid_name("näme"));
}

#[test]
fn pascal_case_from_snake() {
    assert_eq!(to_pascal_case("order_lines"), "OrderLines");
    assert_eq!(to_pascal_case("_order"), "Order");
    assert_eq!(to_pascal_case("order_"), "Order");
}

#[test]
fn pascal_case_keeps_camel_humps() {
    assert_eq!(to_pascal_case("discountedPriceTotal"), "DiscountedPriceTotal");
    assert_eq!(to_pascal_case("orderId"), "OrderId");
}

#[test]
fn pascal_case_normalizes_all_caps() {
    assert_eq!(to_pascal_case("SKU"), "Sku");
    assert_eq!(to_pascal_case("SKU_CODE"), "SkuCode");
}

#[test]
fn pascal_case_idempotent() {
    assert_eq!(to_pascal_case("OrderLines"), "OrderLines");
    assert_eq!(to_pascal_case("Q"), "Q");
}

#[test]
fn pascal_case_from_kebab_and_dotted() {
    assert_eq!(to_pascal_case("order-lines"), "OrderLines");
    assert_eq!(to_pascal_case("order.lines"), "OrderLines");
}
