/// Whether `s` is a protocol name: `[_A-Za-z][_0-9A-Za-z]*`.
///
/// Field keys, wire names, argument names, variable names and named types
/// all share this grammar.
pub fn is_valid_name(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first == '_' || first.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// Convert a field key to PascalCase for generated type names.
///
/// Words are split on `_`, `-` and `.`; each word gets an uppercase first
/// letter. Inner capitals of camelCase keys are kept, while all-caps words
/// are normalized.
///
/// # Examples
/// ```
/// use shapeql_core::utils::to_pascal_case;
/// assert_eq!(to_pascal_case("order_lines"), "OrderLines");
/// assert_eq!(to_pascal_case("discountedPriceTotal"), "DiscountedPriceTotal");
/// assert_eq!(to_pascal_case("SKU_CODE"), "SkuCode");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for word in s.split(['_', '-', '.']).filter(|w| !w.is_empty()) {
        let all_caps = !word.chars().any(|c| c.is_ascii_lowercase());
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.push(first.to_ascii_uppercase());
        }
        if all_caps {
            result.extend(chars.map(|c| c.to_ascii_lowercase()));
        } else {
            result.extend(chars);
        }
    }
    result
}
