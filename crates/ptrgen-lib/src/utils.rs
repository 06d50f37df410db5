/// Upper-case the first character of `s`, leaving the rest untouched.
///
/// Only the leading character changes; separators and existing casing are
/// preserved literally, so the result is predictable for any input.
///
/// # Examples
/// ```
/// use ptrgen_lib::utils::capitalize_first;
/// assert_eq!(capitalize_first("float64"), "Float64");
/// assert_eq!(capitalize_first("Time"), "Time");
/// assert_eq!(capitalize_first("big_int"), "Big_int");
/// ```
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut result = String::with_capacity(s.len());
    result.extend(first.to_uppercase());
    result.push_str(chars.as_str());
    result
}

/// Check whether `s` is usable as an identifier in generated code.
///
/// Accepts letters, digits and `_`; the first character must not be a digit.
///
/// # Examples
/// ```
/// use ptrgen_lib::utils::is_identifier;
/// assert!(is_identifier("int64"));
/// assert!(!is_identifier("64int"));
/// ```
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_alphabetic() || first == '_') && chars.all(|c| c.is_alphanumeric() || c == '_')
}
