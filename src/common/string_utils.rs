//! String utility functions for common text manipulation operations.
//!
//! Provides the naming-convention helpers used when translating controller
//! and action names into template path segments.

/// Convert a PascalCase or camelCase name to snake_case
///
/// An underscore is inserted before an uppercase letter that follows a
/// lowercase letter or a digit; the result is lowercased. Runs of uppercase
/// letters are kept together (`HTMLPage` becomes `htmlpage`), matching the
/// convention templates were historically named with.
///
/// # Examples
/// ```
/// use viewfinder::common::string_utils::snake_case;
/// assert_eq!(snake_case("News"), "news");
/// assert_eq!(snake_case("AccountSettings"), "account_settings");
/// assert_eq!(snake_case("already_snake"), "already_snake");
/// ```
pub fn snake_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    let mut prev_lower_or_digit = false;
    for c in name.chars() {
        if c.is_ascii_uppercase() && prev_lower_or_digit {
            result.push('_');
        }
        prev_lower_or_digit = c.is_ascii_lowercase() || c.is_ascii_digit();
        result.extend(c.to_lowercase());
    }
    result
}

/// Strip a trailing `Bundle` suffix from a bundle name
///
/// Modern template identifiers namespace by the short bundle name
/// (`@News/...` for `NewsBundle`). Names without the suffix pass through
/// unchanged.
pub fn bundle_short_name(name: &str) -> &str {
    name.strip_suffix("Bundle").filter(|s| !s.is_empty()).unwrap_or(name)
}
