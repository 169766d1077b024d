//! Conversions between the kebab-case spelling used in templates and the
//! camelCase spelling used in component scripts.
//!
//! Both functions only touch ASCII letters and `-`; anything else is copied
//! through unchanged.

/// Convert `my-prop` into `myProp`.
///
/// Every `-` is removed and the character that follows it is uppercased.
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            out.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Convert `myProp` into `my-prop`.
///
/// A `-` is inserted before every uppercase letter that follows some other
/// character than `-`, and all uppercase letters are lowercased, so
/// `MyProp` also becomes `my-prop`.
pub fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            if prev.is_some_and(|p| p != '-') {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
        prev = Some(ch);
    }
    out
}
