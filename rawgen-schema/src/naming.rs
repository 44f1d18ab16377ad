//! Case conversion and synthetic naming.
//!
//! Schema names arrive in whatever casing the schema author used
//! (`fieldAny`, `struct_optional_fields`, `GreaterThan`). These helpers split
//! them into words and reassemble them in the casing a target needs.

/// Splits a schema name into words.
///
/// Boundaries are non-alphanumeric characters, lower-to-upper transitions,
/// digit-to-upper transitions and the end of an acronym (`HTTPServer` splits
/// into `HTTP` and `Server`).
#[must_use]
pub fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Converts a string to PascalCase.
///
/// The first letter of every word is upper-cased; the rest of the word is
/// kept as written, so acronyms survive (`HTTPServer` stays `HTTPServer`).
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for word in split_words(s) {
        push_capitalized(&mut result, &word);
    }
    result
}

/// Converts a string to camelCase.
#[must_use]
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for (i, word) in split_words(s).iter().enumerate() {
        if i == 0 {
            result.push_str(&word.to_lowercase());
        } else {
            push_capitalized(&mut result, word);
        }
    }
    result
}

/// Converts a string to snake_case.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Prefixes an underscore when the name is empty or starts with a digit.
#[must_use]
pub fn ensure_identifier_start(s: String) -> String {
    match s.chars().next() {
        Some(c) if !c.is_ascii_digit() => s,
        _ => format!("_{s}"),
    }
}

/// Name of the synthetic struct hoisted out of field `field` of `parent`.
///
/// Declared parents are qualified with the package so that anonymous
/// shapes from different packages never share a name.
#[must_use]
pub fn synthetic_struct_name(package: &str, parent: &str, field: &str) -> String {
    format!(
        "{}{}{}",
        to_pascal_case(package),
        to_pascal_case(parent),
        to_pascal_case(field)
    )
}

/// Name of the synthetic enum hoisted out of field `field` of `parent`.
#[must_use]
pub fn synthetic_enum_name(parent: &str, field: &str) -> String {
    format!("{}{}", to_pascal_case(parent), to_pascal_case(field))
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}
