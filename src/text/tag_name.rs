use std::sync::OnceLock;

use regex::Regex;

/// First character of an XML 1.1 name (BMP only).
const NAME_START_RANGES: &[(char, char)] = &[
    (':', ':'),
    ('A', 'Z'),
    ('_', '_'),
    ('a', 'z'),
    ('\u{C0}', '\u{D6}'),
    ('\u{D8}', '\u{F6}'),
    ('\u{F8}', '\u{2FF}'),
    ('\u{370}', '\u{37D}'),
    ('\u{37F}', '\u{1FFF}'),
    ('\u{200C}', '\u{200D}'),
    ('\u{2070}', '\u{218F}'),
    ('\u{2C00}', '\u{2FEF}'),
    ('\u{3001}', '\u{D7FF}'),
    ('\u{F900}', '\u{FDCF}'),
    ('\u{FDF0}', '\u{FFFD}'),
];

/// Additional characters allowed after the first one.
const NAME_EXTRA_RANGES: &[(char, char)] = &[
    ('-', '-'),
    ('.', '.'),
    ('0', '9'),
    ('\u{B7}', '\u{B7}'),
    ('\u{300}', '\u{36F}'),
    ('\u{203F}', '\u{2040}'),
];

const EMPTY: &str = "empty";
const WHITESPACE: &str = "whitespace";
const WHITESPACES: &str = "whitespaces";
const NON_EMPTY: &str = "non-empty";

fn in_ranges(ch: char, ranges: &[(char, char)]) -> bool {
    ranges.iter().any(|&(lo, hi)| lo <= ch && ch <= hi)
}

#[inline]
pub fn is_name_start_char(ch: char) -> bool {
    in_ranges(ch, NAME_START_RANGES)
}

#[inline]
pub fn is_name_char(ch: char) -> bool {
    is_name_start_char(ch) || in_ranges(ch, NAME_EXTRA_RANGES)
}

/// Whether `name` is a legal XML name under the classes used for tag names.
pub fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_name_start_char(first) => chars.all(is_name_char),
        _ => false,
    }
}

fn class_body(out: &mut String, ranges: &[(char, char)]) {
    for &(lo, hi) in ranges {
        if lo == hi {
            out.push_str(&format!("\\x{{{:X}}}", lo as u32));
        } else {
            out.push_str(&format!("\\x{{{:X}}}-\\x{{{:X}}}", lo as u32, hi as u32));
        }
    }
}

fn illegal_at_start() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let mut pattern = String::from("^[^");
        class_body(&mut pattern, NAME_START_RANGES);
        pattern.push_str("]+");
        Regex::new(&pattern).expect("name start class is a valid pattern")
    })
}

fn illegal_runs() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let mut pattern = String::from("[^");
        class_body(&mut pattern, NAME_START_RANGES);
        class_body(&mut pattern, NAME_EXTRA_RANGES);
        pattern.push_str("]+");
        Regex::new(&pattern).expect("name class is a valid pattern")
    })
}

fn numeric() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?:0|[^1-9][0-9]*)$").expect("numeric pattern is valid")
    })
}

// A key that already starts with a legal name character never needs the
// numeric prefix, even though the bare pattern would accept e.g. "a".
fn looks_numeric(trimmed: &str) -> bool {
    let starts_with_name = trimmed.chars().next().is_some_and(is_name_start_char);
    !starts_with_name && numeric().is_match(trimmed)
}

/// Derive an XML compatible tag name from a JSON key.
///
/// The mapping is total but not injective: `"a!"` and `"a?"` both become
/// `"a-"`. The original key stays available through the `name` attribute.
///
/// # Examples
/// ```
/// use json_dom::sanitize_tag_name;
///
/// assert_eq!(sanitize_tag_name(""), "empty");
/// assert_eq!(sanitize_tag_name("007"), "n007");
/// assert_eq!(sanitize_tag_name("first name"), "first-name");
/// ```
pub fn sanitize_tag_name(key: &str) -> String {
    if key.is_empty() {
        return EMPTY.to_string();
    }

    let trimmed = key.trim_matches(|ch: char| ch <= ' ');
    if trimmed.is_empty() {
        let name = if key.len() == 1 { WHITESPACE } else { WHITESPACES };
        return name.to_string();
    }

    if looks_numeric(trimmed) {
        let prefixed = format!("n{trimmed}");
        return illegal_runs().replace_all(&prefixed, "-").into_owned();
    }

    let simplified = illegal_at_start().replace(trimmed, "");
    if !simplified.is_empty() {
        return illegal_runs().replace_all(&simplified, "-").into_owned();
    }

    NON_EMPTY.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "empty")]
    #[case(" ", "whitespace")]
    #[case("\t", "whitespace")]
    #[case("  ", "whitespaces")]
    #[case(" \n\t", "whitespaces")]
    #[case("0", "n0")]
    #[case("007", "n007")]
    #[case(" 0 ", "n0")]
    #[case("-5", "n-5")]
    #[case("#1", "n-1")]
    #[case("1", "non-empty")]
    #[case("42", "non-empty")]
    #[case("12abc", "abc")]
    #[case("a b", "a-b")]
    #[case("!!!", "non-empty")]
    #[case("a", "a")]
    #[case("root", "root")]
    #[case("ns:tag", "ns:tag")]
    #[case("  padded  ", "padded")]
    #[case("$ref", "ref")]
    #[case("a!!b??c", "a-b-c")]
    #[case("caf\u{e9}", "caf\u{e9}")]
    #[case("a\u{1F600}b", "a-b")]
    fn test_sanitize(#[case] key: &str, #[case] expected: &str) {
        assert_eq!(sanitize_tag_name(key), expected);
    }

    #[rstest]
    fn test_sanitize_collisions_are_accepted() {
        assert_eq!(sanitize_tag_name("a!"), sanitize_tag_name("a?"));
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("0")]
    #[case("-5")]
    #[case("#1")]
    #[case("1")]
    #[case("a b")]
    #[case("\u{1F600}")]
    #[case("x.y-z")]
    #[case("0.5")]
    fn test_sanitize_yields_xml_names(#[case] key: &str) {
        let name = sanitize_tag_name(key);
        assert!(is_xml_name(&name), "{key:?} -> {name:?}");
    }

    #[rstest]
    fn test_is_xml_name() {
        assert!(is_xml_name("a"));
        assert!(is_xml_name("_a.b-c"));
        assert!(is_xml_name(":x"));
        assert!(!is_xml_name(""));
        assert!(!is_xml_name("1a"));
        assert!(!is_xml_name("-a"));
        assert!(!is_xml_name("a b"));
    }
}
