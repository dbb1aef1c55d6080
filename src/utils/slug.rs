//! Title → URL slug conversion for new posts.

use std::sync::LazyLock;

use regex::Regex;

/// Spelled-out forms for language names that would otherwise lose their symbols.
const SYMBOL_WORDS: &[(&str, &str)] = &[
    ("c#", "csharp"),
    ("f#", "fsharp"),
    (".net", "dotnet"),
    ("c++", "cpp"),
];

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Convert a title into a lowercase, hyphen-separated ASCII slug.
///
/// Unicode is transliterated first, so `Café` becomes `cafe`.
///
/// # Examples
/// ```ignore
/// assert_eq!(slugify("Building Windows Services in .NET 7"), "building-windows-services-in-dotnet-7");
/// assert_eq!(slugify("Why I like C#"), "why-i-like-csharp");
/// ```
pub fn slugify(title: &str) -> String {
    let mut text = deunicode::deunicode(title).to_lowercase();
    for (symbol, word) in SYMBOL_WORDS {
        text = text.replace(symbol, word);
    }

    NON_ALPHANUMERIC
        .replace_all(&text, "-")
        .trim_matches('-')
        .to_string()
}
