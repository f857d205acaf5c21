//! Component naming from icon file names.
//!
//! Icon libraries are often named in Chinese (`首页.svg`, `关闭（小）.svg`).
//! Han characters are transliterated to pinyin syllables so every icon gets a
//! PascalCase component name:
//!
//! ```text
//! arrow-left   -> ArrowLeft
//! 首页         -> ShouYe
//! 关闭（小）   -> GuanBiXiao
//! ```

use rustc_hash::FxHashSet;

/// Characters dropped before splitting into words.
const STRIPPED: [char; 2] = ['（', '）'];

/// Prepended when a name would not start with a letter, `_` or `$`.
const FALLBACK_PREFIX: &str = "Svg";

/// Build a PascalCase component name that is a valid JS identifier.
///
/// Every character outside `[A-Za-z0-9_$]` starts a new word, so
/// `arrow.up` and `arrow up` both become `ArrowUp`. Other scripts are
/// transliterated first; each Han character is its own word.
///
/// `index` is appended verbatim when it is `Some(n)` with `n != 0`.
pub fn component_name(name: &str, index: Option<usize>) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for c in name.chars().filter(|c| !STRIPPED.contains(c)) {
        if is_han(c) {
            flush_word(&mut words, &mut current);
            push_chars(&mut words, &mut current, &transliterate(c));
            flush_word(&mut words, &mut current);
        } else if c.is_ascii() {
            push_chars(&mut words, &mut current, c.encode_utf8(&mut [0; 4]));
        } else {
            push_chars(&mut words, &mut current, deunicode::deunicode_char(c).unwrap_or(""));
        }
    }
    flush_word(&mut words, &mut current);

    let mut result: String = words.iter().map(|w| capitalize(w)).collect();
    if !result.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_' || c == '$') {
        result.insert_str(0, FALLBACK_PREFIX);
    }
    if let Some(n) = index.filter(|&n| n != 0) {
        result.push_str(&n.to_string());
    }
    result
}

#[inline]
fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

fn push_chars(words: &mut Vec<String>, current: &mut String, text: &str) {
    for c in text.chars() {
        if is_identifier_char(c) {
            current.push(c);
        } else {
            flush_word(words, current);
        }
    }
}

fn flush_word(words: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

/// Lowercase pinyin for a Han character.
fn transliterate(c: char) -> String {
    deunicode::deunicode_char(c)
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_default()
}

#[inline]
fn is_han(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{20000}'..='\u{2A6DF}')
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Hands out unique component names during a batch.
///
/// The first claimant keeps the bare name; later collisions get 1, 2, ...
#[derive(Debug, Default)]
pub struct NameRegistry {
    prefix: String,
    taken: FxHashSet<String>,
}

impl NameRegistry {
    /// Create a registry that prepends `prefix` to every name.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            taken: FxHashSet::default(),
        }
    }

    /// Claim a unique name for the icon file stem `stem`.
    pub fn claim(&mut self, stem: &str) -> String {
        let base = format!("{}{}", self.prefix, component_name(stem, None));
        if self.taken.insert(base.clone()) {
            return base;
        }

        let mut index = 1;
        loop {
            let candidate = format!("{base}{index}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            index += 1;
        }
    }
}
