//! Symptom and allergen text canonicalization.
//!
//! Every string comparison in the crate goes through [`matching_key`]: a
//! trimmed, lowercased, accent-stripped form. Anything shown to the user or
//! stored for re-display goes through [`display_form`] instead, which keeps
//! accents and applies a single capitalization rule.
//!
//! Both functions are total: any input string produces a result, never an
//! error. `matching_key` is idempotent, so keys can be re-normalized freely.

/// Canonical display form: trimmed, internal whitespace collapsed, first
/// character uppercased and the rest lowercased. Accents are preserved.
///
/// # Examples
///
/// ```
/// use remedy_finder::normalize::display_form;
///
/// assert_eq!(display_form("  maux   de tête "), "Maux de tête");
/// assert_eq!(display_form("STRESS"), "Stress");
/// ```
pub fn display_form(text: &str) -> String {
    let collapsed = collapse_whitespace(text);
    let mut chars = collapsed.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(collapsed.len());
            result.extend(first.to_uppercase());
            result.extend(chars.flat_map(|c| c.to_lowercase()));
            result
        }
        None => String::new(),
    }
}

/// Canonical matching key: trimmed, internal whitespace collapsed,
/// lowercased, diacritics stripped. Two strings that differ only by case,
/// accents, or spacing produce identical keys.
///
/// # Examples
///
/// ```
/// use remedy_finder::normalize::matching_key;
///
/// assert_eq!(matching_key("Insomnie"), matching_key("INSOMNIE"));
/// assert_eq!(matching_key("maux de tête"), "maux de tete");
/// ```
pub fn matching_key(text: &str) -> String {
    collapse_whitespace(text)
        .chars()
        .flat_map(|c| c.to_lowercase())
        .map(fold_accent)
        .collect()
}

/// Matching keys for a collection, deduplicated, first-occurrence order.
/// Blank inputs are dropped.
pub fn matching_keys<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut keys = Vec::new();
    for item in items {
        let key = matching_key(item.as_ref());
        if !key.is_empty() && !keys.contains(&key) {
            keys.push(key);
        }
    }
    keys
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Fold one lowercased character to its unaccented base form.
///
/// Covers the accented characters that actually occur in the catalog data
/// (French / Latin-1 set). Characters outside the set pass through.
fn fold_accent(c: char) -> char {
    match c {
        'à' | 'â' | 'ä' => 'a',
        'ç' => 'c',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'î' | 'ï' => 'i',
        'ô' | 'ö' => 'o',
        'ù' | 'û' | 'ü' => 'u',
        'ÿ' => 'y',
        other => other,
    }
}
