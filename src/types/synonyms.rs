use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Spellings rewritten inside statement text. Plain substring matches, no word boundaries.
static TYPE_SYNONYM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)character varying|varchar|boolean|numeric|decimal").expect("valid type synonym pattern")
});

/// Canonical spelling for a type name reported by the PostgreSQL catalog.
///
/// Matches the synonym families case-insensitively and returns the short
/// lowercase keyword. Names outside the known families come back unchanged.
pub fn canonicalize_type_synonym(raw_type: &str) -> String {
    match raw_type.to_lowercase().as_str() {
        "character varying" | "varchar" => "varchar".to_string(),
        "boolean" => "boolean".to_string(),
        "numeric" | "decimal" => "decimal".to_string(),
        _ => raw_type.to_string(),
    }
}

/// Normalize a statement so a desired definition can be compared with the one
/// read back from the database.
///
/// Whitespace runs collapse to one space, type synonyms are rewritten in place,
/// and trailing terminators are dropped. This does not parse SQL: a synonym inside
/// an identifier or a string literal is rewritten too.
pub fn canonicalize_statement_text(raw_statement: &str) -> String {
    let collapsed = raw_statement.split_whitespace().collect::<Vec<_>>().join(" ");

    let replaced = TYPE_SYNONYM_REGEX.replace_all(&collapsed, |caps: &Captures| {
        canonicalize_type_synonym(&caps[0])
    });

    replaced
        .trim_end_matches(|c: char| c == ';' || c.is_whitespace())
        .to_string()
}
