//! Catalog rules for tags and ingredients.

use validator::ValidationError;

/// Maximum length of tag names, slugs, ingredient names and units.
pub const MAX_CATALOG_FIELD_LEN: u64 = 200;

/// Tag colours are `#RRGGBB` hex strings.
pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(ValidationError::new("color")
            .with_message(format!("'{color}' is not a #RRGGBB colour").into()));
    }
    Ok(())
}

/// Slugs contain ASCII letters, digits, `-` and `_` only.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    let valid = !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(ValidationError::new("slug")
            .with_message(format!("'{slug}' is not a valid slug").into()));
    }
    Ok(())
}

/// Split a comma-separated list of tag slugs, dropping blanks.
///
/// `?tags=breakfast,lunch` filters recipes carrying any of the listed tags.
pub fn parse_slug_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Escape `%`, `_` and `\\` so user input matches literally inside a `LIKE`
/// pattern.
pub fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
