//! Form validation helpers shared by the contact and admin forms.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

#[must_use]
pub fn is_valid_url(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.starts_with("http://") || trimmed.starts_with("https://")
}

/// Derive a URL slug from a title: lowercase, accents folded, everything
/// non-alphanumeric collapsed into single hyphens.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut previous_hyphen = true;
    for ch in title.chars() {
        let mapped = match ch.to_lowercase().next().unwrap_or(ch) {
            'á' => Some('a'),
            'é' => Some('e'),
            'í' => Some('i'),
            'ó' => Some('o'),
            'ú' | 'ü' => Some('u'),
            'ñ' => Some('n'),
            ch if ch.is_ascii_alphanumeric() => Some(ch),
            _ => None,
        };
        match mapped {
            Some(ch) => {
                slug.push(ch);
                previous_hyphen = false;
            }
            None if !previous_hyphen => {
                slug.push('-');
                previous_hyphen = true;
            }
            None => {}
        }
    }
    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_emails() {
        assert!(is_valid_email("contacto@iejaqg.edu.pe"));
        assert!(is_valid_email("  madre.de.familia@gmail.com "));
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("sin-arroba"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("dos espacios@x.com"));
    }

    #[test]
    fn urls_must_be_http() {
        assert!(is_valid_url("https://res.cloudinary.com/demo/foto.jpg"));
        assert!(!is_valid_url("ftp://host/foto.jpg"));
        assert!(!is_valid_url("foto.jpg"));
    }

    #[test]
    fn slugify_folds_accents_and_spaces() {
        assert_eq!(
            slugify("Aniversario de la Institución"),
            "aniversario-de-la-institucion"
        );
        assert_eq!(slugify("¡Feria 2025!"), "feria-2025");
        assert_eq!(slugify("  año nuevo  "), "ano-nuevo");
    }

    #[test]
    fn slugify_collapses_runs() {
        assert_eq!(slugify("a -- b"), "a-b");
        assert_eq!(slugify("---"), "");
    }
}
