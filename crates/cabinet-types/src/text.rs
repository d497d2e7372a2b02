//! Case- and accent-insensitive text matching.

/// Latin letters with diacritics that menus and config files may carry,
/// paired with the plain letter they compare equal to.
const FOLDS: &[(char, char)] = &[
    ('á', 'a'),
    ('é', 'e'),
    ('í', 'i'),
    ('ó', 'o'),
    ('ú', 'u'),
    ('à', 'a'),
    ('è', 'e'),
    ('ì', 'i'),
    ('ò', 'o'),
    ('ù', 'u'),
    ('ä', 'a'),
    ('ë', 'e'),
    ('ï', 'i'),
    ('ö', 'o'),
    ('ü', 'u'),
    ('â', 'a'),
    ('ê', 'e'),
    ('î', 'i'),
    ('ô', 'o'),
    ('û', 'u'),
    ('ã', 'a'),
    ('ñ', 'n'),
];

/// Lowercases `text` and strips the diacritics in [`FOLDS`].
///
/// Two strings that differ only in case or in those accents normalize
/// to the same value, so `"ECONÓMICA"`, `"Económica"` and `"economica"`
/// all become `"economica"`. Empty input comes back empty. Characters
/// outside the table (other scripts, `ç`, `ø`, ...) pass through lowercased.
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| {
            FOLDS
                .iter()
                .find(|(accented, _)| *accented == c)
                .map_or(c, |(_, plain)| *plain)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_empty_is_identity() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_folds_case_and_accents() {
        assert_eq!(normalize("Económica"), "economica");
        assert_eq!(normalize("ECONÓMICA"), "economica");
        assert_eq!(normalize("economica"), "economica");
    }

    #[test]
    fn test_normalize_uppercase_accents_fold_after_lowercasing() {
        assert_eq!(normalize("ÁÉÍÓÚÑ"), "aeioun");
        assert_eq!(normalize("Ünïcödê"), "unicode");
    }

    #[test]
    fn test_normalize_leaves_other_characters_alone() {
        assert_eq!(normalize("Cabin 42-b"), "cabin 42-b");
        assert_eq!(normalize("ç"), "ç");
    }
}
