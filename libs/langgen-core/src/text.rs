//! Small text helpers shared across modules.

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_language_codes() {
        assert_eq!(capitalize("fr"), "Fr");
        assert_eq!(capitalize("EN"), "En");
    }

    #[test]
    fn capitalizes_words() {
        assert_eq!(capitalize("dog"), "Dog");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
    }
}
