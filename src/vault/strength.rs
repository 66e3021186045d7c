//! Password strength classification.
//!
//! Score: +2 for length >= 12 (else +1 for >= 8), +1 lowercase,
//! +1 uppercase, +1 digit, +2 any non-alphanumeric character.
//! Under 3 is weak, under 5 is medium, otherwise strong.  The
//! thresholds are fixed; stored records depend on them.

use super::record::Strength;

/// Classify `password`.  The empty string is always weak.
pub fn classify(password: &str) -> Strength {
    if password.is_empty() {
        return Strength::Weak;
    }

    match score(password) {
        s if s < 3 => Strength::Weak,
        s if s < 5 => Strength::Medium,
        _ => Strength::Strong,
    }
}

/// Raw integer score behind `classify`.
pub fn score(password: &str) -> u32 {
    // Length counts characters, not bytes.
    let len = password.chars().count();
    let mut score = if len >= 12 {
        2
    } else if len >= 8 {
        1
    } else {
        0
    };

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 2;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_weak() {
        assert_eq!(classify(""), Strength::Weak);
    }

    #[test]
    fn boundary_examples() {
        assert_eq!(score("abc"), 1);
        assert_eq!(classify("abc"), Strength::Weak);

        assert_eq!(score("P@ssw0rd123"), 6);
        assert_eq!(classify("P@ssw0rd123"), Strength::Strong);

        assert_eq!(score("shop123"), 2);
        assert_eq!(classify("shop123"), Strength::Weak);
    }

    #[test]
    fn medium_band() {
        // length 8 (+1), lower (+1), digit (+1) = 3
        assert_eq!(classify("abcdefg1"), Strength::Medium);
        // length 12 (+2), lower (+1), upper (+1) = 4
        assert_eq!(classify("abcdefGHIJKL"), Strength::Medium);
    }

    #[test]
    fn length_thresholds() {
        assert_eq!(score("aaaaaaa"), 1);
        assert_eq!(score("aaaaaaaa"), 2);
        assert_eq!(score("aaaaaaaaaaa"), 2);
        assert_eq!(score("aaaaaaaaaaaa"), 3);
    }

    #[test]
    fn non_ascii_counts_as_symbol() {
        // ü is neither an ASCII letter nor digit.
        assert_eq!(score("ü"), 2);
        assert_eq!(classify("ü"), Strength::Weak);
        // symbols alone: +2, length 8: +1 = 3
        assert_eq!(classify("!!!!!!!!"), Strength::Medium);
    }

    #[test]
    fn classification_is_stable() {
        for p in ["", "abc", "P@ssw0rd123", "shop123", "Tweet!2023Secure", "ü✓"] {
            assert_eq!(classify(p), classify(p));
        }
    }

    #[test]
    fn demo_passwords() {
        assert_eq!(classify("FB_secure789!"), Strength::Strong);
        assert_eq!(classify("Tweet!2023Secure"), Strength::Strong);
        assert_eq!(classify("NetflixAndChill2023!"), Strength::Strong);
    }
}
