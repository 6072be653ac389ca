use std::sync::Arc;

use tracing::instrument;

use crate::wordle::WordsList;

/// Accepts a guess iff it appears verbatim in the vocabulary.
///
/// No I/O and no side effects. This is the strict strategy: anything
/// outside the fixed list is rejected, including real words the list
/// happens not to carry.
#[derive(Debug, Clone)]
pub struct MembershipChecker {
    words: Arc<WordsList>,
    length: usize,
}

impl MembershipChecker {
    pub fn new(words: Arc<WordsList>, length: usize) -> Self {
        Self { words, length }
    }

    /// Trims the guess, then requires the right character count before the
    /// list is ever scanned.
    #[instrument(skip(self))]
    pub fn check(&self, guess: &str) -> bool {
        let guess = guess.trim();

        guess.chars().count() == self.length && self.words.contains(guess)
    }
}

#[cfg(test)]
mod tests {
    use super::MembershipChecker;
    use crate::wordle::WordsList;
    use std::sync::Arc;

    fn checker(words: &[&str]) -> MembershipChecker {
        let list = WordsList::new(words.iter().map(|word| (*word).to_owned()).collect());

        MembershipChecker::new(Arc::new(list), 5)
    }

    #[test]
    fn accepts_listed_words() {
        let checker = checker(&["ABCDE", "FGHIJ", "KLMNO"]);

        assert!(checker.check("ABCDE"));
        assert!(checker.check("KLMNO"));
    }

    #[test]
    fn rejects_unlisted_words() {
        let checker = checker(&["ABCDE", "FGHIJ", "KLMNO"]);

        assert!(!checker.check("ZZZZZ"));
    }

    #[test]
    fn rejects_wrong_length_without_scanning() {
        let checker = checker(&["ABCDE", "FG"]);

        // "FG" is in the list, but two characters can never be a guess
        assert!(!checker.check("FG"));
        assert!(!checker.check("ABCDEF"));
        assert!(!checker.check(""));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let checker = checker(&["ABCDE"]);

        assert!(checker.check("  ABCDE  "));
        assert!(checker.check("\tABCDE\n"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let checker = checker(&["ABCDE"]);

        assert!(!checker.check("abcde"));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let checker = checker(&["زندگی"]);

        assert!(checker.check("زندگی"));
    }
}
