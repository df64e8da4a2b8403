//! The character sets passwords are drawn from.

use crate::GenerationOptions;

pub static LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub static NUMBERS: &str = "0123456789";
pub static SPECIAL_CHARS: &str = "!@#$%^&*_+-=|;:,.<>?";

/// The characters eligible for selection in one generation call.
///
/// Always contains at least [`LETTERS`], so it is never empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    pub fn for_options(options: &GenerationOptions) -> Alphabet {
        let mut abc = Vec::with_capacity(LETTERS.len() + NUMBERS.len() + SPECIAL_CHARS.len());
        abc.extend(LETTERS.chars());
        if options.include_numbers {
            abc.extend(NUMBERS.chars());
        }
        if options.include_special_chars {
            abc.extend(SPECIAL_CHARS.chars());
        }
        Alphabet(abc)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.0.contains(&ch)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    /// Bits of entropy in a password of `len` characters sampled uniformly from this alphabet.
    pub fn entropy_bits(&self, len: usize) -> f64 {
        len as f64 * (self.len() as f64).log2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(include_numbers: bool, include_special_chars: bool) -> GenerationOptions {
        GenerationOptions {
            length: 8,
            include_numbers,
            include_special_chars,
        }
    }

    #[test]
    fn sizes_follow_flags() {
        assert_eq!(Alphabet::for_options(&options(false, false)).len(), 52);
        assert_eq!(Alphabet::for_options(&options(true, false)).len(), 62);
        assert_eq!(Alphabet::for_options(&options(false, true)).len(), 72);
        assert_eq!(Alphabet::for_options(&options(true, true)).len(), 82);
    }

    #[test]
    fn letters_only_without_flags() {
        let abc = Alphabet::for_options(&options(false, false));
        assert!(abc.as_slice().iter().all(|c| c.is_ascii_alphabetic()));
        assert!(!abc.contains('7'));
        assert!(!abc.contains('!'));
    }

    #[test]
    fn flags_add_their_sets() {
        let abc = Alphabet::for_options(&options(true, true));
        assert!(NUMBERS.chars().all(|c| abc.contains(c)));
        assert!(SPECIAL_CHARS.chars().all(|c| abc.contains(c)));
        assert!(abc.contains('A') && abc.contains('z'));
        // Not in the special set.
        assert!(!abc.contains('~'));
    }

    #[test]
    fn entropy() {
        let abc = Alphabet::for_options(&options(false, false));
        let expected = 8.0 * 52f64.log2();
        assert!((abc.entropy_bits(8) - expected).abs() < 1e-9);
        assert_eq!(abc.entropy_bits(0), 0.0);
    }
}
