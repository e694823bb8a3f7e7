//! Password generation.

use rand::Rng;
use zeroize::Zeroize;

use super::GeneratedPassword;
use super::charset;
use super::error::GenerateError;
use super::options::OptionSet;

/// Generate a password from the thread-local random source.
pub fn generate(length: usize, options: &OptionSet) -> Result<GeneratedPassword, GenerateError> {
    generate_with(&mut rand::rng(), length, options)
}

/// Generate a password of `length` characters drawn uniformly, with
/// replacement, from the pool of enabled classes.
pub fn generate_with<R: Rng>(
    rng: &mut R,
    length: usize,
    options: &OptionSet,
) -> Result<GeneratedPassword, GenerateError> {
    if length == 0 {
        return Err(GenerateError::InvalidLength(length));
    }

    let mut chars = charset::pool(options);
    if chars.is_empty() {
        return Err(GenerateError::EmptyAlphabet);
    }

    tracing::trace!(length, pool = chars.len(), "generating password");

    let password = (0..length)
        .map(|_| random_char(&chars, rng))
        .collect::<String>();
    chars.zeroize();

    Ok(GeneratedPassword::new(password))
}

#[inline]
fn random_char<R: Rng>(chars: &[u8], rng: &mut R) -> char {
    char::from(chars[rng.random_range(0..chars.len())])
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::pass::CharacterClass::{self, *};

    fn assert_only(password: &GeneratedPassword, allowed: &[CharacterClass]) {
        for c in password.as_str().chars() {
            let class = CharacterClass::of(c);
            assert!(
                class.is_some_and(|class| allowed.contains(&class)),
                "{c:?} is not in {allowed:?}"
            );
        }
    }

    #[test]
    fn lowercase_only_twelve() {
        let password = generate(12, &OptionSet::only(&[Lowercase])).unwrap();
        assert_eq!(password.len(), 12);
        assert!(password.as_str().chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn digits_only_four() {
        let password = generate(4, &OptionSet::only(&[Digits])).unwrap();
        assert_eq!(password.len(), 4);
        assert!(password.as_str().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn all_classes_twenty_four() {
        let password = generate(24, &OptionSet::all()).unwrap();
        assert_eq!(password.len(), 24);
        assert_only(&password, &CharacterClass::ALL);
    }

    #[test]
    fn mixed_classes_stay_in_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let options = OptionSet::only(&[Uppercase, Special]);
        for _ in 0..200 {
            let password = generate_with(&mut rng, 16, &options).unwrap();
            assert_only(&password, &[Uppercase, Special]);
        }
    }

    #[test]
    fn empty_options_fail() {
        assert_eq!(
            generate(12, &OptionSet::none()),
            Err(GenerateError::EmptyAlphabet)
        );
    }

    #[test]
    fn zero_length_fails() {
        assert_eq!(
            generate(0, &OptionSet::all()),
            Err(GenerateError::InvalidLength(0))
        );
        // Length is checked before the pool.
        assert_eq!(
            generate(0, &OptionSet::none()),
            Err(GenerateError::InvalidLength(0))
        );
    }

    #[test]
    fn seeded_generation_is_repeatable() {
        let options = OptionSet::all();
        let a = generate_with(&mut StdRng::seed_from_u64(42), 20, &options).unwrap();
        let b = generate_with(&mut StdRng::seed_from_u64(42), 20, &options).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn draws_are_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let options = OptionSet::only(&[Digits]);
        let password = generate_with(&mut rng, 100_000, &options).unwrap();

        let mut counts = [0usize; 10];
        for b in password.as_str().bytes() {
            counts[(b - b'0') as usize] += 1;
        }

        // Chi-square with 9 degrees of freedom; 33.72 is the p = 0.0001 cutoff.
        let expected = 10_000.0;
        let chi2: f64 = counts
            .iter()
            .map(|&n| (n as f64 - expected).powi(2) / expected)
            .sum();
        assert!(chi2 < 33.72, "chi-square {chi2} over {counts:?}");
    }
}
