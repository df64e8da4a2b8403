//! Utilities for generating passwords.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Alphabet, Password};

/// Shortest password length offered by the front-ends.
pub const MIN_LENGTH: usize = 6;
/// Longest password length offered by the front-ends.
pub const MAX_LENGTH: usize = 30;

/// The constraints for one generation call.
///
/// `length` is not checked against [`MIN_LENGTH`] and [`MAX_LENGTH`] here; whoever collects the
/// options (the argument parser, the interactive prompt, the config loader) is responsible for
/// that.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct GenerationOptions {
    pub length: usize,
    pub include_numbers: bool,
    pub include_special_chars: bool,
}

impl Default for GenerationOptions {
    fn default() -> GenerationOptions {
        GenerationOptions {
            length: 8,
            include_numbers: false,
            include_special_chars: false,
        }
    }
}

/// Generate a password satisfying `options`, drawing characters from `rng`.
pub fn generate<R>(rng: &mut R, options: &GenerationOptions) -> Password
where
    R: Rng + ?Sized,
{
    let alphabet = Alphabet::for_options(options);
    log::debug!(
        "generating a password of length {} from an alphabet of {} symbols",
        options.length,
        alphabet.len()
    );
    generate_random_password(rng, &alphabet, options.length)
}

/// Generate a password by just randomly sampling the given alphabet, with replacement.
///
/// Note that `rand`'s underlying uniform sampler does the right thing to prevent bias: if it can't
/// generate a value that is within the given range (or really, a multiple of the range), it
/// re-samples.
///
/// The result is only as good as `rng`. Real credentials want a `CryptoRng` such as
/// `rand::thread_rng()`.
pub fn generate_random_password<R>(rng: &mut R, alphabet: &Alphabet, len: usize) -> Password
where
    R: Rng + ?Sized,
{
    let abc = alphabet.as_slice();
    let mut password = String::with_capacity(len);
    for _ in 0..len {
        password.push(abc[rng.gen_range(0..abc.len())]);
    }
    Password(password)
}
