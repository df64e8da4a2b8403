//! State held by an interactive front-end, and the transitions between states.
//!
//! A `State` is a plain value; each user action consumes it and yields the next one. Every change
//! to the options draws a fresh password, and so does an explicit `Regenerate`.

use rand::Rng;

use crate::{generate, GenerationOptions, Password, MAX_LENGTH, MIN_LENGTH};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct State {
    pub options: GenerationOptions,
    pub password: Password,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    Regenerate,
    /// Clamped into `MIN_LENGTH..=MAX_LENGTH`.
    SetLength(usize),
    ToggleNumbers,
    ToggleSpecialChars,
}

impl State {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, options: GenerationOptions) -> State {
        let password = generate(rng, &options);
        State { options, password }
    }

    pub fn apply<R: Rng + ?Sized>(self, rng: &mut R, action: Action) -> State {
        let mut options = self.options;
        match action {
            Action::Regenerate => (),
            Action::SetLength(length) => options.length = length.clamp(MIN_LENGTH, MAX_LENGTH),
            Action::ToggleNumbers => options.include_numbers = !options.include_numbers,
            Action::ToggleSpecialChars => {
                options.include_special_chars = !options.include_special_chars
            }
        }
        State::new(rng, options)
    }
}
