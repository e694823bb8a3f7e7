//! Errors raised by the password core.

use thiserror::Error;

use super::charset::CharacterClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("no character class is enabled")]
    EmptyAlphabet,
    #[error("invalid password length: {0}")]
    InvalidLength(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ToggleError {
    #[error("{0} is the last enabled character class")]
    LastEnabled(CharacterClass),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LengthError {
    #[error("length {value} is outside {min}..={max}")]
    OutOfRange { value: usize, min: usize, max: usize },
}
