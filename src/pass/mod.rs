//! Password generation core.

pub mod charset;
mod error;
mod generate;
mod length;
mod options;
mod password;

pub use charset::CharacterClass;
pub use error::{GenerateError, LengthError, ToggleError};
pub use generate::{generate, generate_with};
pub use length::Length;
pub use options::{OptionSet, can_disable};
pub use password::GeneratedPassword;
