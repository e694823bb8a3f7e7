//! Password generation from selectable character classes.
//!
//! ```
//! use passpick::pass::{CharacterClass, OptionSet, generate};
//!
//! let options = OptionSet::only(&[CharacterClass::Digits]);
//! let pin = generate(4, &options).unwrap();
//! assert!(pin.as_str().chars().all(|c| c.is_ascii_digit()));
//! ```

pub mod pass;
