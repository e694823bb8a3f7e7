//! Character classes and the alphabets they draw from.

use std::fmt;
use std::sync::LazyLock;

use super::options::OptionSet;

const SPECIAL: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Alphabets indexed by `CharacterClass as usize`. Built once, read-only after.
static ALPHABETS: LazyLock<[String; 4]> = LazyLock::new(|| {
    let lowercase: String = (0..26u8).map(|i| char::from(b'a' + i)).collect();
    let uppercase = lowercase.to_ascii_uppercase();
    let digits: String = (0..10u8).map(|i| char::from(b'0' + i)).collect();
    [lowercase, uppercase, digits, SPECIAL.to_string()]
});

/// One category of allowed password characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digits,
    Special,
}

impl CharacterClass {
    /// Every class, in pool order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digits,
        CharacterClass::Special,
    ];

    pub fn alphabet(self) -> &'static str {
        &ALPHABETS[self as usize]
    }

    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }

    /// The class a character belongs to, if any. Alphabets are disjoint.
    pub fn of(c: char) -> Option<CharacterClass> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "Include lowercase letters",
            CharacterClass::Uppercase => "Include uppercase letters",
            CharacterClass::Digits => "Include numbers",
            CharacterClass::Special => "Include special characters",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Digits => "digits",
            CharacterClass::Special => "special",
        };
        f.write_str(name)
    }
}

/// Build the character pool from the enabled classes, in class order.
pub fn pool(options: &OptionSet) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(options));
    for class in options.enabled() {
        chars.extend_from_slice(class.alphabet().as_bytes());
    }
    chars
}

/// Number of characters in the pool for these options.
pub fn size(options: &OptionSet) -> usize {
    options.enabled().map(|class| class.alphabet().len()).sum()
}
