//! Password length as offered to the user.

use std::fmt;

use super::error::LengthError;

/// Length bounded to what the widget offers. The generator itself accepts
/// any positive `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Length(usize);

impl Length {
    pub const MIN: usize = 4;
    pub const MAX: usize = 24;
    pub const DEFAULT: usize = 12;

    pub fn new(value: usize) -> Result<Self, LengthError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(LengthError::OutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// One shorter, saturating at `MIN`.
    pub fn shorter(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN))
    }

    /// One longer, saturating at `MAX`.
    pub fn longer(self) -> Self {
        Self((self.0 + 1).min(Self::MAX))
    }
}

impl Default for Length {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<Length> for usize {
    fn from(length: Length) -> usize {
        length.0
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert!(Length::new(3).is_err());
        assert_eq!(Length::new(4).map(Length::get), Ok(4));
        assert_eq!(Length::new(24).map(Length::get), Ok(24));
        assert_eq!(
            Length::new(25),
            Err(LengthError::OutOfRange {
                value: 25,
                min: 4,
                max: 24
            })
        );
    }

    #[test]
    fn default_is_twelve() {
        assert_eq!(Length::default().get(), 12);
    }

    #[test]
    fn steps_saturate() {
        let min = Length::new(Length::MIN).unwrap();
        let max = Length::new(Length::MAX).unwrap();
        assert_eq!(min.shorter(), min);
        assert_eq!(max.longer(), max);
        assert_eq!(Length::default().longer().get(), 13);
        assert_eq!(Length::default().shorter().get(), 11);
    }
}
