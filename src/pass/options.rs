//! Enabled character classes and the policy for toggling them.

use super::charset::CharacterClass;
use super::error::ToggleError;

/// Enabled flag per character class.
///
/// The widget keeps at least one class enabled through [`OptionSet::toggle`];
/// [`OptionSet::set`] does not, so generation still checks for an empty pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSet {
    flags: [bool; 4],
}

impl OptionSet {
    pub fn all() -> Self {
        Self { flags: [true; 4] }
    }

    pub fn none() -> Self {
        Self { flags: [false; 4] }
    }

    pub fn only(classes: &[CharacterClass]) -> Self {
        let mut options = Self::none();
        for &class in classes {
            options.set(class, true);
        }
        options
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        self.flags[class as usize]
    }

    /// Unchecked setter. May leave every class disabled.
    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        self.flags[class as usize] = enabled;
    }

    /// Flip a class, refusing to disable the last enabled one.
    pub fn toggle(&mut self, class: CharacterClass) -> Result<(), ToggleError> {
        if !can_disable(class, self) {
            return Err(ToggleError::LastEnabled(class));
        }
        let enabled = self.is_enabled(class);
        self.set(class, !enabled);
        Ok(())
    }

    /// Enabled classes in pool order.
    pub fn enabled(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |&class| self.is_enabled(class))
    }

    pub fn enabled_count(&self) -> usize {
        self.flags.iter().filter(|&&on| on).count()
    }

    pub fn is_empty(&self) -> bool {
        self.enabled_count() == 0
    }
}

impl Default for OptionSet {
    fn default() -> Self {
        Self::all()
    }
}

/// Whether the control for `class` may be used.
///
/// False only when `class` is the sole enabled class; enabling a class is
/// always allowed.
pub fn can_disable(class: CharacterClass, options: &OptionSet) -> bool {
    !options.is_enabled(class) || options.enabled_count() > 1
}
