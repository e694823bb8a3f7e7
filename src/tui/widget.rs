//! Widget state: length, enabled classes, the current password.

use rand::Rng;

use passpick::pass::{
    CharacterClass, GenerateError, GeneratedPassword, Length, OptionSet, ToggleError,
    can_disable, generate_with,
};

use crate::clipboard::Clipboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Shorter,
    Longer,
    Toggle(CharacterClass),
    Regenerate,
    Copy,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Outcome of the last action, shown under the password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Copied,
    CopyFailed(String),
    Locked(CharacterClass),
}

pub struct Widget<R> {
    length: Length,
    options: OptionSet,
    password: GeneratedPassword,
    status: Option<Status>,
    rng: R,
}

impl<R: Rng> Widget<R> {
    pub fn new(length: Length, options: OptionSet, mut rng: R) -> Result<Self, GenerateError> {
        let password = generate_with(&mut rng, length.get(), &options)?;
        Ok(Self {
            length,
            options,
            password,
            status: None,
            rng,
        })
    }

    pub fn length(&self) -> Length {
        self.length
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    pub fn password(&self) -> &GeneratedPassword {
        &self.password
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Whether the checkbox for `class` is locked.
    pub fn is_locked(&self, class: CharacterClass) -> bool {
        !can_disable(class, &self.options)
    }

    pub fn handle(
        &mut self,
        action: Action,
        clipboard: &mut impl Clipboard,
    ) -> Result<Flow, GenerateError> {
        self.status = None;

        match action {
            Action::Shorter => self.set_length(self.length.shorter())?,
            Action::Longer => self.set_length(self.length.longer())?,
            Action::Toggle(class) => match self.options.toggle(class) {
                Ok(()) => {
                    tracing::debug!(%class, enabled = self.options.is_enabled(class), "toggled");
                    self.regenerate()?;
                }
                Err(ToggleError::LastEnabled(class)) => {
                    self.status = Some(Status::Locked(class));
                }
            },
            Action::Regenerate => self.regenerate()?,
            Action::Copy => self.copy(clipboard),
            Action::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn set_length(&mut self, length: Length) -> Result<(), GenerateError> {
        if length == self.length {
            return Ok(());
        }
        tracing::debug!(%length, "length changed");
        self.length = length;
        self.regenerate()
    }

    fn regenerate(&mut self) -> Result<(), GenerateError> {
        self.password = generate_with(&mut self.rng, self.length.get(), &self.options)?;
        Ok(())
    }

    fn copy(&mut self, clipboard: &mut impl Clipboard) {
        self.status = Some(match clipboard.copy(self.password.as_str()) {
            Ok(()) => Status::Copied,
            Err(e) => {
                tracing::warn!(error = %e, "clipboard copy failed");
                Status::CopyFailed(e.to_string())
            }
        });
    }
}
