//! Interactive password widget.

mod keys;
mod render;
mod widget;

use crossterm::event::{self, Event, KeyEventKind};

use passpick::pass::{Length, OptionSet};

use crate::clipboard::SystemClipboard;
use crate::error::Error;
use crate::terminal::{RawModeGuard, print_frame};

use widget::{Flow, Widget};

/// Run the widget until the user quits.
pub fn run(length: Length, options: OptionSet) -> Result<(), Error> {
    let mut widget = Widget::new(length, options, rand::rng())?;
    let mut clipboard = SystemClipboard::new();

    let _guard = RawModeGuard::new()?;
    tracing::debug!(%length, "widget started");

    loop {
        print_frame(&render::frame(&widget));

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };

        if let Some(action) = keys::action(key)
            && widget.handle(action, &mut clipboard)? == Flow::Quit
        {
            break;
        }
    }

    Ok(())
}
