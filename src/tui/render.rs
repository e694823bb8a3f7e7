//! Frame layout for the widget.

use passpick::pass::{CharacterClass, Length};

use super::keys::HELP;
use super::widget::{Status, Widget};
use crate::terminal::{
    BOLD, BOX_WIDTH, DIM, GREEN, RED, RESET, box_bottom, box_line, box_line_center, box_rule,
    box_top, slider,
};

pub fn frame<R>(widget: &Widget<R>) -> Vec<String>
where
    R: rand::Rng,
{
    let mut lines = Vec::with_capacity(16);
    let length = widget.length().get();

    lines.push(box_top("Choose a password length"));
    lines.push(box_line(&format!(
        "{:>2} {} {}",
        Length::MIN,
        slider(length, Length::MIN, Length::MAX),
        Length::MAX
    )));
    lines.push(box_line(&format!("Length: {BOLD}{length}{RESET}")));
    lines.push(box_rule());

    for (n, class) in CharacterClass::ALL.into_iter().enumerate() {
        lines.push(box_line(&checkbox(n + 1, class, widget)));
    }

    lines.push(box_rule());
    lines.push(box_line_center(&format!(
        "{BOLD}{}{RESET}",
        widget.password()
    )));
    lines.push(box_line_center(&status_text(widget.status())));
    lines.push(box_bottom());

    for help in HELP {
        lines.push(format!("{DIM}{help}{RESET}"));
    }

    lines
}

fn checkbox<R: rand::Rng>(n: usize, class: CharacterClass, widget: &Widget<R>) -> String {
    let mark = if widget.options().is_enabled(class) {
        "x"
    } else {
        " "
    };
    if widget.is_locked(class) {
        format!("{DIM}{n}) [{mark}] {}{RESET}", class.label())
    } else {
        format!("{n}) [{mark}] {}", class.label())
    }
}

fn status_text(status: Option<&Status>) -> String {
    match status {
        None => String::new(),
        Some(Status::Copied) => format!("{GREEN}Copied to clipboard{RESET}"),
        Some(Status::CopyFailed(e)) => format!("{RED}{}{RESET}", truncate(e, BOX_WIDTH - 4)),
        Some(Status::Locked(class)) => format!("{RED}{class} must stay enabled{RESET}"),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max - 1).collect();
    out.push('…');
    out
}
