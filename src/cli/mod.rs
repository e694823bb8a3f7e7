//! One-shot command line output.

mod flags;
pub mod prompts;
pub mod quiet;

use std::io::{self, Write};

use rand::Rng;
use zeroize::Zeroize;

use passpick::pass::{OptionSet, generate_with};

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::error::Error;

pub use flags::CliFlags;

/// Print or copy passwords as the flags ask.
pub fn run(flags: &CliFlags) -> Result<(), Error> {
    let options = flags.options();
    let length = flags.length.get();
    let count = flags.count();
    let mut rng = rand::rng();

    tracing::debug!(length, count, board = flags.board, "one-shot generation");

    if flags.board {
        let mut clipboard = SystemClipboard::new();
        copy_passwords(&mut clipboard, &mut rng, length, &options, count)?;
        prompts::clipboard_copied(count);
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match write_passwords(&mut out, &mut rng, length, &options, count) {
        // Reader went away (`passpick -n 100 | head -1`).
        Err(Error::Terminal(e)) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

/// Write `count` passwords, one per line.
pub fn write_passwords<W: Write, R: Rng>(
    out: &mut W,
    rng: &mut R,
    length: usize,
    options: &OptionSet,
    count: usize,
) -> Result<(), Error> {
    for _ in 0..count {
        let password = generate_with(rng, length, options)?;
        writeln!(out, "{password}")?;
    }
    out.flush()?;
    Ok(())
}

/// Copy `count` newline-separated passwords to the clipboard.
pub fn copy_passwords<C: Clipboard, R: Rng>(
    clipboard: &mut C,
    rng: &mut R,
    length: usize,
    options: &OptionSet,
    count: usize,
) -> Result<(), Error> {
    let mut joined = String::with_capacity(count * (length + 1));
    for i in 0..count {
        let password = generate_with(rng, length, options)?;
        if i > 0 {
            joined.push('\n');
        }
        joined.push_str(password.as_str());
    }

    let result = clipboard.copy(&joined);
    joined.zeroize();
    Ok(result?)
}
