use clap::Parser;

use passpick::pass::{CharacterClass, Length, OptionSet};

/// Generate passwords from selectable character classes.
///
/// With no output flags on an interactive terminal, opens the password widget.
#[derive(Debug, Parser)]
#[command(name = "passpick", version, about)]
pub struct CliFlags {
    /// Password length
    #[arg(
        short,
        long,
        env = "PASSPICK_LENGTH",
        default_value_t = Length::default(),
        value_parser = parse_length,
    )]
    pub length: Length,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out special characters
    #[arg(long)]
    pub no_special: bool,

    /// Number of passwords to print
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub number: Option<u32>,

    /// Copy to the clipboard instead of printing
    #[arg(short = 'b', long)]
    pub board: bool,

    /// Open the interactive widget
    #[arg(short, long, conflicts_with_all = ["print", "number", "board"])]
    pub interactive: bool,

    /// Print and exit, even on a terminal
    #[arg(short, long)]
    pub print: bool,

    /// Suppress non-essential messages
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliFlags {
    /// Character classes left enabled by the `--no-*` flags. May be empty.
    pub fn options(&self) -> OptionSet {
        let mut options = OptionSet::all();
        options.set(CharacterClass::Lowercase, !self.no_lower);
        options.set(CharacterClass::Uppercase, !self.no_upper);
        options.set(CharacterClass::Digits, !self.no_digits);
        options.set(CharacterClass::Special, !self.no_special);
        options
    }

    pub fn count(&self) -> usize {
        self.number.unwrap_or(1) as usize
    }

    /// Whether to open the widget rather than print.
    pub fn wants_widget(&self, on_terminal: bool) -> bool {
        if self.interactive {
            return true;
        }
        on_terminal && !self.print && !self.board && self.number.is_none()
    }
}

fn parse_length(s: &str) -> Result<Length, String> {
    let value: usize = s.parse().map_err(|_| format!("invalid number: {s}"))?;
    Length::new(value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliFlags, clap::Error> {
        CliFlags::try_parse_from(std::iter::once("passpick").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let flags = parse(&[]).unwrap();
        assert_eq!(flags.length.get(), 12);
        assert_eq!(flags.options(), OptionSet::all());
        assert_eq!(flags.count(), 1);
        assert!(flags.wants_widget(true));
        assert!(!flags.wants_widget(false));
    }

    #[test]
    fn length_range_is_enforced() {
        assert_eq!(parse(&["-l", "4"]).unwrap().length.get(), 4);
        assert_eq!(parse(&["--length", "24"]).unwrap().length.get(), 24);
        assert!(parse(&["-l", "3"]).is_err());
        assert!(parse(&["-l", "25"]).is_err());
        assert!(parse(&["-l", "twelve"]).is_err());
    }

    #[test]
    fn class_flags_map_to_options() {
        let flags = parse(&["--no-upper", "--no-special"]).unwrap();
        assert_eq!(
            flags.options(),
            OptionSet::only(&[CharacterClass::Lowercase, CharacterClass::Digits])
        );

        let flags = parse(&["--no-lower", "--no-upper", "--no-digits", "--no-special"]).unwrap();
        assert!(flags.options().is_empty());
    }

    #[test]
    fn output_flags_skip_the_widget() {
        assert!(!parse(&["-p"]).unwrap().wants_widget(true));
        assert!(!parse(&["-n", "3"]).unwrap().wants_widget(true));
        assert!(!parse(&["-b"]).unwrap().wants_widget(true));
        assert!(parse(&["-i"]).unwrap().wants_widget(false));
    }

    #[test]
    fn number_must_be_positive() {
        assert!(parse(&["-n", "0"]).is_err());
        assert_eq!(parse(&["-n", "5"]).unwrap().count(), 5);
    }

    #[test]
    fn interactive_conflicts_with_output_flags() {
        assert!(parse(&["-i", "-p"]).is_err());
        assert!(parse(&["-i", "-b"]).is_err());
    }
}
