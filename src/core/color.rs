//! Fixed background-colour palette.  One tag per plotted series.

use std::{fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    UnknownName(String),
}

// --- Color ---
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Reset,
    White,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

/// Expands to `code()` and `glyph()` from one variant → SGR parameter list.
macro_rules! sgr_table {
    ($($variant:ident => $sgr:literal),* $(,)?) => {
        /// SGR escape sequence for this colour.
        #[inline]
        #[must_use]
        pub const fn code(self) -> &'static str {
            match self {
                $(Self::$variant => concat!("\x1b[", $sgr, "m"),)*
            }
        }

        /// One painted canvas cell: a coloured space followed by a reset.
        #[inline]
        #[must_use]
        pub const fn glyph(self) -> &'static str {
            match self {
                $(Self::$variant => concat!("\x1b[", $sgr, "m \x1b[0m"),)*
            }
        }
    };
}

impl Color {
    pub const ALL: [Color; 9] = [
        Color::Reset,
        Color::White,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
    ];

    /// Handed out in order when a plot has more series than explicit colours.
    pub const DEFAULT_CYCLE: [Color; 6] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Magenta,
        Color::Cyan,
    ];

    sgr_table! {
        Reset => 0,
        White => 47,
        Black => 40,
        Red => 41,
        Green => 42,
        Yellow => 43,
        Blue => 44,
        Magenta => 45,
        Cyan => 46,
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::White => "white",
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
        }
    }

    /// Case-insensitive palette lookup.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| ColorError::UnknownName(s.to_owned()))
    }

    /// `i`-th entry of [`Color::DEFAULT_CYCLE`], wrapping around.
    #[inline]
    #[must_use]
    pub const fn cycle(i: usize) -> Self {
        Self::DEFAULT_CYCLE[i % Self::DEFAULT_CYCLE.len()]
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: Color, text: &str) -> String {
    format!("{c}{text}{}", Color::Reset)
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::UnknownName(name) => write!(
                f,
                "unknown colour '{name}' (try one of: reset, white, black, red, green, yellow, blue, magenta, cyan)"
            ),
        }
    }
}
impl std::error::Error for ColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_is_colored_space_then_reset() {
        assert_eq!(Color::Red.glyph(), "\x1b[41m \x1b[0m");
        assert_eq!(Color::Reset.glyph(), "\x1b[0m \x1b[0m");
    }

    #[test]
    fn glyph_matches_colorize() {
        for c in Color::ALL {
            assert_eq!(c.glyph(), colorize(c, " "));
        }
    }

    #[test]
    fn code_and_glyph_share_parameters() {
        assert_eq!(Color::Black.code(), "\x1b[40m");
        for c in Color::ALL {
            assert!(c.glyph().starts_with(c.code()), "{c:?}");
        }
    }

    #[test]
    fn black_and_cyan_are_distinct() {
        assert_ne!(Color::Black.code(), Color::Cyan.code());
    }

    #[test]
    fn names_round_trip_through_parser() {
        for c in Color::ALL {
            assert_eq!(Color::from_name(c.name()).unwrap(), c);
        }
        assert_eq!(" MAGENTA ".parse::<Color>().unwrap(), Color::Magenta);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = Color::from_name("#ff0000").unwrap_err();
        assert_eq!(err, ColorError::UnknownName("#ff0000".into()));
    }

    #[test]
    fn cycle_wraps() {
        assert_eq!(Color::cycle(0), Color::Red);
        assert_eq!(Color::cycle(Color::DEFAULT_CYCLE.len()), Color::Red);
        assert_eq!(Color::cycle(7), Color::Green);
    }
}
