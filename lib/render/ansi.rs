use crate::chess::{Color, Piece};
use crate::render::{Shade, Style};
use derive_more::{Display, Error};
use std::fmt::{self, Formatter};
use std::str::FromStr;

/// A 24-bit color.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "#{:02x}{:02x}{:02x}", _0, _1, _2)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// The reason why parsing [`Rgb`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse color, expected hex triplet such as `#c8a881`")]
pub struct ParseRgbError;

impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseRgbError);
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ParseRgbError);
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Draws the board using 24-bit ANSI terminal colors.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Ansi {
    /// The background of light squares.
    pub light: Rgb,
    /// The background of dark squares.
    pub dark: Rgb,
}

impl Default for Ansi {
    fn default() -> Self {
        Ansi {
            light: Rgb(200, 168, 129),
            dark: Rgb(100, 82, 59),
        }
    }
}

impl Ansi {
    const RESET: &'static str = "\x1b[0m";

    #[inline(always)]
    fn background(&self, shade: Shade) -> Rgb {
        match shade {
            Shade::Light => self.light,
            Shade::Dark => self.dark,
        }
    }

    #[inline(always)]
    fn foreground(color: Color) -> &'static str {
        match color {
            Color::White => "\x1b[97m",
            Color::Black => "\x1b[30m",
        }
    }
}

impl Style for Ansi {
    fn cell(&self, f: &mut Formatter<'_>, shade: Shade, piece: Option<&Piece>) -> fmt::Result {
        let Rgb(r, g, b) = self.background(shade);
        write!(f, "\x1b[48;2;{r};{g};{b}m")?;

        match piece {
            None => f.write_str("   ")?,
            Some(p) => write!(f, "{} {} ", Self::foreground(p.color()), p.role().glyph())?,
        }

        f.write_str(Self::RESET)
    }
}
