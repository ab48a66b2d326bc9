use clap::Args;
use lib::chess::{Color, Position};
use lib::render::{render, Ansi, Plain, Rgb, Style};

/// How the board is drawn.
#[derive(Debug, Clone, Args)]
pub struct View {
    /// The side whose perspective the board is drawn from.
    #[clap(short, long, default_value_t = Color::White)]
    perspective: Color,

    /// Draw the board without terminal colors.
    #[clap(long)]
    plain: bool,

    /// The background of light squares.
    #[clap(long, default_value_t = Ansi::default().light)]
    light: Rgb,

    /// The background of dark squares.
    #[clap(long, default_value_t = Ansi::default().dark)]
    dark: Rgb,
}

impl Default for View {
    fn default() -> Self {
        let Ansi { light, dark } = Ansi::default();

        View {
            perspective: Color::White,
            plain: false,
            light,
            dark,
        }
    }
}

impl View {
    fn style(&self) -> Box<dyn Style> {
        if self.plain {
            Box::new(Plain)
        } else {
            Box::new(Ansi {
                light: self.light,
                dark: self.dark,
            })
        }
    }

    /// Draws the diagram of a [`Position`].
    pub fn draw(&self, pos: &Position) -> String {
        render(pos, self.perspective, &self.style())
    }
}
