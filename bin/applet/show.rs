use crate::{io::Sink, view::View};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::Position;
use std::io::stdout;
use tracing::{info, instrument};

/// Draws the starting position.
#[derive(Debug, Default, Parser)]
pub struct Show {
    #[clap(flatten)]
    view: View,
}

impl Show {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let pos = Position::starting();
        info!(position = %pos);

        let mut sink = Sink::new(stdout().lock());
        sink.send(self.view.draw(&pos))?;
        sink.flush()?;

        Ok(())
    }
}
