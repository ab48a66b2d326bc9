use std::fmt::Display;
use std::io::{self, Write};
use tracing::instrument;

/// The display that board diagrams are flushed to.
#[derive(Debug)]
pub struct Sink<W: Write> {
    writer: W,
}

impl<W: Write> Sink<W> {
    pub fn new(writer: W) -> Self {
        Sink { writer }
    }

    /// Send a message verbatim.
    #[instrument(level = "trace", skip(self, msg), err)]
    pub fn send<T: Display>(&mut self, msg: T) -> io::Result<()> {
        write!(&mut self.writer, "{}", msg)
    }

    /// Flush the internal buffers.
    #[instrument(level = "trace", skip(self), err)]
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io::BufWriter, str};
    use test_strategy::proptest;

    #[proptest]
    fn send_writes_message_verbatim(s: String) {
        let mut buf = Vec::new();
        let mut sink = Sink::new(&mut buf);
        sink.send(&s)?;
        sink.flush()?;
        drop(sink);
        assert_eq!(str::from_utf8(&buf)?, s);
    }

    #[proptest]
    fn flush_drains_buffered_writers(a: String, b: String) {
        let mut buf = Vec::new();

        {
            let mut sink = Sink::new(BufWriter::new(&mut buf));
            sink.send(&a)?;
            sink.send(&b)?;
            sink.flush()?;
        }

        assert_eq!(str::from_utf8(&buf)?, format!("{a}{b}"));
    }
}
