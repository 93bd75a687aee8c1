use crate::host::{OutletSink, SupersawerInstance};
use crate::supersaw::Message;
use std::io::{self, BufRead, Write};

struct LineSink<'a, W: Write> {
    out: &'a mut W,
    error: Option<io::Error>,
}

impl<W: Write> OutletSink for LineSink<'_, W> {
    fn outlet_float(&mut self, slot: usize, value: f64) {
        if self.error.is_none() {
            if let Err(e) = writeln!(self.out, "{} {}", slot, value) {
                self.error = Some(e);
            }
        }
    }
}

/// Reads one message per line and prints `<outlet> <value>` for each value a bang emits.
///
/// Blank lines and lines starting with `;` are skipped. Malformed messages are reported
/// on the log and otherwise ignored, the way a host drops a message an object does not
/// understand.
pub fn run<R: BufRead, W: Write>(
    instance: &mut SupersawerInstance,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with(';') {
            continue;
        }

        let message = match text.parse::<Message>() {
            Ok(message) => message,
            Err(e) => {
                log::warn!("ignoring '{}': {}", text, e);
                continue;
            }
        };

        let mut sink = LineSink {
            out: &mut *out,
            error: None,
        };
        instance.dispatch_to(message, &mut sink);
        if let Some(e) = sink.error {
            return Err(e);
        }
    }
    out.flush()
}
