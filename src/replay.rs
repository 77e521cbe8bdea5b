use crate::events::{outcome_to_json, parse_event, FormEvent};
use services::form::{ContactForm, SubmissionSink};
use std::io::{self, BufRead, Write};

/// Drive `form` with the newline-delimited events read from `input`, writing
/// one outcome line to `output` per submit. Lines that are not UTF-8 or not a
/// valid event are logged and skipped.
pub(super) fn replay_events(
    mut input: impl BufRead,
    mut output: impl Write,
    form: &mut ContactForm,
    sink: &dyn SubmissionSink,
) -> io::Result<()> {
    let mut buf = Vec::new();
    let mut line_number = 0usize;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim_end_matches(['\n', '\r']),
            Err(e) => {
                tracing::warn!(line = line_number, error = %e, "skipping event");
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_event(line) {
            Ok(FormEvent::Input { field, value }) => form.handle_change(field, &value),
            Ok(FormEvent::Submit) => {
                let outcome = form.handle_submit(sink);
                writeln!(output, "{}", outcome_to_json(&outcome))?;
            }
            Err(e) => tracing::warn!(line = line_number, error = %e, "skipping event"),
        }
    }

    output.flush()
}
