//! Pretty error reporting using ariadne.
//!
//! A diagnostic carries its own source text (through its positions), so a
//! report needs nothing but the [`Error`] itself.

use std::io;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

use crate::error::Error;

/// Writes `error` as an annotated source snippet to `out`.
///
/// The offending range is underlined and labelled with the error details.
/// `color` toggles ANSI colouring.
pub fn write_report<W: io::Write>(error: &Error, color: bool, out: W) -> io::Result<()> {
    let file_name: &str = &error.pos_start.file_name;
    let source: &str = &error.pos_start.file_text;
    let start = error.pos_start.offset();
    let end = error.pos_end.offset().max(start);

    Report::build(ReportKind::Error, file_name, start)
        .with_config(Config::default().with_color(color))
        .with_message(error.kind)
        .with_label(
            Label::new((file_name, start..end))
                .with_message(&error.details)
                .with_color(Color::Red),
        )
        .finish()
        .write((file_name, Source::from(source)), out)
}

/// Reports `error` on stderr, coloured.
pub fn eprint_report(error: &Error) -> io::Result<()> {
    write_report(error, true, io::stderr())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run;

    #[test]
    fn report_names_kind_file_and_details() {
        let error = run("calc.txt", "1 + @").unwrap_err();
        let mut out = Vec::new();
        write_report(&error, false, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Illegal Character"), "{text}");
        assert!(text.contains("calc.txt"), "{text}");
        assert!(text.contains("'@'"), "{text}");
        assert!(text.contains("1 + @"), "{text}");
    }
}
