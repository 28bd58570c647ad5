//! Terminal summary lines printed at the end of a run.

use std::io::Write as _;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::GeneratorError;
use crate::services::generator::RunSummary;

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

pub fn summary_lines(summary: &RunSummary) -> Vec<(String, Color)> {
    let mut lines = Vec::new();

    if summary.passes() > 0 {
        lines.push((
            format!(
                "{} icon{} generated",
                summary.passes(),
                plural(summary.passes())
            ),
            Color::Green,
        ));
    }
    if summary.fails() > 0 {
        lines.push((
            format!("{} icon{} failed", summary.fails(), plural(summary.fails())),
            Color::Red,
        ));
    }

    lines
}

pub fn print_summary(summary: &RunSummary) -> std::io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    for failure in &summary.failures {
        badge(&mut stdout, " FAIL ", Color::Red)?;
        let reasons: Vec<String> = failure.errors.iter().map(|e| e.to_string()).collect();
        writeln!(stdout, " {}: {}", failure.name, reasons.join("; "))?;
    }

    for (line, color) in summary_lines(summary) {
        stdout.set_color(ColorSpec::new().set_fg(Some(color)))?;
        let result = writeln!(stdout, "{}", line);
        stdout.reset().ok();
        result?;
    }

    Ok(())
}

pub fn print_fatal(error: &GeneratorError) -> std::io::Result<()> {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    badge(&mut stderr, " ERR ", Color::Red)?;
    writeln!(stderr, " {}", error)
}

fn badge(out: &mut StandardStream, text: &str, bg: Color) -> std::io::Result<()> {
    out.set_color(
        ColorSpec::new()
            .set_fg(Some(Color::Black))
            .set_bg(Some(bg)),
    )?;
    let result = out.write_all(text.as_bytes());
    out.reset().ok();
    result
}
