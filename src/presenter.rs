//! Renders a fetched forecast as labelled, separated text blocks.

use crate::types::forecast::Forecast;
use std::io::{self, Write};

const SEPARATOR: &str =
    "------------------------------------------------------------------------";

/// Writes the title and each entry (label line, indented body, separator) in
/// display order. Pure function of its inputs; the binary points it at
/// stdout and lets the terminal scrollback do the scrolling.
pub fn render(out: &mut impl Write, title: &str, forecast: &Forecast) -> io::Result<()> {
    writeln!(out, "{title}")?;
    for entry in forecast.entries() {
        writeln!(out)?;
        writeln!(out, "{}", entry.label)?;
        for line in entry.body.lines() {
            writeln!(out, "    {line}")?;
        }
        writeln!(out, "{SEPARATOR}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(title: &str, forecast: &Forecast) -> String {
        let mut out = Vec::new();
        render(&mut out, title, forecast).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn entries_appear_in_order_with_separators() {
        let mut forecast = Forecast::new();
        forecast.insert("Tonight", "Clear.\nLight wind.");
        forecast.insert("Wednesday", "Sunny.");

        let text = rendered("Weather Forecast: California, CAZ006", &forecast);

        let tonight = text.find("Tonight").unwrap();
        let wednesday = text.find("Wednesday").unwrap();
        assert!(tonight < wednesday);
        assert!(text.starts_with("Weather Forecast: California, CAZ006\n"));
        assert!(text.contains("    Clear.\n    Light wind.\n"));
        assert_eq!(text.matches(SEPARATOR).count(), 2);
    }

    #[test]
    fn empty_forecast_renders_only_the_title() {
        let text = rendered("Nothing", &Forecast::new());
        assert_eq!(text, "Nothing\n");
    }
}
