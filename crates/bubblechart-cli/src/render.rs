//! Presentation side: turns a [`Chart`] into a table, JSON or SVG.
//!
//! Nothing here reorders or rescales items; it prints what the core hands
//! over, in layout order.

use bubblechart_core::{Canvas, Chart};
use std::fmt::Write;

/// Two-column table: item name and value.
pub fn table(chart: &Chart) -> String {
    let label = chart.mode.label();
    let name_width = chart
        .items
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut out = String::new();
    let _ = writeln!(out, "{:<name_width$}  {label}", "Name");
    let _ = writeln!(out, "{}  {}", "-".repeat(name_width), "-".repeat(label.len()));
    for (name, value) in chart.rows() {
        let _ = writeln!(out, "{name:<name_width$}  {value}");
    }
    out
}

pub fn json(chart: &Chart) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&chart.items)
}

/// Black bubbles with white outlines and a centered two-line label, one
/// `<g>` per item.
pub fn svg(chart: &Chart, canvas: Canvas) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        canvas.width, canvas.height
    );
    for p in &chart.items {
        let font_size = (p.radius / 5.0).max(12.0);
        let name = escape(&p.name);
        let title = match &p.full_name {
            Some(full) => format!("Name: {} ({})\nValue: {}", name, escape(full), p.value),
            None => format!("Name: {}\nValue: {}", name, p.value),
        };
        let _ = writeln!(
            out,
            r#"  <g class="node" transform="translate({:.2}, {:.2})">"#,
            p.x, p.y
        );
        let _ = writeln!(out, "    <title>{title}</title>");
        let _ = writeln!(
            out,
            r##"    <circle r="{:.2}" fill="#000" stroke="#fff"/>"##,
            p.radius
        );
        let _ = writeln!(
            out,
            r#"    <text text-anchor="middle" fill="white" font-size="{font_size:.1}" pointer-events="none">"#
        );
        let _ = writeln!(out, r#"      <tspan x="0" dy="-0.6em">{name}</tspan>"#);
        let _ = writeln!(out, r#"      <tspan x="0" dy="1.2em">{}</tspan>"#, p.value);
        out.push_str("    </text>\n  </g>\n");
    }
    out.push_str("</svg>\n");
    out
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bubblechart_core::{run_cycle, ChartConfig, RawCountry};

    fn chart() -> Chart {
        let countries = vec![
            RawCountry::new("Trinidad & Tobago", "TTO").with_population(1_300_000),
            RawCountry::new("Aland", "ALA").with_population(5),
        ];
        run_cycle(&countries, "population", &ChartConfig::default()).unwrap()
    }

    #[test]
    fn table_has_header_and_rows_in_order() {
        let text = table(&chart());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[0].ends_with("Population"));
        assert!(lines[2].starts_with("TTO"));
        assert!(lines[2].ends_with("1300000"));
        assert!(lines[3].starts_with("ALA"));
    }

    #[test]
    fn svg_escapes_and_sizes_labels() {
        let c = chart();
        let doc = svg(&c, ChartConfig::default().canvas);
        assert!(doc.starts_with("<svg"));
        assert_eq!(doc.matches("<circle").count(), 2);
        assert!(doc.contains("Trinidad &amp; Tobago"));
        assert!(!doc.contains("Trinidad & Tobago"));
        // radius 100 -> font 20, min radius 10 -> clamped to 12
        assert!(doc.contains(r#"font-size="20.0""#));
        assert!(doc.contains(r#"font-size="12.0""#));
    }

    #[test]
    fn json_uses_camel_case_full_name() {
        let text = json(&chart()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v[0]["fullName"], "Trinidad & Tobago");
        assert_eq!(v[1]["value"], 5);
    }
}
