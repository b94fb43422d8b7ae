//! Report generator implementation.

use crate::recommendations::recommendation_for;
use chrono::Utc;
use mg_common::{Entity, Label, Severity};
use mg_detect::assess;
use std::collections::BTreeMap;
use tracing::info;

/// Report generator. Stateless today; the struct keeps the construction
/// site stable if rendering options grow.
#[derive(Debug, Default)]
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn new() -> Self {
        ReportGenerator
    }

    /// Generate the HTML report for one analyzed text.
    pub fn generate(&self, entities: &[Entity]) -> String {
        let html = self.generate_html(entities);

        // Optionally minify
        let output = if cfg!(debug_assertions) {
            html
        } else {
            let cfg = minify_html::Cfg {
                minify_css: true,
                ..Default::default()
            };
            String::from_utf8(minify_html::minify(html.as_bytes(), &cfg)).unwrap_or(html)
        };

        info!(
            bytes = output.len(),
            entities = entities.len(),
            "report generated"
        );
        output
    }

    fn generate_html(&self, entities: &[Entity]) -> String {
        let verdict = assess(entities).verdict();
        let generated_at = Utc::now().format("%Y-%m-%d %H:%M UTC");

        // Aggregations drive the report; the matched text never appears.
        let mut label_counts: BTreeMap<String, usize> = BTreeMap::new();
        for entity in entities {
            *label_counts.entry(entity.label.as_str().to_owned()).or_default() += 1;
        }

        let mut severity_rows = String::new();
        for severity in [
            Severity::Critical,
            Severity::High,
            Severity::Medium,
            Severity::Low,
        ] {
            let count = entities.iter().filter(|e| e.severity == severity).count();
            if count > 0 {
                severity_rows.push_str(&format!(
                    "<tr><td class=\"sev sev-{sev}\">{SEV}</td><td>{count}</td></tr>\n",
                    sev = severity.as_str(),
                    SEV = severity.as_str().to_uppercase(),
                ));
            }
        }

        let mut label_rows = String::new();
        for (label, count) in &label_counts {
            label_rows.push_str(&format!(
                "<tr><td>{label}</td><td>{count} occurrence(s)</td></tr>\n"
            ));
        }

        let mut recommendation_items = String::new();
        let mut seen_labels: Vec<&Label> = Vec::new();
        for entity in entities {
            if seen_labels.contains(&&entity.label) {
                continue;
            }
            seen_labels.push(&entity.label);
            recommendation_items.push_str(&format!(
                "<li>{}</li>\n",
                recommendation_for(&entity.label)
            ));
        }

        let body = if entities.is_empty() {
            "<p class=\"clear\">No sensitive data detected. Safe to send.</p>".to_owned()
        } else {
            format!(
                "<h2>Summary</h2>\n\
                 <p>Sensitive items detected: {total}</p>\n\
                 <table>{severity_rows}</table>\n\
                 <h2>Detected data by type</h2>\n\
                 <table>{label_rows}</table>\n\
                 <h2>Recommendations</h2>\n\
                 <ul>{recommendation_items}</ul>",
                total = entities.len(),
            )
        };

        format!(
            r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Pre-send security report</title>
    <meta name="generator" content="mg-report {version}">
    <meta name="robots" content="noindex, nofollow">
    <style>
        body {{
            font-family: system-ui, sans-serif;
            max-width: 48rem;
            margin: 2rem auto;
            color: #111827;
        }}
        h1 {{ font-size: 1.4rem; }}
        .verdict {{ font-weight: 700; font-size: 1.1rem; margin: 1rem 0; }}
        table {{ border-collapse: collapse; }}
        td {{ border: 1px solid #e5e7eb; padding: 0.3rem 0.8rem; }}
        .sev-critical {{ color: #b91c1c; font-weight: 700; }}
        .sev-high {{ color: #c2410c; }}
        .sev-medium {{ color: #a16207; }}
        .sev-low {{ color: #374151; }}
        .clear {{ color: #15803d; font-weight: 700; }}
        footer {{ margin-top: 2rem; color: #6b7280; font-size: 0.8rem; }}
    </style>
</head>
<body>
    <h1>Security report - pre-send analysis</h1>
    <p class="verdict">VERDICT: {verdict}</p>
    {body}
    <footer>Generated {generated_at} by mg-report {version}</footer>
</body>
</html>
"##,
            version = env!("CARGO_PKG_VERSION"),
        )
    }
}

/// Convenience wrapper over a default generator.
pub fn generate(entities: &[Entity]) -> String {
    ReportGenerator::new().generate(entities)
}
