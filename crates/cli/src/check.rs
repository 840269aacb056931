use gotolint_core::Result;
use gotolint_core::analysis::Analyzer;
use gotolint_core::model::Finding;
use std::path::Path;
use tracing::info;

use crate::Format;

/// Runs the analyzer over `path`, prints findings, and returns their count.
pub fn run(path: &Path, format: Format, explain: bool) -> Result<usize> {
    let analyzer = Analyzer::new()?;
    let findings = analyzer.analyze_path(path)?;

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&findings)?),
        Format::Text => {
            for finding in &findings {
                print_text(finding, explain);
            }
        }
    }

    info!("{} finding(s) in {}", findings.len(), path.display());
    Ok(findings.len())
}

fn print_text(finding: &Finding, explain: bool) {
    let path = finding
        .path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<source>".to_string());
    // Line/column are stored zero-based; print them one-based.
    println!(
        "{}:{}:{}: {}: {} [{}]",
        path,
        finding.range.start_line + 1,
        finding.range.start_col + 1,
        finding.severity,
        finding.description,
        finding.rule
    );
    if explain {
        println!("    {}", finding.explanation);
    }
}
