use crate::facts::FactSet;
use crate::membership::ReferenceMonth;
use crate::ranking::{EvaluationResult, Risk};
use crate::recommendations::build_recommendations;
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Render an evaluation as a plain-text report.
pub fn generate(
    facts: &FactSet,
    reference: ReferenceMonth,
    result: &EvaluationResult,
    use_colors: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    let heading = format!("Android Security Evaluation ({reference})");
    if use_colors {
        writeln!(out, "{}", heading.bold())?;
    } else {
        writeln!(out, "{heading}")?;
    }
    writeln!(out)?;

    writeln!(out, "  {:<20} {}", "API level", facts.api_level())?;
    writeln!(out, "  {:<20} {}", "Security patch", facts.patch_date())?;
    writeln!(out, "  {:<20} {}", "Device lock", if facts.lock_enabled() { "set" } else { "not set" })?;
    writeln!(out, "  {:<20} {}", "Root access", if facts.root_available() { "available" } else { "unavailable" })?;
    writeln!(out, "  {:<20} {}", "Dangerous apps", facts.dangerous_app_count())?;
    writeln!(out)?;

    writeln!(out, "  {:<20} {:.2}", "NotLatestAPI", result.not_latest_api)?;
    writeln!(out, "  {:<20} {:.2}", "NotLatestDate", result.not_latest_date)?;
    writeln!(out, "  {:<20} {:.1}", "Application risk", result.application_security_risk)?;

    let risk_label = result.risk.to_string();
    if use_colors {
        let colored = match result.risk {
            Risk::Low => risk_label.green().to_string(),
            Risk::Medium => risk_label.yellow().to_string(),
            Risk::High => risk_label.red().to_string(),
        };
        writeln!(out, "  {:<20} {:.1}  {colored}", "Device risk", result.android_security_risk)?;
    } else {
        writeln!(out, "  {:<20} {:.1}  {risk_label}", "Device risk", result.android_security_risk)?;
    }
    writeln!(out)?;

    writeln!(out, "Score: {}/10", result.score_out_of_ten())?;
    writeln!(out)?;

    writeln!(out, "Recommendations:")?;
    for recommendation in build_recommendations(result) {
        writeln!(out, "  \u{2022} {recommendation}")?;
    }

    Ok(())
}
