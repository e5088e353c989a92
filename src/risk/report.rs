//! Plain-text assessment report, suitable for download or sharing.

use super::HealthAnalysis;

const NO_FACTORS: &str = "No specific concerns identified.";
const NO_PREDICTIONS: &str = "Risk predictions not available.";
const NO_ACTIONS: &str = "No specific actions recommended.";
const NO_RECOMMENDATIONS: &str = "Continue maintaining your current health practices.";

/// Render the full analysis as a numbered plain-text report.
/// `generated` is the caller-formatted date shown in the header.
pub fn render_report(analysis: &HealthAnalysis, generated: &str) -> String {
    let mut out = String::new();

    out.push_str("HEALTHSCOPE AI - HEALTH ASSESSMENT REPORT\n");
    out.push_str(&format!("Generated: {generated}\n\n"));

    out.push_str(&format!("HEALTH SCORE: {}/100\n", analysis.breakdown.score));
    out.push_str(&format!("RISK LEVEL: {}\n\n", analysis.breakdown.level.label()));

    out.push_str("LIFESTYLE FACTORS ANALYSIS:\n");
    push_numbered(
        &mut out,
        analysis.factors.iter().map(|f| f.text.clone()),
        NO_FACTORS,
    );

    out.push_str("\nHEALTH RISK PREDICTIONS:\n");
    push_numbered(
        &mut out,
        analysis.predictions.iter().map(|p| {
            format!(
                "{}: {} Risk ({} confidence)",
                p.condition,
                p.risk.label(),
                p.confidence
            )
        }),
        NO_PREDICTIONS,
    );

    out.push_str("\nPERSONALIZED ACTION PLAN:\n");
    push_numbered(
        &mut out,
        analysis
            .focus
            .iter()
            .map(|item| format!("[{} Priority] {}", item.priority.label(), item.action)),
        NO_ACTIONS,
    );

    out.push_str("\nGENERAL RECOMMENDATIONS:\n");
    push_numbered(
        &mut out,
        analysis.breakdown.suggestions.iter().cloned(),
        NO_RECOMMENDATIONS,
    );

    out.push_str("\n---\n");
    out.push_str("This report was generated by Healthscope AI based on your health assessment responses.\n");
    out.push_str("Please consult with healthcare professionals for medical advice.\n");

    out
}

/// Suggested download filename for a report generated on `date` (YYYY-MM-DD).
pub fn report_filename(date: &str) -> String {
    format!("healthscope-ai-report-{date}.txt")
}

fn push_numbered<I>(out: &mut String, lines: I, fallback: &str)
where
    I: Iterator<Item = String>,
{
    let mut count = 0;
    for (i, line) in lines.enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, line));
        count += 1;
    }
    if count == 0 {
        out.push_str(fallback);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LifestyleSnapshot;
    use crate::risk::analyze;

    #[test]
    fn report_has_header_score_and_footer() {
        let analysis = analyze(&LifestyleSnapshot::default());
        let report = render_report(&analysis, "3/10/2025");

        assert!(report.starts_with("HEALTHSCOPE AI - HEALTH ASSESSMENT REPORT\n"));
        assert!(report.contains("Generated: 3/10/2025"));
        assert!(report.contains("HEALTH SCORE: 90/100"));
        assert!(report.contains("RISK LEVEL: Low"));
        assert!(report.ends_with("Please consult with healthcare professionals for medical advice.\n"));
    }

    #[test]
    fn sections_are_numbered() {
        let snap = LifestyleSnapshot {
            sleep_hours: 5.0,
            stress_level: 9,
            smoking: true,
            ..Default::default()
        };
        let report = render_report(&analyze(&snap), "3/10/2025");

        assert!(report.contains("1. Insufficient sleep may impact immune function and metabolism"));
        assert!(report.contains("1. Cardiovascular Disease: High Risk (85% confidence)"));
        assert!(report.contains("[High Priority] Improve sleep hygiene - aim for 7-9 hours nightly"));
    }

    #[test]
    fn empty_sections_fall_back_to_fixed_lines() {
        let snap = LifestyleSnapshot {
            sleep_hours: 8.0,
            water_intake: 3.0,
            exercise_frequency: 5,
            stress_level: 3,
            sleep_quality: Some(8),
            fruits_veggies: Some(5),
            screen_time: Some(2.0),
            regular_checkups: Some(true),
            ..Default::default()
        };
        let report = render_report(&analyze(&snap), "3/10/2025");

        assert!(report.contains(NO_FACTORS));
        assert!(report.contains(NO_ACTIONS));
        // A clean profile still gets the affirmation recommendation.
        assert!(report.contains("1. Great job! Keep maintaining your healthy lifestyle"));
    }

    #[test]
    fn filename_embeds_date() {
        assert_eq!(
            report_filename("2025-03-10"),
            "healthscope-ai-report-2025-03-10.txt"
        );
    }
}
