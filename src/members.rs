//! Family-member report analysis.
//!
//! Uploaded reports go through an opaque analyzer collaborator; the
//! functions here classify the report, sift its insight lines, and
//! assemble the stored [`HealthReport`]. A failed analysis degrades to
//! a fixed fallback instead of erroring out.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{FamilyMember, HealthReport, ReportType};

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Report analysis unavailable: {0}")]
    Unavailable(String),

    #[error("Analyzer returned an unreadable payload: {0}")]
    Unreadable(String),
}

/// Analyzer output before it is attached to a member and stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportAnalysis {
    pub good_indicators: Vec<String>,
    pub focus_areas: Vec<String>,
    pub suggestions: Vec<String>,
    pub overall_assessment: String,
}

impl ReportAnalysis {
    /// Stand-in analysis used whenever the analyzer fails.
    pub fn fallback() -> Self {
        Self {
            good_indicators: vec!["Health report received and processed".into()],
            focus_areas: vec!["Consult with healthcare provider for detailed analysis".into()],
            suggestions: vec![
                "Regular check-ups recommended".into(),
                "Maintain healthy lifestyle".into(),
            ],
            overall_assessment: "Analysis completed - please consult healthcare provider".into(),
        }
    }
}

/// Report-analysis collaborator: raw report text plus the member it
/// belongs to in, structured analysis out.
pub trait ReportAnalyzer {
    fn analyze(
        &self,
        report_text: &str,
        member: &FamilyMember,
    ) -> Result<ReportAnalysis, AnalysisError>;
}

/// Keep insight lines that read as positive findings. Matching is a
/// plain substring check, so "No abnormal findings" passes through the
/// "normal" needle.
pub fn filter_good_indicators(insights: &[String]) -> Vec<String> {
    insights
        .iter()
        .filter(|line| {
            line.contains("normal") || line.contains("excellent") || line.contains("good")
        })
        .cloned()
        .collect()
}

/// Classify a report by its file name: blood-panel keywords win, then
/// physical-exam keywords, everything else is General.
pub fn infer_report_type(file_name: &str) -> ReportType {
    let lower = file_name.to_lowercase();
    if lower.contains("blood") || lower.contains("cbc") || lower.contains("lipid") {
        ReportType::BloodTest
    } else if lower.contains("physical") || lower.contains("exam") {
        ReportType::PhysicalExam
    } else {
        ReportType::General
    }
}

/// Drop a trailing `.ext` from a file name. Dots elsewhere stay.
fn strip_extension(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(idx) if idx + 1 < file_name.len() && !file_name[idx + 1..].contains('/') => {
            file_name[..idx].to_string()
        }
        _ => file_name.to_string(),
    }
}

/// Attach an analysis to a member as a stored report record.
pub fn build_report(
    member: &FamilyMember,
    file_name: &str,
    analysis: ReportAnalysis,
    created_at: &str,
) -> HealthReport {
    HealthReport {
        id: Uuid::new_v4(),
        member_id: member.id,
        report_name: strip_extension(file_name),
        report_type: infer_report_type(file_name),
        good_indicators: analysis.good_indicators,
        focus_areas: analysis.focus_areas,
        suggestions: analysis.suggestions,
        overall_assessment: analysis.overall_assessment,
        created_at: created_at.into(),
    }
}

/// Run the analyzer and build the stored report, degrading to the
/// fallback analysis when the analyzer fails.
pub fn analyze_report(
    analyzer: &dyn ReportAnalyzer,
    member: &FamilyMember,
    file_name: &str,
    report_text: &str,
    created_at: &str,
) -> HealthReport {
    let analysis = match analyzer.analyze(report_text, member) {
        Ok(analysis) => analysis,
        Err(error) => {
            tracing::warn!(member = %member.id, %error, "Report analysis failed, using fallback");
            ReportAnalysis::fallback()
        }
    };

    tracing::info!(
        member = %member.id,
        report = file_name,
        report_type = infer_report_type(file_name).as_str(),
        "Health report analyzed"
    );

    build_report(member, file_name, analysis, created_at)
}
