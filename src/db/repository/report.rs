use std::str::FromStr;

use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db::StoreError;
use crate::models::enums::ReportType;
use crate::models::HealthReport;

pub fn insert_health_report(conn: &Connection, report: &HealthReport) -> Result<(), StoreError> {
    let good_json =
        serde_json::to_string(&report.good_indicators).unwrap_or_else(|_| "[]".to_string());
    let focus_json =
        serde_json::to_string(&report.focus_areas).unwrap_or_else(|_| "[]".to_string());
    let suggestions_json =
        serde_json::to_string(&report.suggestions).unwrap_or_else(|_| "[]".to_string());

    conn.execute(
        "INSERT INTO health_reports (id, member_id, report_name, report_type, good_indicators,
         focus_areas, suggestions, overall_assessment, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            report.id.to_string(),
            report.member_id.to_string(),
            report.report_name,
            report.report_type.as_str(),
            good_json,
            focus_json,
            suggestions_json,
            report.overall_assessment,
            report.created_at,
        ],
    )?;
    Ok(())
}

/// A member's stored reports, newest first.
pub fn get_reports_for_member(
    conn: &Connection,
    member_id: &Uuid,
) -> Result<Vec<HealthReport>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, member_id, report_name, report_type, good_indicators, focus_areas,
         suggestions, overall_assessment, created_at
         FROM health_reports WHERE member_id = ?1 ORDER BY created_at DESC",
    )?;

    let rows = stmt.query_map(params![member_id.to_string()], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, String>(5)?,
            row.get::<_, String>(6)?,
            row.get::<_, String>(7)?,
            row.get::<_, String>(8)?,
        ))
    })?;

    let mut reports = Vec::new();
    for row in rows {
        let (
            id, member_id, report_name, report_type, good_json, focus_json,
            suggestions_json, overall_assessment, created_at,
        ) = row?;
        reports.push(HealthReport {
            id: Uuid::parse_str(&id)
                .map_err(|e| StoreError::ConstraintViolation(e.to_string()))?,
            member_id: Uuid::parse_str(&member_id)
                .map_err(|e| StoreError::ConstraintViolation(e.to_string()))?,
            report_name,
            report_type: ReportType::from_str(&report_type)?,
            good_indicators: serde_json::from_str(&good_json).unwrap_or_default(),
            focus_areas: serde_json::from_str(&focus_json).unwrap_or_default(),
            suggestions: serde_json::from_str(&suggestions_json).unwrap_or_default(),
            overall_assessment,
            created_at,
        });
    }
    Ok(reports)
}
