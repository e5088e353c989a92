use std::str::FromStr;

use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db::StoreError;
use crate::models::enums::RiskLevel;
use crate::models::RiskAssessment;

/// Append an assessment to the history. Rows are never updated or deleted.
pub fn insert_risk_assessment(
    conn: &Connection,
    assessment: &RiskAssessment,
) -> Result<(), StoreError> {
    let suggestions_json =
        serde_json::to_string(&assessment.suggestions).unwrap_or_else(|_| "[]".to_string());

    conn.execute(
        "INSERT INTO risk_assessments (id, date, score, level, suggestions)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            assessment.id.to_string(),
            assessment.date,
            assessment.score,
            assessment.level.as_str(),
            suggestions_json,
        ],
    )?;
    Ok(())
}

/// The full assessment history, in insertion order.
pub fn get_risk_history(conn: &Connection) -> Result<Vec<RiskAssessment>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, date, score, level, suggestions FROM risk_assessments ORDER BY rowid",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, u8>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut history = Vec::new();
    for row in rows {
        let (id, date, score, level, suggestions_json) = row?;
        history.push(RiskAssessment {
            id: Uuid::parse_str(&id)
                .map_err(|e| StoreError::ConstraintViolation(e.to_string()))?,
            date,
            score,
            level: RiskLevel::from_str(&level)?,
            suggestions: serde_json::from_str(&suggestions_json).unwrap_or_default(),
        });
    }
    Ok(history)
}

/// The most recently recorded assessment, if any.
pub fn get_latest_risk_assessment(
    conn: &Connection,
) -> Result<Option<RiskAssessment>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, date, score, level, suggestions FROM risk_assessments
         ORDER BY rowid DESC LIMIT 1",
    )?;

    let row = stmt.query_row([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, u8>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
        ))
    });

    let (id, date, score, level, suggestions_json) = match row {
        Ok(r) => r,
        Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
        Err(e) => return Err(StoreError::from(e)),
    };

    Ok(Some(RiskAssessment {
        id: Uuid::parse_str(&id).map_err(|e| StoreError::ConstraintViolation(e.to_string()))?,
        date,
        score,
        level: RiskLevel::from_str(&level)?,
        suggestions: serde_json::from_str(&suggestions_json).unwrap_or_default(),
    }))
}
