use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db::StoreError;
use crate::models::HealthRecord;

pub fn insert_health_record(conn: &Connection, record: &HealthRecord) -> Result<(), StoreError> {
    conn.execute(
        "INSERT INTO health_records (id, date, sleep_hours, water_intake, stress_level,
         exercise_frequency, steps, weight, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            record.id.to_string(),
            record.date,
            record.sleep_hours,
            record.water_intake,
            record.stress_level,
            record.exercise_frequency,
            record.steps,
            record.weight,
            record.notes,
        ],
    )?;
    Ok(())
}

/// All daily logs, oldest first.
pub fn get_health_records(conn: &Connection) -> Result<Vec<HealthRecord>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, date, sleep_hours, water_intake, stress_level, exercise_frequency,
         steps, weight, notes
         FROM health_records ORDER BY date ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, f64>(2)?,
            row.get::<_, f64>(3)?,
            row.get::<_, u8>(4)?,
            row.get::<_, u8>(5)?,
            row.get::<_, Option<u32>>(6)?,
            row.get::<_, Option<f64>>(7)?,
            row.get::<_, Option<String>>(8)?,
        ))
    })?;

    let mut records = Vec::new();
    for row in rows {
        let (id, date, sleep_hours, water_intake, stress_level, exercise_frequency, steps, weight, notes) =
            row?;
        records.push(HealthRecord {
            id: Uuid::parse_str(&id)
                .map_err(|e| StoreError::ConstraintViolation(e.to_string()))?,
            date,
            sleep_hours,
            water_intake,
            stress_level,
            exercise_frequency,
            steps,
            weight,
            notes,
        });
    }
    Ok(records)
}
