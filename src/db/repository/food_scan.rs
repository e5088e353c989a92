use std::str::FromStr;

use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db::StoreError;
use crate::models::enums::{MealType, ScanType};
use crate::models::FoodScan;

pub fn insert_food_scan(conn: &Connection, scan: &FoodScan) -> Result<(), StoreError> {
    conn.execute(
        "INSERT INTO food_scans (id, name, calories, protein, carbs, fat, fiber, sugar,
         sodium, date, scan_type, meal_type, image_url, barcode)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params![
            scan.id.to_string(),
            scan.name,
            scan.calories,
            scan.protein,
            scan.carbs,
            scan.fat,
            scan.fiber,
            scan.sugar,
            scan.sodium,
            scan.date,
            scan.scan_type.as_str(),
            scan.meal_type.map(|m| m.as_str()),
            scan.image_url,
            scan.barcode,
        ],
    )?;
    Ok(())
}

/// All logged food, in insertion order.
pub fn get_food_scans(conn: &Connection) -> Result<Vec<FoodScan>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, calories, protein, carbs, fat, fiber, sugar, sodium, date,
         scan_type, meal_type, image_url, barcode
         FROM food_scans ORDER BY rowid",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, u32>(2)?,
            row.get::<_, u32>(3)?,
            row.get::<_, u32>(4)?,
            row.get::<_, u32>(5)?,
            row.get::<_, u32>(6)?,
            row.get::<_, u32>(7)?,
            row.get::<_, u32>(8)?,
            row.get::<_, String>(9)?,
            row.get::<_, String>(10)?,
            row.get::<_, Option<String>>(11)?,
            row.get::<_, Option<String>>(12)?,
            row.get::<_, Option<String>>(13)?,
        ))
    })?;

    scan_rows_to_vec(rows)
}

/// Food logged on one day, in insertion order. `date` is compared as the
/// exact `YYYY-MM-DD` string it was stored with.
pub fn get_food_scans_for_date(conn: &Connection, date: &str) -> Result<Vec<FoodScan>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, calories, protein, carbs, fat, fiber, sugar, sodium, date,
         scan_type, meal_type, image_url, barcode
         FROM food_scans WHERE date = ?1 ORDER BY rowid",
    )?;

    let rows = stmt.query_map([date], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, u32>(2)?,
            row.get::<_, u32>(3)?,
            row.get::<_, u32>(4)?,
            row.get::<_, u32>(5)?,
            row.get::<_, u32>(6)?,
            row.get::<_, u32>(7)?,
            row.get::<_, u32>(8)?,
            row.get::<_, String>(9)?,
            row.get::<_, String>(10)?,
            row.get::<_, Option<String>>(11)?,
            row.get::<_, Option<String>>(12)?,
            row.get::<_, Option<String>>(13)?,
        ))
    })?;

    scan_rows_to_vec(rows)
}

pub fn delete_food_scan(conn: &Connection, id: &Uuid) -> Result<(), StoreError> {
    let affected = conn.execute(
        "DELETE FROM food_scans WHERE id = ?1",
        params![id.to_string()],
    )?;
    if affected == 0 {
        return Err(StoreError::NotFound {
            entity_type: "food_scan".into(),
            id: id.to_string(),
        });
    }
    Ok(())
}

type ScanRow = (
    String, String, u32,
    u32, u32, u32, u32, u32, u32,
    String, String, Option<String>,
    Option<String>, Option<String>,
);

fn scan_rows_to_vec(
    rows: rusqlite::MappedRows<'_, impl FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<ScanRow>>,
) -> Result<Vec<FoodScan>, StoreError> {
    let mut scans = Vec::new();
    for row in rows {
        let (
            id, name, calories, protein, carbs, fat, fiber, sugar, sodium,
            date, scan_type, meal_type, image_url, barcode,
        ) = row?;
        scans.push(FoodScan {
            id: Uuid::parse_str(&id)
                .map_err(|e| StoreError::ConstraintViolation(e.to_string()))?,
            name,
            calories,
            protein,
            carbs,
            fat,
            fiber,
            sugar,
            sodium,
            date,
            scan_type: ScanType::from_str(&scan_type)?,
            meal_type: meal_type.map(|m| MealType::from_str(&m)).transpose()?,
            image_url,
            barcode,
        });
    }
    Ok(scans)
}
