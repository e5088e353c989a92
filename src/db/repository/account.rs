use std::str::FromStr;

use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db::StoreError;
use crate::models::enums::{Gender, SubscriptionPlan};
use crate::models::UserAccount;

/// Save the account profile (singleton row, id=1).
pub fn save_account(conn: &Connection, account: &UserAccount) -> Result<(), StoreError> {
    let conditions_json =
        serde_json::to_string(&account.health_conditions).unwrap_or_else(|_| "[]".to_string());

    conn.execute(
        "INSERT OR REPLACE INTO accounts (id, uuid, name, age, gender, height, weight, city,
         health_conditions, plan, plan_expires_at)
         VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            account.id.to_string(),
            account.name,
            account.age,
            account.gender.map(|g| g.as_str()),
            account.height,
            account.weight,
            account.city,
            conditions_json,
            account.plan.as_str(),
            account.plan_expires_at,
        ],
    )?;
    Ok(())
}

/// Fetch the account profile. Returns None before onboarding has run.
pub fn fetch_account(conn: &Connection) -> Result<Option<UserAccount>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT uuid, name, age, gender, height, weight, city, health_conditions, plan,
         plan_expires_at
         FROM accounts WHERE id = 1",
    )?;

    let row = stmt.query_row([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, Option<u32>>(2)?,
            row.get::<_, Option<String>>(3)?,
            row.get::<_, Option<f64>>(4)?,
            row.get::<_, Option<f64>>(5)?,
            row.get::<_, Option<String>>(6)?,
            row.get::<_, String>(7)?,
            row.get::<_, String>(8)?,
            row.get::<_, Option<String>>(9)?,
        ))
    });

    let (uuid, name, age, gender, height, weight, city, conditions_json, plan, plan_expires_at) =
        match row {
            Ok(r) => r,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(StoreError::from(e)),
        };

    Ok(Some(UserAccount {
        id: Uuid::parse_str(&uuid).map_err(|e| StoreError::ConstraintViolation(e.to_string()))?,
        name,
        age,
        gender: gender.map(|g| Gender::from_str(&g)).transpose()?,
        height,
        weight,
        city,
        health_conditions: serde_json::from_str(&conditions_json).unwrap_or_default(),
        plan: SubscriptionPlan::from_str(&plan)?,
        plan_expires_at,
    }))
}
