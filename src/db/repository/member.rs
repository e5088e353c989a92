use std::str::FromStr;

use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db::StoreError;
use crate::models::enums::Gender;
use crate::models::FamilyMember;

pub fn insert_family_member(conn: &Connection, member: &FamilyMember) -> Result<(), StoreError> {
    let conditions_json =
        serde_json::to_string(&member.existing_conditions).unwrap_or_else(|_| "[]".to_string());

    conn.execute(
        "INSERT INTO family_members (id, name, relationship, age, gender, height, weight,
         existing_conditions, health_focus, lifestyle, avatar_url)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            member.id.to_string(),
            member.name,
            member.relationship,
            member.age,
            member.gender.map(|g| g.as_str()),
            member.height,
            member.weight,
            conditions_json,
            member.health_focus,
            member.lifestyle,
            member.avatar_url,
        ],
    )?;
    Ok(())
}

/// All family members, in the order they were added.
pub fn get_family_members(conn: &Connection) -> Result<Vec<FamilyMember>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, relationship, age, gender, height, weight, existing_conditions,
         health_focus, lifestyle, avatar_url
         FROM family_members ORDER BY rowid",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, u32>(3)?,
            row.get::<_, Option<String>>(4)?,
            row.get::<_, Option<f64>>(5)?,
            row.get::<_, Option<f64>>(6)?,
            row.get::<_, String>(7)?,
            row.get::<_, Option<String>>(8)?,
            row.get::<_, Option<String>>(9)?,
            row.get::<_, Option<String>>(10)?,
        ))
    })?;

    member_rows_to_vec(rows)
}

pub fn get_family_member(
    conn: &Connection,
    id: &Uuid,
) -> Result<Option<FamilyMember>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, relationship, age, gender, height, weight, existing_conditions,
         health_focus, lifestyle, avatar_url
         FROM family_members WHERE id = ?1",
    )?;

    let row = stmt.query_row(params![id.to_string()], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, u32>(3)?,
            row.get::<_, Option<String>>(4)?,
            row.get::<_, Option<f64>>(5)?,
            row.get::<_, Option<f64>>(6)?,
            row.get::<_, String>(7)?,
            row.get::<_, Option<String>>(8)?,
            row.get::<_, Option<String>>(9)?,
            row.get::<_, Option<String>>(10)?,
        ))
    });

    match row {
        Ok(r) => Ok(Some(member_from_row(r)?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(StoreError::from(e)),
    }
}

/// Remove a member. Their stored reports go with them.
pub fn delete_family_member(conn: &Connection, id: &Uuid) -> Result<(), StoreError> {
    let affected = conn.execute(
        "DELETE FROM family_members WHERE id = ?1",
        params![id.to_string()],
    )?;
    if affected == 0 {
        return Err(StoreError::NotFound {
            entity_type: "family_member".into(),
            id: id.to_string(),
        });
    }
    Ok(())
}

type MemberRow = (
    String, String, String, u32,
    Option<String>, Option<f64>, Option<f64>,
    String, Option<String>, Option<String>, Option<String>,
);

fn member_from_row(row: MemberRow) -> Result<FamilyMember, StoreError> {
    let (
        id, name, relationship, age, gender, height, weight,
        conditions_json, health_focus, lifestyle, avatar_url,
    ) = row;
    Ok(FamilyMember {
        id: Uuid::parse_str(&id).map_err(|e| StoreError::ConstraintViolation(e.to_string()))?,
        name,
        relationship,
        age,
        gender: gender.map(|g| Gender::from_str(&g)).transpose()?,
        height,
        weight,
        existing_conditions: serde_json::from_str(&conditions_json).unwrap_or_default(),
        health_focus,
        lifestyle,
        avatar_url,
    })
}

fn member_rows_to_vec(
    rows: rusqlite::MappedRows<'_, impl FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<MemberRow>>,
) -> Result<Vec<FamilyMember>, StoreError> {
    let mut members = Vec::new();
    for row in rows {
        members.push(member_from_row(row?)?);
    }
    Ok(members)
}
