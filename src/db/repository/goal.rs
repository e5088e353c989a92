use std::str::FromStr;

use rusqlite::{params, Connection};

use crate::db::StoreError;
use crate::models::enums::GoalType;
use crate::models::WeightGoal;

/// Save the current weight goal (singleton row, id=1). A new goal replaces
/// the previous one.
pub fn save_weight_goal(conn: &Connection, goal: &WeightGoal) -> Result<(), StoreError> {
    conn.execute(
        "INSERT OR REPLACE INTO weight_goals (id, goal_type, current_weight, target_weight,
         timeframe_days, daily_calorie_target, created_at)
         VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            goal.goal_type.as_str(),
            goal.current_weight,
            goal.target_weight,
            goal.timeframe_days,
            goal.daily_calorie_target,
            goal.created_at,
        ],
    )?;
    Ok(())
}

/// Fetch the current weight goal. Returns None when no goal has been set.
pub fn fetch_weight_goal(conn: &Connection) -> Result<Option<WeightGoal>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT goal_type, current_weight, target_weight, timeframe_days,
         daily_calorie_target, created_at
         FROM weight_goals WHERE id = 1",
    )?;

    let row = stmt.query_row([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, f64>(1)?,
            row.get::<_, f64>(2)?,
            row.get::<_, u32>(3)?,
            row.get::<_, u32>(4)?,
            row.get::<_, String>(5)?,
        ))
    });

    let (goal_type, current_weight, target_weight, timeframe_days, daily_calorie_target, created_at) =
        match row {
            Ok(r) => r,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(StoreError::from(e)),
        };

    Ok(Some(WeightGoal {
        goal_type: GoalType::from_str(&goal_type)?,
        current_weight,
        target_weight,
        timeframe_days,
        daily_calorie_target,
        created_at,
    }))
}
