use rusqlite::{params, Connection};

use crate::db::StoreError;
use crate::models::NotificationPreferences;

/// Get the notification preferences (singleton row, id=1, seeded by migration).
pub fn fetch_preferences(conn: &Connection) -> Result<NotificationPreferences, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT water_reminders, meal_reminders, sleep_reminders, weekly_reports,
         email_notifications, push_notifications
         FROM notification_preferences WHERE id = 1",
    )?;
    stmt.query_row([], |row| {
        Ok(NotificationPreferences {
            water_reminders: row.get::<_, i32>(0)? != 0,
            meal_reminders: row.get::<_, i32>(1)? != 0,
            sleep_reminders: row.get::<_, i32>(2)? != 0,
            weekly_reports: row.get::<_, i32>(3)? != 0,
            email_notifications: row.get::<_, i32>(4)? != 0,
            push_notifications: row.get::<_, i32>(5)? != 0,
        })
    })
    .map_err(StoreError::from)
}

/// Overwrite all notification toggles.
pub fn update_preferences(
    conn: &Connection,
    prefs: &NotificationPreferences,
) -> Result<(), StoreError> {
    conn.execute(
        "UPDATE notification_preferences SET
         water_reminders = ?1,
         meal_reminders = ?2,
         sleep_reminders = ?3,
         weekly_reports = ?4,
         email_notifications = ?5,
         push_notifications = ?6
         WHERE id = 1",
        params![
            prefs.water_reminders as i32,
            prefs.meal_reminders as i32,
            prefs.sleep_reminders as i32,
            prefs.weekly_reports as i32,
            prefs.email_notifications as i32,
            prefs.push_notifications as i32,
        ],
    )?;
    Ok(())
}
