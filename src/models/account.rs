use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{Gender, SubscriptionPlan};

/// The account owner's profile row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: Uuid,
    pub name: String,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub height: Option<f64>, // cm
    pub weight: Option<f64>, // kg
    pub city: Option<String>,
    pub health_conditions: Vec<String>,
    pub plan: SubscriptionPlan,
    pub plan_expires_at: Option<String>, // RFC 3339
}

impl UserAccount {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            age: None,
            gender: None,
            height: None,
            weight: None,
            city: None,
            health_conditions: Vec::new(),
            plan: SubscriptionPlan::Free,
            plan_expires_at: None,
        }
    }
}

/// Per-account notification toggles (singleton row in storage).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub water_reminders: bool,
    pub meal_reminders: bool,
    pub sleep_reminders: bool,
    pub weekly_reports: bool,
    pub email_notifications: bool,
    pub push_notifications: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            water_reminders: true,
            meal_reminders: true,
            sleep_reminders: true,
            weekly_reports: true,
            email_notifications: true,
            push_notifications: false,
        }
    }
}
