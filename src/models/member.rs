use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{Gender, ReportType};

/// A family member whose records are tracked alongside the account owner's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: Uuid,
    pub name: String,
    pub relationship: String,
    pub age: u32,
    pub gender: Option<Gender>,
    pub height: Option<f64>, // cm
    pub weight: Option<f64>, // kg
    pub existing_conditions: Vec<String>,
    pub health_focus: Option<String>,
    pub lifestyle: Option<String>,
    pub avatar_url: Option<String>,
}

/// Analysis result for an uploaded health report, stored per member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub id: Uuid,
    pub member_id: Uuid,
    pub report_name: String,
    pub report_type: ReportType,
    pub good_indicators: Vec<String>,
    pub focus_areas: Vec<String>,
    pub suggestions: Vec<String>,
    pub overall_assessment: String,
    pub created_at: String, // YYYY-MM-DD
}
