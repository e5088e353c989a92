pub mod account;
pub mod assessment;
pub mod enums;
pub mod food;
pub mod member;
pub mod profile;
pub mod record;

pub use account::{NotificationPreferences, UserAccount};
pub use assessment::{RiskAssessment, ScoreBreakdown};
pub use enums::*;
pub use food::{FoodScan, WeightGoal};
pub use member::{FamilyMember, HealthReport};
pub use profile::{LifestyleSnapshot, SnapshotUpdate};
pub use record::HealthRecord;
