//! Session state — the explicit object that owns the snapshot and all
//! accumulated history.
//!
//! Engines stay pure: they only ever see `&LifestyleSnapshot` or
//! slices borrowed from here. The session is the single writer; the
//! assessment history is append-only and entries are never touched
//! after insertion.

use crate::models::{
    FoodScan, HealthRecord, LifestyleSnapshot, RiskAssessment, SnapshotUpdate,
};
use crate::nutrition;
use crate::risk;

/// Current local date as a `YYYY-MM-DD` string, the format scan and
/// record dates are kept in.
pub fn current_date() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[derive(Debug, Clone, Default)]
pub struct HealthSession {
    snapshot: LifestyleSnapshot,
    records: Vec<HealthRecord>,
    scans: Vec<FoodScan>,
    risk_history: Vec<RiskAssessment>,
}

impl HealthSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: LifestyleSnapshot) -> Self {
        Self {
            snapshot,
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> &LifestyleSnapshot {
        &self.snapshot
    }

    pub fn records(&self) -> &[HealthRecord] {
        &self.records
    }

    pub fn scans(&self) -> &[FoodScan] {
        &self.scans
    }

    pub fn risk_history(&self) -> &[RiskAssessment] {
        &self.risk_history
    }

    /// Merge a partial update into the snapshot. Only provided fields
    /// change.
    pub fn apply(&mut self, update: SnapshotUpdate) {
        self.snapshot.apply(update);
    }

    pub fn add_record(&mut self, record: HealthRecord) {
        self.records.push(record);
    }

    pub fn add_scan(&mut self, scan: FoodScan) {
        self.scans.push(scan);
    }

    /// Assess the current snapshot, stamp the result with a fresh id
    /// and the given date, and append it to the history.
    pub fn run_assessment(&mut self, date: &str) -> &RiskAssessment {
        let breakdown = risk::assess(&self.snapshot);
        let assessment = RiskAssessment::from_breakdown(breakdown, date.to_string());

        tracing::info!(
            score = assessment.score,
            level = assessment.level.as_str(),
            date,
            "Risk assessment recorded"
        );

        let index = self.risk_history.len();
        self.risk_history.push(assessment);
        &self.risk_history[index]
    }

    /// [`run_assessment`](Self::run_assessment) dated today.
    pub fn run_assessment_today(&mut self) -> &RiskAssessment {
        let date = current_date();
        self.run_assessment(&date)
    }

    pub fn latest_assessment(&self) -> Option<&RiskAssessment> {
        self.risk_history.last()
    }

    /// Calorie total for one date across the session's scans.
    pub fn daily_calories(&self, date: &str) -> u32 {
        nutrition::daily_calories(&self.scans, date)
    }
}
