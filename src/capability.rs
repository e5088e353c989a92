//! Capability checks for subscription-gated features.
//!
//! Gating is a single expiry-aware predicate instead of plan-string
//! comparisons scattered through callers. An expired Premium plan
//! grants nothing.

use chrono::{DateTime, Months, Utc};

use crate::models::{SubscriptionPlan, UserAccount};

/// Features that require an active Premium plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    AiCoach,
    FamilyDashboard,
    ReportAnalysis,
}

/// True when the plan is Premium and not past its expiry. A missing
/// expiry means a plan with no end date; an unreadable one counts as
/// expired.
fn plan_active(account: &UserAccount, now: DateTime<Utc>) -> bool {
    if account.plan != SubscriptionPlan::Premium {
        return false;
    }
    match &account.plan_expires_at {
        None => true,
        Some(raw) => match DateTime::parse_from_rfc3339(raw) {
            Ok(expiry) => expiry > now,
            Err(_) => false,
        },
    }
}

pub fn has_capability(account: &UserAccount, capability: Capability, now: DateTime<Utc>) -> bool {
    match capability {
        Capability::AiCoach | Capability::FamilyDashboard | Capability::ReportAnalysis => {
            plan_active(account, now)
        }
    }
}

/// Switch the account to Premium, expiring one month from `now`.
pub fn upgrade_to_premium(account: &mut UserAccount, now: DateTime<Utc>) {
    let expires = now.checked_add_months(Months::new(1)).unwrap_or(now);
    account.plan = SubscriptionPlan::Premium;
    account.plan_expires_at = Some(expires.to_rfc3339());

    tracing::info!(account = %account.id, expires = %expires, "Plan upgraded to premium");
}

/// Switch the account back to Free and clear the expiry.
pub fn downgrade_to_free(account: &mut UserAccount) {
    account.plan = SubscriptionPlan::Free;
    account.plan_expires_at = None;

    tracing::info!(account = %account.id, "Plan downgraded to free");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const ALL: [Capability; 3] = [
        Capability::AiCoach,
        Capability::FamilyDashboard,
        Capability::ReportAnalysis,
    ];

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn free_plan_has_no_capabilities() {
        let account = UserAccount::new("Dana");
        for capability in ALL {
            assert!(!has_capability(&account, capability, noon()));
        }
    }

    #[test]
    fn active_premium_has_all_capabilities() {
        let mut account = UserAccount::new("Dana");
        upgrade_to_premium(&mut account, noon());
        for capability in ALL {
            assert!(has_capability(&account, capability, noon()));
        }
    }

    #[test]
    fn premium_without_expiry_never_lapses() {
        let mut account = UserAccount::new("Dana");
        account.plan = SubscriptionPlan::Premium;
        account.plan_expires_at = None;
        assert!(has_capability(&account, Capability::AiCoach, noon()));
    }

    #[test]
    fn expired_premium_is_treated_as_free() {
        let mut account = UserAccount::new("Dana");
        account.plan = SubscriptionPlan::Premium;
        account.plan_expires_at = Some("2025-02-01T00:00:00+00:00".into());
        for capability in ALL {
            assert!(!has_capability(&account, capability, noon()));
        }
    }

    #[test]
    fn unreadable_expiry_counts_as_expired() {
        let mut account = UserAccount::new("Dana");
        account.plan = SubscriptionPlan::Premium;
        account.plan_expires_at = Some("next month".into());
        assert!(!has_capability(&account, Capability::FamilyDashboard, noon()));
    }

    #[test]
    fn upgrade_sets_expiry_one_month_out() {
        let mut account = UserAccount::new("Dana");
        upgrade_to_premium(&mut account, noon());

        assert_eq!(account.plan, SubscriptionPlan::Premium);
        let expiry = DateTime::parse_from_rfc3339(account.plan_expires_at.as_deref().unwrap())
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(expiry, Utc.with_ymd_and_hms(2025, 4, 10, 12, 0, 0).unwrap());
    }

    #[test]
    fn downgrade_clears_expiry() {
        let mut account = UserAccount::new("Dana");
        upgrade_to_premium(&mut account, noon());
        downgrade_to_free(&mut account);

        assert_eq!(account.plan, SubscriptionPlan::Free);
        assert!(account.plan_expires_at.is_none());
    }
}
