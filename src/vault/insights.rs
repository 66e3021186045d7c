//! Aggregate security metrics over the whole collection.
//!
//! Recomputed from scratch on every call; nothing is cached or indexed.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use serde::Serialize;

use super::record::{CredentialRecord, Strength};

/// Default age after which a password counts as old.
pub const DEFAULT_STALE_AFTER_DAYS: u64 = 90;

/// Counts and the derived 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityInsights {
    pub total_passwords: usize,
    pub weak_passwords: usize,
    pub reused_passwords: usize,
    pub old_passwords: usize,
    pub security_score: u32,
}

/// Compute insights for `records` as of `today`.
///
/// - reused: every record whose exact password appears in at least one
///   other record (three records sharing a password count three).
/// - old: `last_updated` strictly before `today - stale_after_days`.
/// - score: `round(max(0, 100 - weak% - reused%/2 - old%/4))`, with all
///   percentages zero for an empty collection.
pub fn compute(records: &[CredentialRecord], today: NaiveDate, stale_after_days: u64) -> SecurityInsights {
    let total = records.len();

    let weak = records
        .iter()
        .filter(|r| r.strength == Strength::Weak)
        .count();

    let mut uses: HashMap<&str, usize> = HashMap::with_capacity(total);
    for r in records {
        *uses.entry(r.password.as_str()).or_insert(0) += 1;
    }
    let reused = records
        .iter()
        .filter(|r| uses.get(r.password.as_str()).copied().unwrap_or(0) > 1)
        .count();

    let old = match today.checked_sub_days(Days::new(stale_after_days)) {
        Some(cutoff) => records.iter().filter(|r| r.last_updated < cutoff).count(),
        None => 0,
    };

    SecurityInsights {
        total_passwords: total,
        weak_passwords: weak,
        reused_passwords: reused,
        old_passwords: old,
        security_score: score(total, weak, reused, old),
    }
}

fn score(total: usize, weak: usize, reused: usize, old: usize) -> u32 {
    let pct = |count: usize| {
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64 * 100.0
        }
    };

    let raw = 100.0 - pct(weak) - pct(reused) / 2.0 - pct(old) / 4.0;
    // Bounded to 0..=100, so the cast cannot truncate.
    raw.max(0.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::strength::classify;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(id: &str, password: &str, last_updated: NaiveDate) -> CredentialRecord {
        CredentialRecord {
            id: id.into(),
            title: format!("site {id}"),
            username: "user".into(),
            password: password.into(),
            url: "#".into(),
            strength: classify(password),
            last_updated,
        }
    }

    #[test]
    fn empty_vault_scores_100() {
        let i = compute(&[], date(2024, 1, 1), 90);
        assert_eq!(
            i,
            SecurityInsights {
                total_passwords: 0,
                weak_passwords: 0,
                reused_passwords: 0,
                old_passwords: 0,
                security_score: 100,
            }
        );
    }

    #[test]
    fn reuse_counts_every_sharing_record() {
        let today = date(2024, 1, 1);
        let records = [
            record("1", "x", today),
            record("2", "x", today),
            record("3", "y", today),
        ];
        assert_eq!(compute(&records, today, 90).reused_passwords, 2);
    }

    #[test]
    fn triple_reuse_counts_three() {
        let today = date(2024, 1, 1);
        let records = [
            record("1", "Same-Pass-123!", today),
            record("2", "Same-Pass-123!", today),
            record("3", "Same-Pass-123!", today),
            record("4", "Other-Pass-456!", today),
        ];
        assert_eq!(compute(&records, today, 90).reused_passwords, 3);
    }

    #[test]
    fn old_is_strictly_before_cutoff() {
        let today = date(2024, 4, 1);
        let cutoff = today.checked_sub_days(Days::new(90)).unwrap();
        let records = [
            record("1", "Tweet!2023Secure", cutoff),
            record("2", "FB_secure789!", cutoff.pred_opt().unwrap()),
        ];
        let i = compute(&records, today, 90);
        assert_eq!(i.old_passwords, 1);
    }

    #[test]
    fn score_formula() {
        // 4 records: 1 weak, 2 reused, 1 old.
        // 100 - 25 - 50/2 - 25/4 = 43.75 -> 44
        let today = date(2024, 6, 1);
        let records = [
            record("1", "shop123", today),
            record("2", "Tweet!2023Secure", today),
            record("3", "Tweet!2023Secure", today),
            record("4", "FB_secure789!", date(2023, 1, 1)),
        ];
        let i = compute(&records, today, 90);
        assert_eq!(i.weak_passwords, 1);
        assert_eq!(i.reused_passwords, 2);
        assert_eq!(i.old_passwords, 1);
        assert_eq!(i.security_score, 44);
    }

    #[test]
    fn score_never_negative() {
        let long_ago = date(2020, 1, 1);
        let records = [record("1", "a", long_ago), record("2", "a", long_ago)];
        // 100 - 100 - 50 - 25 < 0
        assert_eq!(compute(&records, date(2024, 1, 1), 90).security_score, 0);
    }

    #[test]
    fn demo_seed_as_of_2024() {
        let records = crate::vault::seed::demo_records();
        // All five seed dates are well over 90 days before mid-2024.
        let i = compute(&records, date(2024, 6, 1), 90);
        assert_eq!(i.total_passwords, 5);
        assert_eq!(i.weak_passwords, 1);
        assert_eq!(i.reused_passwords, 0);
        assert_eq!(i.old_passwords, 5);
        // 100 - 20 - 0 - 25 = 55
        assert_eq!(i.security_score, 55);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_string(&compute(&[], date(2024, 1, 1), 90)).unwrap();
        assert!(json.contains("\"securityScore\":100"));
        assert!(json.contains("\"reusedPasswords\":0"));
    }
}
