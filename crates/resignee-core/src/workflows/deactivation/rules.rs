use super::category::DeactivationCategory;
use chrono::{Datelike, NaiveDate, Weekday};

const NO_ACCOUNT_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2020, 1, 1) {
    Some(date) => date,
    None => panic!("no-account epoch must be a calendar date"),
};

/// Stored deactivation dates on or before this day mean the resignee never had an
/// account in that system. Persisted data relies on it, so it must not move.
pub const fn no_account_epoch() -> NaiveDate {
    NO_ACCOUNT_EPOCH
}

/// True when a stored deactivation date is the "no existing account" marker.
pub fn has_no_account(deactivated: NaiveDate) -> bool {
    deactivated <= no_account_epoch()
}

/// Decides whether a deactivation happened outside its grace window.
///
/// Missing deactivations and "no account" markers are never late. Batch UM is late when
/// HR notified IT after the last day or when the account outlived the last day. The other
/// systems allow the next calendar day, and a Friday resignation may be closed on the
/// Sunday or Monday after.
pub fn is_late(
    resigned: NaiveDate,
    deactivated: Option<NaiveDate>,
    hr_notified: NaiveDate,
    category: DeactivationCategory,
) -> bool {
    let Some(deactivated) = deactivated.filter(|date| !has_no_account(*date)) else {
        return false;
    };

    match category {
        DeactivationCategory::BatchUm => {
            if resigned < hr_notified {
                return true;
            }
            resigned < deactivated
        }
        DeactivationCategory::ThirdParty
        | DeactivationCategory::Email
        | DeactivationCategory::Windows => {
            if weekend_grace(resigned, deactivated) {
                return false;
            }
            if resigned.succ_opt() == Some(deactivated) {
                return false;
            }
            if deactivated <= resigned {
                return false;
            }
            true
        }
    }
}

// Matches on weekdays alone: any Sunday or Monday qualifies after a Friday last day.
fn weekend_grace(resigned: NaiveDate, deactivated: NaiveDate) -> bool {
    resigned.weekday() == Weekday::Fri
        && matches!(deactivated.weekday(), Weekday::Sun | Weekday::Mon)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn epoch_is_first_of_2020() {
        assert_eq!(no_account_epoch(), date(2020, 1, 1));
    }

    #[test]
    fn epoch_boundary_is_inclusive() {
        assert!(has_no_account(date(2020, 1, 1)));
        assert!(has_no_account(date(1970, 1, 1)));
        assert!(!has_no_account(date(2020, 1, 2)));
    }

    #[test]
    fn weekend_grace_requires_friday_resignation() {
        let friday = date(2024, 6, 14);
        assert!(weekend_grace(friday, date(2024, 6, 16)));
        assert!(weekend_grace(friday, date(2024, 6, 17)));
        assert!(!weekend_grace(friday, date(2024, 6, 18)));
        assert!(!weekend_grace(date(2024, 6, 13), date(2024, 6, 16)));
    }

    #[test]
    fn weekend_grace_is_weekday_only() {
        // A Monday three weeks after a Friday last day still matches the weekday rule.
        let friday = date(2024, 6, 14);
        let later_monday = date(2024, 7, 8);
        assert!(!is_late(
            friday,
            Some(later_monday),
            friday,
            DeactivationCategory::Windows
        ));
    }

    #[test]
    fn batch_um_ignores_weekend_grace() {
        let friday = date(2024, 6, 14);
        assert!(is_late(
            friday,
            Some(date(2024, 6, 17)),
            friday,
            DeactivationCategory::BatchUm
        ));
    }
}
