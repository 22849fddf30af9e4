use chrono::{Duration, NaiveDate};
use resignee_core::workflows::deactivation::{
    evaluate, has_no_account, is_late, no_account_epoch, DeactivationCategory,
    DeactivationVerdict,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn sentinel_dates_are_never_late() {
    let resigned = date(2024, 6, 10);
    let late_notice = date(2024, 6, 30);
    let sentinels = [
        no_account_epoch(),
        no_account_epoch() - Duration::days(1),
        date(1900, 1, 1),
    ];

    for deactivated in sentinels {
        assert!(has_no_account(deactivated));
        for category in DeactivationCategory::ordered() {
            assert!(
                !is_late(resigned, Some(deactivated), late_notice, category),
                "{category} flagged late for sentinel {deactivated}"
            );
        }
    }
}

#[test]
fn absent_deactivation_is_never_late() {
    let resigned = date(2024, 6, 10);
    for category in DeactivationCategory::ordered() {
        assert!(!is_late(resigned, None, date(2024, 6, 30), category));
    }
}

#[test]
fn weekend_deactivation_after_friday_is_on_time() {
    assert!(!is_late(
        date(2024, 6, 14),
        Some(date(2024, 6, 16)),
        date(2024, 6, 14),
        DeactivationCategory::ThirdParty
    ));
}

#[test]
fn monday_deactivation_after_friday_is_on_time() {
    assert!(!is_late(
        date(2024, 6, 14),
        Some(date(2024, 6, 17)),
        date(2024, 6, 14),
        DeactivationCategory::Email
    ));
}

#[test]
fn next_day_deactivation_is_on_time() {
    assert!(!is_late(
        date(2024, 6, 14),
        Some(date(2024, 6, 15)),
        date(2024, 6, 14),
        DeactivationCategory::Email
    ));
}

#[test]
fn three_days_late_without_exemption() {
    assert!(is_late(
        date(2024, 6, 10),
        Some(date(2024, 6, 13)),
        date(2024, 6, 10),
        DeactivationCategory::Windows
    ));
}

#[test]
fn tuesday_after_friday_is_late() {
    assert!(is_late(
        date(2024, 6, 14),
        Some(date(2024, 6, 18)),
        date(2024, 6, 14),
        DeactivationCategory::Windows
    ));
}

#[test]
fn early_deactivation_is_never_penalized() {
    for category in [
        DeactivationCategory::ThirdParty,
        DeactivationCategory::Email,
        DeactivationCategory::Windows,
    ] {
        assert!(!is_late(
            date(2024, 6, 12),
            Some(date(2024, 6, 3)),
            date(2024, 6, 1),
            category
        ));
        assert!(!is_late(
            date(2024, 6, 12),
            Some(date(2024, 6, 12)),
            date(2024, 6, 1),
            category
        ));
    }
}

#[test]
fn batch_um_late_when_hr_notified_after_last_day() {
    assert!(is_late(
        date(2024, 6, 10),
        Some(date(2024, 6, 11)),
        date(2024, 6, 12),
        DeactivationCategory::BatchUm
    ));
    assert!(is_late(
        date(2024, 6, 10),
        Some(date(2024, 6, 1)),
        date(2024, 6, 12),
        DeactivationCategory::BatchUm
    ));
}

#[test]
fn batch_um_on_last_day_is_on_time() {
    assert!(!is_late(
        date(2024, 6, 10),
        Some(date(2024, 6, 10)),
        date(2024, 6, 10),
        DeactivationCategory::BatchUm
    ));
}

#[test]
fn batch_um_has_no_next_day_grace() {
    assert!(is_late(
        date(2024, 6, 10),
        Some(date(2024, 6, 11)),
        date(2024, 6, 10),
        DeactivationCategory::BatchUm
    ));
}

#[test]
fn hr_notice_only_affects_batch_um() {
    let resigned = date(2024, 6, 10);
    let late_notice = date(2024, 6, 20);
    assert!(!is_late(
        resigned,
        Some(resigned),
        late_notice,
        DeactivationCategory::Email
    ));
    assert!(is_late(
        resigned,
        Some(resigned),
        late_notice,
        DeactivationCategory::BatchUm
    ));
}

#[test]
fn verdict_labels_drive_report_rendering() {
    let resigned = date(2024, 6, 10);
    let verdict = evaluate(
        resigned,
        Some(date(2019, 5, 1)),
        resigned,
        DeactivationCategory::Windows,
    );
    assert_eq!(verdict, DeactivationVerdict::NoAccount);
    assert_eq!(verdict.label(), "No Existing Account");
}
