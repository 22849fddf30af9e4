use chrono::NaiveDate;
use resignee_core::workflows::intake::{
    parse_resignees, parse_with_diagnostics, RecordRejection, FIELD_COUNT,
};

const FIRST_NOTICE: &str = "10234

03/01/2019

CC-1201

Garcia

Maria

Lopez

Accounts Payable Specialist

Rank and File

Finance

06/14/2024";

const SECOND_NOTICE: &str = "EXT-5521
07/22/2021
CC-3300
Tan
Kevin
Uy
Network Engineer
Supervisor
Information Technology
06/21/2024";

#[test]
fn empty_input_yields_no_records() {
    assert!(parse_resignees("").is_empty());
}

#[test]
fn blank_only_input_yields_no_records() {
    assert!(parse_resignees("\n   \n\t\n\r\n").is_empty());
}

#[test]
fn ten_lines_map_positionally() {
    let records = parse_resignees(FIRST_NOTICE);
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.employee_no, "10234");
    assert_eq!(record.date_hired, "03/01/2019");
    assert_eq!(record.cost_center, "CC-1201");
    assert_eq!(record.last_name, "Garcia");
    assert_eq!(record.first_name, "Maria");
    assert_eq!(record.middle_name, "Lopez");
    assert_eq!(record.position_title, "Accounts Payable Specialist");
    assert_eq!(record.rank, "Rank and File");
    assert_eq!(record.department, "Finance");
    assert_eq!(record.last_day, "06/14/2024");
    assert_eq!(record.date_hired_date(), NaiveDate::from_ymd_opt(2019, 3, 1));
}

#[test]
fn indented_lines_are_trimmed() {
    let indented = SECOND_NOTICE
        .lines()
        .map(|line| format!("    {line}  "))
        .collect::<Vec<_>>()
        .join("\n");
    let records = parse_resignees(&indented);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].employee_no, "EXT-5521");
    assert_eq!(records[0].position_title, "Network Engineer");
}

#[test]
fn trailing_partial_chunk_is_dropped() {
    let raw = format!("{FIRST_NOTICE}\n20001\n01/01/2020\nCC-1\nLee\nAnn");
    let outcome = parse_with_diagnostics(&raw);

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].employee_no, "10234");
    assert_eq!(outcome.dropped_lines, 5);
    assert!(outcome.rejected.is_empty());
}

#[test]
fn malformed_second_chunk_is_skipped() {
    let malformed = SECOND_NOTICE.replace("06/21/2024", "2024-06-21");
    let raw = format!("{FIRST_NOTICE}\n{malformed}");

    let records = parse_resignees(&raw);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].employee_no, "10234");

    let outcome = parse_with_diagnostics(&raw);
    assert_eq!(outcome.rejected.len(), 1);
    assert_eq!(outcome.rejected[0].employee_no, "EXT-5521");
    assert!(matches!(
        outcome.rejected[0].reason,
        RecordRejection::InvalidDate {
            field: "last_day",
            ..
        }
    ));
}

#[test]
fn malformed_chunk_does_not_stop_later_chunks() {
    let malformed = FIRST_NOTICE.replace("03/01/2019", "13/45/2019");
    let raw = format!("{malformed}\n\n\n{SECOND_NOTICE}");

    let records = parse_resignees(&raw);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].employee_no, "EXT-5521");
}

#[test]
fn output_preserves_order_without_deduplication() {
    let raw = format!("{SECOND_NOTICE}\n{FIRST_NOTICE}\n{SECOND_NOTICE}");
    let employee_numbers: Vec<_> = parse_resignees(&raw)
        .into_iter()
        .map(|record| record.employee_no)
        .collect();
    assert_eq!(employee_numbers, vec!["EXT-5521", "10234", "EXT-5521"]);
}

#[test]
fn parsing_is_restartable() {
    let raw = format!("{FIRST_NOTICE}\n{SECOND_NOTICE}");
    assert_eq!(parse_resignees(&raw), parse_resignees(&raw));
    assert_eq!(FIELD_COUNT, 10);
}
