use super::super::category::DeactivationCategory;
use super::super::DeactivationVerdict;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryOutcomeView {
    pub category: DeactivationCategory,
    pub category_label: &'static str,
    /// Hidden for "no account" markers so the sentinel date never reaches a report.
    pub deactivated_on: Option<NaiveDate>,
    pub verdict: DeactivationVerdict,
    pub verdict_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResigneeRowView {
    pub employee_no: String,
    pub name: String,
    pub position_title: String,
    pub department: String,
    pub last_day: NaiveDate,
    pub hr_notified_on: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<NaiveDateTime>,
    pub outcomes: Vec<CategoryOutcomeView>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub remarks: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryTallyEntry {
    pub category: DeactivationCategory,
    pub category_label: &'static str,
    pub late: usize,
    pub on_time: usize,
    pub pending: usize,
    pub no_account: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeactivationReportSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    pub resignees: Vec<ResigneeRowView>,
    pub category_tallies: Vec<CategoryTallyEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub late_employees: Vec<String>,
}
