use super::category::DeactivationCategory;
use super::{evaluate, DeactivationVerdict};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Deactivation timestamps recorded per system; each is set independently by IT staff.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeactivationDates {
    pub batch_um: Option<NaiveDateTime>,
    pub third_party: Option<NaiveDateTime>,
    pub email: Option<NaiveDateTime>,
    pub windows: Option<NaiveDateTime>,
}

impl DeactivationDates {
    pub fn get(&self, category: DeactivationCategory) -> Option<NaiveDateTime> {
        match category {
            DeactivationCategory::BatchUm => self.batch_um,
            DeactivationCategory::ThirdParty => self.third_party,
            DeactivationCategory::Email => self.email,
            DeactivationCategory::Windows => self.windows,
        }
    }

    pub fn set(&mut self, category: DeactivationCategory, value: Option<NaiveDateTime>) {
        let slot = match category {
            DeactivationCategory::BatchUm => &mut self.batch_um,
            DeactivationCategory::ThirdParty => &mut self.third_party,
            DeactivationCategory::Email => &mut self.email,
            DeactivationCategory::Windows => &mut self.windows,
        };
        *slot = value;
    }
}

/// A resignee as currently persisted. Verdicts are recomputed from it on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResigneeSnapshot {
    pub employee_no: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub position_title: String,
    pub department: String,
    pub last_day: NaiveDate,
    pub hr_notified_at: NaiveDateTime,
    pub deactivations: DeactivationDates,
    pub processed_at: Option<NaiveDateTime>,
    pub remarks: String,
}

impl ResigneeSnapshot {
    pub fn display_name(&self) -> String {
        let name = format!(
            "{}, {} {}",
            self.last_name, self.first_name, self.middle_name
        );
        name.trim_end().to_string()
    }

    pub fn is_processed(&self) -> bool {
        self.processed_at.is_some()
    }

    pub fn deactivation_on(&self, category: DeactivationCategory) -> Option<NaiveDate> {
        self.deactivations.get(category).map(|at| at.date())
    }

    pub fn verdict(&self, category: DeactivationCategory) -> DeactivationVerdict {
        evaluate(
            self.last_day,
            self.deactivation_on(category),
            self.hr_notified_at.date(),
            category,
        )
    }

    pub fn verdicts(&self) -> [(DeactivationCategory, DeactivationVerdict); 4] {
        DeactivationCategory::ordered().map(|category| (category, self.verdict(category)))
    }

    pub fn has_late_deactivation(&self) -> bool {
        self.verdicts()
            .iter()
            .any(|(_, verdict)| verdict.is_late())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotImportError {
    #[error("failed to read resignee export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid resignee CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: missing required column '{column}'")]
    MissingValue { row: usize, column: &'static str },
    #[error("row {row}: '{value}' in column '{column}' is not a recognized date")]
    InvalidDate {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// Loads resignee snapshots from a CSV export of the persisted resignee table.
pub struct SnapshotImporter;

impl SnapshotImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<ResigneeSnapshot>, SnapshotImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Rows are numbered from 1, excluding the header.
    pub fn from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<ResigneeSnapshot>, SnapshotImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut snapshots = Vec::new();

        for (position, record) in csv_reader.deserialize::<SnapshotRow>().enumerate() {
            let row = record?;
            snapshots.push(row.into_snapshot(position + 1)?);
        }

        debug!(rows = snapshots.len(), "imported resignee snapshots");
        Ok(snapshots)
    }
}

#[derive(Debug, Deserialize)]
struct SnapshotRow {
    employee_no: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    middle_name: String,
    #[serde(default)]
    position_title: String,
    #[serde(default)]
    department: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    last_day: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    date_hr_emailed: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    um_date_deac: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    tp_date_deac: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    email_date_deac: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    windows_date_deac: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    processed_date_time: Option<String>,
    #[serde(default)]
    remarks: String,
}

impl SnapshotRow {
    fn into_snapshot(self, row: usize) -> Result<ResigneeSnapshot, SnapshotImportError> {
        let last_day = required_timestamp(row, "last_day", self.last_day.as_deref())?.date();
        let hr_notified_at =
            required_timestamp(row, "date_hr_emailed", self.date_hr_emailed.as_deref())?;

        let deactivations = DeactivationDates {
            batch_um: optional_timestamp(row, "um_date_deac", self.um_date_deac.as_deref())?,
            third_party: optional_timestamp(row, "tp_date_deac", self.tp_date_deac.as_deref())?,
            email: optional_timestamp(row, "email_date_deac", self.email_date_deac.as_deref())?,
            windows: optional_timestamp(
                row,
                "windows_date_deac",
                self.windows_date_deac.as_deref(),
            )?,
        };
        let processed_at = optional_timestamp(
            row,
            "processed_date_time",
            self.processed_date_time.as_deref(),
        )?;

        Ok(ResigneeSnapshot {
            employee_no: self.employee_no,
            last_name: self.last_name,
            first_name: self.first_name,
            middle_name: self.middle_name,
            position_title: self.position_title,
            department: self.department,
            last_day,
            hr_notified_at,
            deactivations,
            processed_at,
            remarks: self.remarks,
        })
    }
}

fn required_timestamp(
    row: usize,
    column: &'static str,
    value: Option<&str>,
) -> Result<NaiveDateTime, SnapshotImportError> {
    optional_timestamp(row, column, value)?
        .ok_or(SnapshotImportError::MissingValue { row, column })
}

fn optional_timestamp(
    row: usize,
    column: &'static str,
    value: Option<&str>,
) -> Result<Option<NaiveDateTime>, SnapshotImportError> {
    match value {
        None => Ok(None),
        Some(raw) => parse_timestamp(raw)
            .map(Some)
            .ok_or_else(|| SnapshotImportError::InvalidDate {
                row,
                column,
                value: raw.to_string(),
            }),
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Keep the wall-clock day the value was written on; only the date is ever evaluated.
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_local());
    }

    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }

    for format in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}
