use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of non-blank lines that make up one resignee in pasted HR text.
pub const FIELD_COUNT: usize = 10;

/// Date layout HR uses for hire and last-day fields.
pub const SOURCE_DATE_FORMAT: &str = "%m/%d/%Y";

/// One resignee as announced by HR, fields kept exactly as pasted.
///
/// The employee number is opaque: leading zeros and non-numeric identifiers are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResigneeRecord {
    pub employee_no: String,
    pub date_hired: String,
    pub cost_center: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub position_title: String,
    pub rank: String,
    pub department: String,
    pub last_day: String,
}

/// Why a chunk of pasted lines could not become a [`ResigneeRecord`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordRejection {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("{field} '{value}' is not a MM/DD/YYYY date")]
    InvalidDate { field: &'static str, value: String },
    #[error("last day {last_day} precedes hire date {date_hired}")]
    LastDayBeforeHire {
        date_hired: NaiveDate,
        last_day: NaiveDate,
    },
}

impl ResigneeRecord {
    /// Builds a record from fields in intake order: employee_no, date_hired, cost_center,
    /// last_name, first_name, middle_name, position_title, rank, department, last_day.
    pub fn from_fields(fields: &[&str]) -> Result<Self, RecordRejection> {
        let [
            employee_no,
            date_hired,
            cost_center,
            last_name,
            first_name,
            middle_name,
            position_title,
            rank,
            department,
            last_day,
        ] = fields
        else {
            return Err(RecordRejection::FieldCount {
                expected: FIELD_COUNT,
                found: fields.len(),
            });
        };

        let hired_on = parse_source_date("date_hired", date_hired)?;
        let last_on = parse_source_date("last_day", last_day)?;
        if last_on < hired_on {
            return Err(RecordRejection::LastDayBeforeHire {
                date_hired: hired_on,
                last_day: last_on,
            });
        }

        Ok(Self {
            employee_no: employee_no.to_string(),
            date_hired: date_hired.to_string(),
            cost_center: cost_center.to_string(),
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
            middle_name: middle_name.to_string(),
            position_title: position_title.to_string(),
            rank: rank.to_string(),
            department: department.to_string(),
            last_day: last_day.to_string(),
        })
    }

    pub fn date_hired_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date_hired.trim(), SOURCE_DATE_FORMAT).ok()
    }

    pub fn last_day_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.last_day.trim(), SOURCE_DATE_FORMAT).ok()
    }

    /// "Last, First Middle", the way resignees are listed to IT staff.
    pub fn display_name(&self) -> String {
        let name = format!(
            "{}, {} {}",
            self.last_name, self.first_name, self.middle_name
        );
        name.trim_end().to_string()
    }

    pub fn to_display(&self) -> ResigneeDisplay {
        ResigneeDisplay {
            employee_no: self.employee_no.clone(),
            date_hired: self.date_hired.clone(),
            cost_center: self.cost_center.clone(),
            name: self.display_name(),
            position_title: self.position_title.clone(),
            rank: self.rank.clone(),
            department: self.department.clone(),
            last_day: self.last_day.clone(),
        }
    }
}

/// Listing projection with the three name parts collapsed into one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResigneeDisplay {
    pub employee_no: String,
    pub date_hired: String,
    pub cost_center: String,
    pub name: String,
    pub position_title: String,
    pub rank: String,
    pub department: String,
    pub last_day: String,
}

fn parse_source_date(field: &'static str, value: &str) -> Result<NaiveDate, RecordRejection> {
    NaiveDate::parse_from_str(value.trim(), SOURCE_DATE_FORMAT).map_err(|_| {
        RecordRejection::InvalidDate {
            field,
            value: value.to_string(),
        }
    })
}
