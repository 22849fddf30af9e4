mod category;
pub mod report;
mod rules;
mod snapshot;

pub use category::{CategoryParseError, DeactivationCategory};
pub use report::{DeactivationReport, ReportWindow};
pub use rules::{has_no_account, is_late, no_account_epoch};
pub use snapshot::{
    DeactivationDates, ResigneeSnapshot, SnapshotImportError, SnapshotImporter,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-system outcome shown next to each resignee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeactivationVerdict {
    NoAccount,
    Pending,
    OnTime,
    Late,
}

impl DeactivationVerdict {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoAccount => "No Existing Account",
            Self::Pending => "Pending",
            Self::OnTime => "On Time",
            Self::Late => "Late",
        }
    }

    pub const fn is_late(self) -> bool {
        matches!(self, Self::Late)
    }
}

/// Classifies one system's deactivation. The "no account" marker wins over lateness.
pub fn evaluate(
    resigned: NaiveDate,
    deactivated: Option<NaiveDate>,
    hr_notified: NaiveDate,
    category: DeactivationCategory,
) -> DeactivationVerdict {
    match deactivated {
        None => DeactivationVerdict::Pending,
        Some(date) if has_no_account(date) => DeactivationVerdict::NoAccount,
        Some(_) if is_late(resigned, deactivated, hr_notified, category) => {
            DeactivationVerdict::Late
        }
        Some(_) => DeactivationVerdict::OnTime,
    }
}
