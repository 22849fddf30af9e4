mod summary;
pub mod views;

pub use summary::{
    CategoryOutcome, CategoryTally, DeactivationReport, ReportWindow, ResigneeReportRow,
};
