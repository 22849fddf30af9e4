use super::super::category::DeactivationCategory;
use super::super::snapshot::ResigneeSnapshot;
use super::super::DeactivationVerdict;
use super::views::{
    CategoryOutcomeView, CategoryTallyEntry, DeactivationReportSummary, ResigneeRowView,
};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;

/// Selects which resignees a report covers, by last working day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportWindow {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub processed_only: bool,
}

impl ReportWindow {
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            processed_only: false,
        }
    }

    pub fn contains(&self, snapshot: &ResigneeSnapshot) -> bool {
        if self.processed_only && !snapshot.is_processed() {
            return false;
        }
        let after_start = self.from.map_or(true, |from| snapshot.last_day >= from);
        let before_end = self.to.map_or(true, |to| snapshot.last_day <= to);
        after_start && before_end
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CategoryTally {
    pub late: usize,
    pub on_time: usize,
    pub pending: usize,
    pub no_account: usize,
}

impl CategoryTally {
    fn record(&mut self, verdict: DeactivationVerdict) {
        match verdict {
            DeactivationVerdict::Late => self.late += 1,
            DeactivationVerdict::OnTime => self.on_time += 1,
            DeactivationVerdict::Pending => self.pending += 1,
            DeactivationVerdict::NoAccount => self.no_account += 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CategoryOutcome {
    pub category: DeactivationCategory,
    pub deactivated_on: Option<NaiveDate>,
    pub verdict: DeactivationVerdict,
}

impl CategoryOutcome {
    pub fn to_view(&self) -> CategoryOutcomeView {
        let deactivated_on = match self.verdict {
            DeactivationVerdict::NoAccount => None,
            _ => self.deactivated_on,
        };
        CategoryOutcomeView {
            category: self.category,
            category_label: self.category.label(),
            deactivated_on,
            verdict: self.verdict,
            verdict_label: self.verdict.label(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResigneeReportRow {
    pub employee_no: String,
    pub name: String,
    pub position_title: String,
    pub department: String,
    pub last_day: NaiveDate,
    pub hr_notified_on: NaiveDate,
    pub processed_at: Option<NaiveDateTime>,
    pub outcomes: Vec<CategoryOutcome>,
    pub remarks: String,
}

impl ResigneeReportRow {
    fn from_snapshot(snapshot: &ResigneeSnapshot) -> Self {
        let outcomes = DeactivationCategory::ordered()
            .into_iter()
            .map(|category| CategoryOutcome {
                category,
                deactivated_on: snapshot.deactivation_on(category),
                verdict: snapshot.verdict(category),
            })
            .collect();

        Self {
            employee_no: snapshot.employee_no.clone(),
            name: snapshot.display_name(),
            position_title: snapshot.position_title.clone(),
            department: snapshot.department.clone(),
            last_day: snapshot.last_day,
            hr_notified_on: snapshot.hr_notified_at.date(),
            processed_at: snapshot.processed_at,
            outcomes,
            remarks: snapshot.remarks.clone(),
        }
    }

    pub fn verdict(&self, category: DeactivationCategory) -> Option<DeactivationVerdict> {
        self.outcomes
            .iter()
            .find(|outcome| outcome.category == category)
            .map(|outcome| outcome.verdict)
    }

    pub fn is_late(&self) -> bool {
        self.outcomes.iter().any(|outcome| outcome.verdict.is_late())
    }

    pub fn to_view(&self) -> ResigneeRowView {
        ResigneeRowView {
            employee_no: self.employee_no.clone(),
            name: self.name.clone(),
            position_title: self.position_title.clone(),
            department: self.department.clone(),
            last_day: self.last_day,
            hr_notified_on: self.hr_notified_on,
            processed_at: self.processed_at,
            outcomes: self.outcomes.iter().map(CategoryOutcome::to_view).collect(),
            remarks: self.remarks.clone(),
        }
    }
}

/// Lateness across all resignees in a window, evaluated from the snapshots given.
#[derive(Debug, Default)]
pub struct DeactivationReport {
    pub window: ReportWindow,
    pub rows: Vec<ResigneeReportRow>,
    pub tallies: HashMap<DeactivationCategory, CategoryTally>,
}

impl DeactivationReport {
    pub fn build(snapshots: &[ResigneeSnapshot], window: ReportWindow) -> Self {
        let mut rows: Vec<ResigneeReportRow> = snapshots
            .iter()
            .filter(|snapshot| window.contains(snapshot))
            .map(ResigneeReportRow::from_snapshot)
            .collect();
        rows.sort_by(|a, b| {
            a.last_day
                .cmp(&b.last_day)
                .then_with(|| a.employee_no.cmp(&b.employee_no))
        });

        let mut tallies: HashMap<DeactivationCategory, CategoryTally> = HashMap::new();
        for row in &rows {
            for outcome in &row.outcomes {
                tallies
                    .entry(outcome.category)
                    .or_default()
                    .record(outcome.verdict);
            }
        }

        Self {
            window,
            rows,
            tallies,
        }
    }

    pub fn late_employees(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|row| row.is_late())
            .map(|row| row.employee_no.as_str())
            .collect()
    }

    pub fn summary(&self) -> DeactivationReportSummary {
        let category_tallies = DeactivationCategory::ordered()
            .into_iter()
            .map(|category| {
                let tally = self.tallies.get(&category).cloned().unwrap_or_default();
                CategoryTallyEntry {
                    category,
                    category_label: category.label(),
                    late: tally.late,
                    on_time: tally.on_time,
                    pending: tally.pending,
                    no_account: tally.no_account,
                }
            })
            .collect();

        DeactivationReportSummary {
            from: self.window.from,
            to: self.window.to,
            resignees: self.rows.iter().map(ResigneeReportRow::to_view).collect(),
            category_tallies,
            late_employees: self
                .late_employees()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}
