use std::collections::HashSet;

use crate::entities::{
    AggregationResult, ChartClick, ChartClickHandler, Dataset, Dimension, SelectionState,
};

use super::aggregation_engine::AggregationEngine;

/// Interaction state of one dashboard view.
///
/// Every event (checklist change or chart click) updates the stored filters
/// and recomputes all chart datasets right away, so `result()` always
/// reflects the current filters.
pub struct DashboardSession<'a> {
    engine: AggregationEngine<'a>,
    months: Vec<String>,
    selection: SelectionState,
    result: AggregationResult,
}

impl<'a> DashboardSession<'a> {
    /// Starts with the dataset's default month checked and nothing selected.
    pub fn new(dataset: &'a Dataset) -> Self {
        let mut session = Self {
            engine: AggregationEngine::new(dataset),
            months: dataset.default_months(),
            selection: SelectionState::new(),
            result: AggregationResult::default(),
        };
        session.refresh();
        session
    }

    /// Checked months, in checklist order.
    pub fn months(&self) -> &[String] {
        &self.months
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn result(&self) -> &AggregationResult {
        &self.result
    }

    pub fn set_months<I, S>(&mut self, months: I) -> &AggregationResult
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut months: Vec<String> = months.into_iter().map(Into::into).collect();
        let mut seen = HashSet::new();
        months.retain(|m| seen.insert(m.clone()));
        self.months = months;
        self.refresh();
        &self.result
    }

    /// Applies a click on a dimension chart. `None` means no click happened,
    /// which keeps the current selection.
    pub fn click(&mut self, dimension: Dimension, clicked: Option<&str>) -> &AggregationResult {
        if clicked.is_some() {
            self.selection = std::mem::take(&mut self.selection).with_click(dimension, clicked);
            self.refresh();
        }
        &self.result
    }

    /// Like `click`, with the clicked category read from a raw chart event.
    pub fn click_chart<H>(
        &mut self,
        dimension: Dimension,
        handler: &H,
        click: &ChartClick,
    ) -> &AggregationResult
    where
        H: ChartClickHandler + ?Sized,
    {
        let clicked = handler.clicked_category(click);
        if clicked.is_none() {
            log::debug!(
                "Ignoring {} chart click without a category ({}).",
                handler.chart_type(),
                dimension
            );
        }
        self.click(dimension, clicked.as_deref())
    }

    fn refresh(&mut self) {
        let months: HashSet<String> = self.months.iter().cloned().collect();
        self.result = self.engine.compute(&months, &self.selection);
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::entities::Appointment;

    use super::*;

    fn dataset() -> Dataset {
        let at = |m, d| {
            NaiveDate::from_ymd_opt(2024, m, d)
                .and_then(|d| d.and_hms_opt(8, 0, 0))
                .unwrap()
        };
        Dataset::new(vec![
            Appointment::new(at(1, 1), "A", "X", "North"),
            Appointment::new(at(1, 1), "A", "Y", "North"),
            Appointment::new(at(2, 2), "B", "X", "South"),
        ])
    }

    #[test]
    fn starts_with_first_month_checked() {
        let dataset = dataset();
        let session = DashboardSession::new(&dataset);

        assert_eq!(session.months(), ["January".to_string()]);
        assert_eq!(session.result().total_records, 2);
        assert!(session.selection().is_empty());
    }

    #[test]
    fn repeated_click_restores_unfiltered_count() {
        let dataset = dataset();
        let mut session = DashboardSession::new(&dataset);
        assert_eq!(session.set_months(["January", "February"]).total_records, 3);

        assert_eq!(session.click(Dimension::Anliegen, Some("A")).total_records, 2);
        assert_eq!(session.selection().get(Dimension::Anliegen), Some("A"));

        assert_eq!(session.click(Dimension::Anliegen, Some("A")).total_records, 3);
        assert_eq!(session.selection().get(Dimension::Anliegen), None);
    }

    #[test]
    fn no_click_keeps_selection() {
        let dataset = dataset();
        let mut session = DashboardSession::new(&dataset);
        session.set_months(["January", "February"]);
        session.click(Dimension::Bezirk, Some("South"));

        assert_eq!(session.click(Dimension::Bezirk, None).total_records, 1);
        assert_eq!(session.selection().get(Dimension::Bezirk), Some("South"));
    }

    #[test]
    fn unchecking_all_months_empties_charts() {
        let dataset = dataset();
        let mut session = DashboardSession::new(&dataset);
        let result = session.set_months(Vec::<String>::new());

        assert_eq!(result.total_records, 0);
        assert!(result.bezirk_counts.is_empty());
    }

    #[test]
    fn duplicate_months_are_collapsed() {
        let dataset = dataset();
        let mut session = DashboardSession::new(&dataset);
        session.set_months(["February", "January", "February"]);
        assert_eq!(
            session.months(),
            ["February".to_string(), "January".to_string()]
        );
    }
}
