use std::collections::{BTreeMap, HashSet};

use crate::entities::{
    AggregationResult, Appointment, DailyCount, Dataset, Dimension, SelectionState,
};

use super::utils::count_by;

/// Recomputes every chart dataset from the full dataset and the current
/// filters. Holds no state of its own, so equal inputs give equal outputs.
pub(crate) struct AggregationEngine<'a> {
    dataset: &'a Dataset,
}

impl<'a> AggregationEngine<'a> {
    pub(crate) fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    pub(crate) fn compute(
        &self,
        selected_months: &HashSet<String>,
        selection: &SelectionState,
    ) -> AggregationResult {
        let filtered: Vec<&Appointment> = self
            .dataset
            .appointments()
            .iter()
            .filter(|a| selected_months.contains(&a.month))
            .filter(|a| {
                Dimension::ALL.iter().all(|d| match selection.get(*d) {
                    Some(value) => a.category(*d) == value,
                    None => true,
                })
            })
            .collect();

        log::debug!(
            "Recomputed dashboard: {} of {} records match (months: {}, selection: {:?}).",
            filtered.len(),
            self.dataset.len(),
            selected_months.len(),
            selection
        );

        // All three tables partition the same record set.
        AggregationResult {
            total_records: filtered.len(),
            anliegen_counts: count_by(filtered.iter().copied(), |a| a.anliegen.as_str()),
            service_name_counts: count_by(filtered.iter().copied(), |a| {
                a.service_name.as_str()
            }),
            bezirk_counts: count_by(filtered.iter().copied(), |a| a.bezirk.as_str()),
            daily_series: Self::daily_series(&filtered),
        }
    }

    fn daily_series(filtered: &[&Appointment]) -> Vec<DailyCount> {
        filtered
            .iter()
            .fold(BTreeMap::new(), |mut map, a| {
                *map.entry((a.month_number, a.day, a.month.as_str()))
                    .or_insert(0usize) += 1;
                map
            })
            .into_iter()
            .map(|((_, day, month), count)| DailyCount {
                month: month.to_string(),
                day,
                count,
            })
            .collect()
    }
}

/// Filters the dataset by months and drill-down selection, then counts.
///
/// An empty month set selects nothing, which yields an all-empty result.
pub fn compute(
    dataset: &Dataset,
    selected_months: &HashSet<String>,
    selection: &SelectionState,
) -> AggregationResult {
    AggregationEngine::new(dataset).compute(selected_months, selection)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn appointment(
        month: u32,
        day: u32,
        anliegen: &str,
        service: &str,
        bezirk: &str,
    ) -> Appointment {
        let start_time = NaiveDate::from_ymd_opt(2024, month, day)
            .and_then(|d| d.and_hms_opt(10, 0, 0))
            .unwrap();
        Appointment::new(start_time, anliegen, service, bezirk)
    }

    fn sample() -> Dataset {
        Dataset::new(vec![
            appointment(1, 1, "A", "X", "North"),
            appointment(1, 1, "A", "Y", "North"),
            appointment(2, 2, "B", "X", "South"),
        ])
    }

    fn months(names: &[&str]) -> HashSet<String> {
        names.iter().map(|m| m.to_string()).collect()
    }

    fn pairs(result: &AggregationResult, dimension: Dimension) -> Vec<(&str, usize)> {
        result
            .counts(dimension)
            .iter()
            .map(|c| (c.category.as_str(), c.count))
            .collect()
    }

    #[test]
    fn single_month_without_selection() {
        let result = compute(&sample(), &months(&["January"]), &SelectionState::new());

        assert_eq!(result.total_records, 2);
        assert_eq!(pairs(&result, Dimension::Anliegen), vec![("A", 2)]);
        assert_eq!(pairs(&result, Dimension::ServiceName), vec![("X", 1), ("Y", 1)]);
        assert_eq!(pairs(&result, Dimension::Bezirk), vec![("North", 2)]);
        assert_eq!(
            result.daily_series,
            vec![DailyCount {
                month: "January".to_string(),
                day: 1,
                count: 2,
            }]
        );
    }

    #[test]
    fn dimension_selection_narrows_every_table() {
        let selection = SelectionState {
            selected_anliegen: Some("A".to_string()),
            ..SelectionState::default()
        };
        let result = compute(&sample(), &months(&["January", "February"]), &selection);

        assert_eq!(result.total_records, 2);
        assert_eq!(pairs(&result, Dimension::Anliegen), vec![("A", 2)]);
        assert_eq!(pairs(&result, Dimension::ServiceName), vec![("X", 1), ("Y", 1)]);
        assert_eq!(pairs(&result, Dimension::Bezirk), vec![("North", 2)]);
        assert_eq!(result.daily_series.len(), 1);
    }

    #[test]
    fn dimension_filters_are_conjunctive() {
        let selection = SelectionState {
            selected_service_name: Some("X".to_string()),
            selected_bezirk: Some("South".to_string()),
            ..SelectionState::default()
        };
        let result = compute(&sample(), &months(&["January", "February"]), &selection);

        assert_eq!(result.total_records, 1);
        assert_eq!(pairs(&result, Dimension::Anliegen), vec![("B", 1)]);
    }

    #[test]
    fn empty_month_set_yields_empty_result() {
        let result = compute(&sample(), &HashSet::new(), &SelectionState::new());
        assert_eq!(result, AggregationResult::default());
    }

    #[test]
    fn selection_matching_nothing_yields_empty_tables() {
        let selection = SelectionState {
            selected_bezirk: Some("East".to_string()),
            ..SelectionState::default()
        };
        let result = compute(&sample(), &months(&["January"]), &selection);

        assert_eq!(result.total_records, 0);
        assert!(result.anliegen_counts.is_empty());
        assert!(result.daily_series.is_empty());
    }

    #[test]
    fn daily_series_follows_calendar_order() {
        let dataset = Dataset::new(vec![
            appointment(2, 5, "A", "X", "North"),
            appointment(1, 9, "A", "X", "North"),
            appointment(1, 3, "A", "X", "North"),
            appointment(2, 5, "B", "X", "North"),
        ]);
        let result = compute(
            &dataset,
            &months(&["January", "February"]),
            &SelectionState::new(),
        );
        let series: Vec<(&str, u32, usize)> = result
            .daily_series
            .iter()
            .map(|d| (d.month.as_str(), d.day, d.count))
            .collect();

        assert_eq!(
            series,
            vec![("January", 3, 1), ("January", 9, 1), ("February", 5, 2)]
        );
    }

    #[test]
    fn totals_match_every_dimension_table() {
        let dataset = sample();
        for month_set in [vec!["January"], vec!["February"], vec!["January", "February"]] {
            let result = compute(&dataset, &months(&month_set), &SelectionState::new());
            for dimension in Dimension::ALL {
                let sum: usize = result.counts(dimension).iter().map(|c| c.count).sum();
                assert_eq!(sum, result.total_records);
            }
        }
    }

    #[test]
    fn compute_is_deterministic() {
        let dataset = sample();
        let selected = months(&["January", "February"]);
        let selection = SelectionState::new();
        assert_eq!(
            compute(&dataset, &selected, &selection),
            compute(&dataset, &selected, &selection)
        );
    }
}
