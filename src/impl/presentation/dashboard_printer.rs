use fractic_server_error::ServerError;

use crate::{
    entities::{AggregationResult, CategoryCount, SelectionState},
    errors::ExportFailed,
};

use super::utils::{format_count, join_months};

/// Headline texts of the dashboard for one recompute cycle.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize)]
pub struct ChartTitles {
    pub total_records: String,
    pub daily_series: String,
    pub anliegen: String,
    pub bezirk: String,
    pub service_name: String,
}

#[derive(serde_derive::Serialize)]
struct DashboardCycleModel<'a> {
    months: &'a [String],
    selection: &'a SelectionState,
    titles: ChartTitles,
    #[serde(flatten)]
    result: &'a AggregationResult,
}

pub(crate) struct DashboardPrinter;

impl DashboardPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn titles(&self, months: &[String], result: &AggregationResult) -> ChartTitles {
        let months = join_months(months);
        ChartTitles {
            total_records: format!(
                "Total records for selected filters: {}",
                format_count(result.total_records)
            ),
            daily_series: format!("Number of Appointments per Day in {months}"),
            anliegen: format!("New Anliegen in {months}"),
            bezirk: format!("{} Bezirke", result.bezirk_counts.len()),
            service_name: format!("New Servicename in {months}"),
        }
    }

    pub(crate) fn print_cycle(&self, months: &[String], result: &AggregationResult) -> String {
        let titles = self.titles(months, result);
        let mut output = String::new();

        output.push_str(&titles.total_records);
        output.push_str("\n\n");

        Self::push_header(&mut output, &titles.daily_series);
        for point in &result.daily_series {
            output.push_str(&format!(
                "{:<10} {:>2}  {:>8}\n",
                point.month,
                point.day,
                format_count(point.count)
            ));
        }
        output.push('\n');

        Self::push_header(&mut output, &titles.anliegen);
        Self::push_counts(&mut output, &result.anliegen_counts);
        output.push('\n');

        Self::push_header(&mut output, &titles.bezirk);
        Self::push_counts(&mut output, &result.bezirk_counts);
        output.push('\n');

        Self::push_header(&mut output, &titles.service_name);
        Self::push_counts(&mut output, &result.service_name_counts);

        output
    }

    pub(crate) fn export_json(
        &self,
        months: &[String],
        selection: &SelectionState,
        result: &AggregationResult,
    ) -> Result<String, ServerError> {
        let model = DashboardCycleModel {
            months,
            selection,
            titles: self.titles(months, result),
            result,
        };
        serde_json::to_string_pretty(&model)
            .map_err(|e| ExportFailed::with_debug("could not serialize to JSON", &e))
    }

    fn push_header(output: &mut String, title: &str) {
        output.push_str(&format!("; --- {title} "));
        let used = title.chars().count() + 7;
        output.push_str(&"-".repeat(80usize.saturating_sub(used)));
        output.push('\n');
    }

    fn push_counts(output: &mut String, counts: &[CategoryCount]) {
        let width = counts
            .iter()
            .map(|c| c.category.chars().count())
            .max()
            .unwrap_or(0);
        for c in counts {
            output.push_str(&format!(
                "{:<width$}  {:>8}\n",
                c.category,
                format_count(c.count)
            ));
        }
    }
}
