// Chart interaction.
// ---

/// A single point of a chart click, as reported by the charting front end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickPoint {
    pub x: Option<String>,
    pub label: Option<String>,
}

/// A click event on one chart. Usually carries exactly one point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartClick {
    pub points: Vec<ClickPoint>,
}

/// Extracts the clicked category label from a chart's click event.
///
/// Implemented per chart type, since each kind of chart reports the clicked
/// category in a different field. Returning `None` means the event did not
/// land on a category and must not change the selection.
pub trait ChartClickHandler {
    fn chart_type(&self) -> &'static str;
    fn clicked_category(&self, click: &ChartClick) -> Option<String>;
}
