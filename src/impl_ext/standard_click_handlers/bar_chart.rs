use crate::entities::{ChartClick, ChartClickHandler};

/// Bar charts report the clicked bar's category on the x axis.
pub struct BarChartClickHandler;

impl ChartClickHandler for BarChartClickHandler {
    fn chart_type(&self) -> &'static str {
        "bar"
    }

    fn clicked_category(&self, click: &ChartClick) -> Option<String> {
        click.points.first().and_then(|p| p.x.clone())
    }
}
