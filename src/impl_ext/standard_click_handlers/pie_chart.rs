use crate::entities::{ChartClick, ChartClickHandler};

/// Pie slices have no x value; the clicked slice is identified by its label.
pub struct PieChartClickHandler;

impl ChartClickHandler for PieChartClickHandler {
    fn chart_type(&self) -> &'static str {
        "pie"
    }

    fn clicked_category(&self, click: &ChartClick) -> Option<String> {
        click.points.first().and_then(|p| p.label.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::entities::ClickPoint;

    use super::*;

    #[test]
    fn reads_first_point_label() {
        let click = ChartClick {
            points: vec![ClickPoint {
                x: None,
                label: Some("Mitte".to_string()),
            }],
        };
        assert_eq!(
            PieChartClickHandler.clicked_category(&click).as_deref(),
            Some("Mitte")
        );
    }

    #[test]
    fn ignores_x_only_points() {
        let click = ChartClick {
            points: vec![ClickPoint {
                x: Some("Mitte".to_string()),
                label: None,
            }],
        };
        assert_eq!(PieChartClickHandler.clicked_category(&click), None);
    }
}
