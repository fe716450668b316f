use fractic_server_error::ServerError;
use serde_json::Value;

use crate::{
    entities::{ChartClick, ClickPoint},
    errors::UnknownChartPayload,
};

/// Click event as emitted by Plotly (`clickData`).
#[derive(Debug, Default, serde_derive::Deserialize)]
pub(crate) struct ClickPayloadModel {
    #[serde(default)]
    points: Vec<ClickPointModel>,
}

#[derive(Debug, Default, serde_derive::Deserialize)]
struct ClickPointModel {
    #[serde(default)]
    x: Value,
    #[serde(default)]
    label: Value,
}

impl ClickPayloadModel {
    /// An empty or `null` payload means nothing was clicked.
    pub(crate) fn parse(chart: &str, s: &str) -> Result<Self, ServerError> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        let payload: Option<ClickPayloadModel> =
            serde_json::from_str(s).map_err(|e| UnknownChartPayload::with_debug(chart, &e))?;
        Ok(payload.unwrap_or_default())
    }
}

/// Plotly reports categories as strings, but numeric-looking labels may come
/// back as numbers.
fn category_label(v: Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl Into<ChartClick> for ClickPayloadModel {
    fn into(self) -> ChartClick {
        ChartClick {
            points: self
                .points
                .into_iter()
                .map(|p| ClickPoint {
                    x: category_label(p.x),
                    label: category_label(p.label),
                })
                .collect(),
        }
    }
}
