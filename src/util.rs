use fractic_server_error::ServerError;

use crate::{
    data::models::click_payload_model::ClickPayloadModel,
    domain::usecases::load_usecase::{LoadUsecase as _, LoadUsecaseImpl},
    entities::{
        AggregationResult, ChartClick, ChartClickHandler, ChartTitles, Dataset, DatasetConfig,
        Dimension,
    },
    ext::standard_click_handlers::{BarChartClickHandler, PieChartClickHandler},
    logic::DashboardSession,
    presentation::dashboard_printer::DashboardPrinter,
};

pub struct AppointmentsDashboardUtil {
    load_usecase: LoadUsecaseImpl,
    printer: DashboardPrinter,
}

impl AppointmentsDashboardUtil {
    pub fn new() -> Self {
        Self::with_config(DatasetConfig::default())
    }

    pub fn with_config(config: DatasetConfig) -> Self {
        Self {
            load_usecase: LoadUsecaseImpl::new(config),
            printer: DashboardPrinter::new(),
        }
    }

    pub async fn from_string(&self, appointments_csv: &str) -> Result<Dataset, ServerError> {
        self.load_usecase.from_string(appointments_csv).await
    }

    pub async fn from_file<T>(&self, appointments_csv: T) -> Result<Dataset, ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        self.load_usecase.from_file(appointments_csv).await
    }

    /// Fresh interaction state over a loaded dataset.
    pub fn session<'a>(&self, dataset: &'a Dataset) -> DashboardSession<'a> {
        DashboardSession::new(dataset)
    }

    /// Applies a raw Plotly click payload (JSON) to the chart of the given
    /// dimension. The bezirk chart is a pie chart; the others are bar charts.
    pub fn click_payload<'s>(
        &self,
        session: &'s mut DashboardSession<'_>,
        dimension: Dimension,
        payload_json: &str,
    ) -> Result<&'s AggregationResult, ServerError> {
        let handler = standard_click_handler(dimension);
        let click: ChartClick =
            ClickPayloadModel::parse(handler.chart_type(), payload_json)?.into();
        Ok(session.click_chart(dimension, handler, &click))
    }

    pub fn titles(&self, session: &DashboardSession<'_>) -> ChartTitles {
        self.printer.titles(session.months(), session.result())
    }

    pub fn render(&self, session: &DashboardSession<'_>) -> String {
        self.printer.print_cycle(session.months(), session.result())
    }

    pub fn export_json(&self, session: &DashboardSession<'_>) -> Result<String, ServerError> {
        self.printer
            .export_json(session.months(), session.selection(), session.result())
    }
}

fn standard_click_handler(dimension: Dimension) -> &'static dyn ChartClickHandler {
    match dimension {
        Dimension::Anliegen | Dimension::ServiceName => &BarChartClickHandler,
        Dimension::Bezirk => &PieChartClickHandler,
    }
}
