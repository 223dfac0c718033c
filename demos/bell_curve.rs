use eyre::WrapErr;
use gpui::prelude::*;
use gpui::*;
use gpui_bell_curve::chart_view::{
    PanDown, PanLeft, PanRight, PanUp, ResetView, ZoomIn, ZoomOut, KEY_CONTEXT,
};
use gpui_bell_curve::{ChartView, ParameterPanel, PlotConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct DemoApp {
    chart: Entity<ChartView>,
    panel: Entity<ParameterPanel>,
}

impl DemoApp {
    pub fn new(chart: Entity<ChartView>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let model = chart.read(cx).chart.clone();
        let panel = cx.new(|cx| ParameterPanel::new(model, window, cx));
        Self { chart, panel }
    }
}

impl Render for DemoApp {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(gpui::black())
            .child(self.chart.clone())
            .child(self.panel.clone())
    }
}

fn load_config() -> eyre::Result<PlotConfig> {
    match std::env::args().nth(1) {
        Some(path) => PlotConfig::from_path(&path).wrap_err("could not load demo configuration"),
        None => Ok(PlotConfig::default()),
    }
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gpui_bell_curve=debug".into()),
        )
        .init();

    let config = load_config()?;

    Application::new().run(move |cx: &mut App| {
        cx.bind_keys([
            KeyBinding::new("left", PanLeft, Some(KEY_CONTEXT)),
            KeyBinding::new("right", PanRight, Some(KEY_CONTEXT)),
            KeyBinding::new("up", PanUp, Some(KEY_CONTEXT)),
            KeyBinding::new("down", PanDown, Some(KEY_CONTEXT)),
            KeyBinding::new("+", ZoomIn, Some(KEY_CONTEXT)),
            KeyBinding::new("=", ZoomIn, Some(KEY_CONTEXT)),
            KeyBinding::new("-", ZoomOut, Some(KEY_CONTEXT)),
            KeyBinding::new("0", ResetView, Some(KEY_CONTEXT)),
        ]);

        let chart = match ChartView::build(config, cx) {
            Ok(chart) => chart,
            Err(err) => {
                tracing::error!("{err:?}");
                cx.quit();
                return;
            }
        };

        if let Err(err) = cx.open_window(WindowOptions::default(), |window, cx| {
            cx.new(|cx| DemoApp::new(chart, window, cx))
        }) {
            tracing::error!("failed to open window: {err:?}");
            cx.quit();
        }
    });
    Ok(())
}
