mod app;
pub mod ingress;
pub mod ui_queue;

use app::PlotApp;
use ingress::IngressLoops;
use inplot_core::{RollMode, SampleBuffer, WindowIdentity};
use inplot_transport::broadcast::Subscriber;
use inplot_transport::TransportError;
use ui_queue::ui_channel;

#[derive(thiserror::Error, Debug)]
pub enum GuiError {
    #[error("gui error: {0}")]
    Gui(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Everything the plot window needs at startup.
pub struct PlotWindowConfig {
    pub identity: WindowIdentity,
    pub broker_port: u16,
    pub max_data: usize,
    pub roll_mode: RollMode,
}

/// Open the plot window and block until the user closes it.
///
/// Ingress loop A reads parent commands from this process's stdin;
/// ingress loop B subscribes to the broker on `broker_port`. Both loops
/// only ever enqueue requests for the UI thread, which exclusively owns
/// the sample buffer.
pub fn run_plot_window(config: PlotWindowConfig) -> Result<(), GuiError> {
    let title = config.identity.title();
    let subscriber = Subscriber::connect(config.broker_port, &config.identity.topic())?;

    let (ui_tx, ui_rx) = ui_channel();
    let loops = IngressLoops::start(std::io::stdin(), subscriber, ui_tx);

    let buffer = SampleBuffer::with_mode(config.max_data, config.roll_mode);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 500.0]),
        ..Default::default()
    };
    log::info!("opening plot window '{title}'");

    let app_title = title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Box::new(PlotApp::new(app_title, buffer, ui_rx))),
    )
    .map_err(|err| GuiError::Gui(err.to_string()))?;

    loops.shutdown();
    log::info!("plot window '{title}' closed");
    Ok(())
}
