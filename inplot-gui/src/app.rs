use crate::ui_queue::{UiReceiver, UiRequest};
use egui_plot::{Line, Plot, PlotPoints};
use inplot_core::SampleBuffer;
use std::time::Duration;

/// The plot window itself: sole owner of the sample buffer.
///
/// Each frame drains the UI queue, merges any batches, and redraws the
/// whole buffer as one line series. No incremental diffing.
pub struct PlotApp {
    title: String,
    buffer: SampleBuffer,
    ui_rx: UiReceiver,
}

impl PlotApp {
    pub fn new(title: String, buffer: SampleBuffer, ui_rx: UiReceiver) -> Self {
        Self {
            title,
            buffer,
            ui_rx,
        }
    }

    fn drain_requests(&mut self, ctx: &egui::Context) {
        while let Ok(request) = self.ui_rx.try_recv() {
            match request {
                UiRequest::Append(batch) => self.buffer.append(&batch),
                UiRequest::Focus => ctx.send_viewport_cmd(egui::ViewportCommand::Focus),
            }
        }
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_requests(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let points: PlotPoints = self
                .buffer
                .as_slice()
                .iter()
                .enumerate()
                .map(|(index, value)| [index as f64, *value])
                .collect();
            Plot::new("samples")
                .x_axis_label("sample")
                .y_axis_label("value")
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new(points).name(&self.title));
                });
        });

        // Ingress runs off-thread; poll at roughly the display rate so
        // enqueued batches never wait on user input to appear.
        ctx.request_repaint_after(Duration::from_millis(16));
    }
}
