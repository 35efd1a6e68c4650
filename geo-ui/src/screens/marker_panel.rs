//! Side panel: the ordered marker table and the send/clear actions.

use egui::Ui;

use geo_core::gate;

use crate::app::MapApp;

pub struct MarkerPanel;

impl MarkerPanel {
    pub fn show(
        app: &mut MapApp,
        ui: &mut Ui,
    ) {
        ui.add_space(5.0);
        ui.heading("Add at least 3 markers!");
        ui.add_space(10.0);

        egui::Grid::new("marker_table")
            .num_columns(3)
            .spacing([14.0, 6.0])
            .striped(true)
            .show(ui, |ui| {
                ui.strong("Marker");
                ui.strong("Latitude");
                ui.strong("Longitude");
                ui.end_row();

                for (index, point) in app.markers.snapshot().iter().enumerate() {
                    ui.label(format!("Marker {}", index + 1));
                    ui.label(format!("{:.6}", point.latitude));
                    ui.label(format!("{:.6}", point.longitude));
                    ui.end_row();
                }
            });

        ui.add_space(15.0);

        ui.horizontal(|ui| {
            let send_label = if app.controller.is_sending() {
                "Sending…"
            } else {
                "Send"
            };
            let can_send = gate::can_submit(app.markers.len(), app.controller.state());
            if ui
                .add_enabled(can_send, egui::Button::new(send_label))
                .clicked()
            {
                app.begin_submission(ui.ctx());
            }

            let can_clear = gate::can_clear(app.controller.state());
            if ui
                .add_enabled(can_clear, egui::Button::new("Clear"))
                .clicked()
            {
                app.clear_markers();
            }

            if app.controller.is_sending() {
                ui.spinner();
            }
        });
    }
}
