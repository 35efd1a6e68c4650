//! Application state and the frame loop.
//!
//! All domain mutation happens here, on the UI thread: map clicks and button
//! presses go through the gate into the store/controller, and the one
//! in-flight transport call reports back over a channel drained once per
//! frame by [`MapApp::poll_submission`].

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};

use egui::Context;
use tracing::info;

use geo_core::{
    AreaTransport, GeoPoint, MarkerStore, SubmissionController, SubmitOutcome, TransportError,
    gate,
};

use crate::screens::{MapView, MarkerPanel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Error,
}

/// Main application state.
pub struct MapApp {
    pub markers: MarkerStore,
    pub controller: SubmissionController,
    transport: Arc<dyn AreaTransport>,
    runtime: tokio::runtime::Handle,
    pending: Option<Receiver<Result<(), TransportError>>>,
    pub status_message: Option<(String, MessageType)>,
}

impl MapApp {
    pub fn new(
        transport: Arc<dyn AreaTransport>,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        Self {
            markers: MarkerStore::new(),
            controller: SubmissionController::new(),
            transport,
            runtime,
            pending: None,
            status_message: None,
        }
    }

    pub fn show_message(
        &mut self,
        msg: impl Into<String>,
        msg_type: MessageType,
    ) {
        self.status_message = Some((msg.into(), msg_type));
    }

    pub fn clear_message(&mut self) {
        self.status_message = None;
    }

    /// Point-selection event from the map surface.
    ///
    /// Forwarded to the store only when the gate permits it; a full marker
    /// list makes further clicks inert.
    pub fn handle_point_selected(
        &mut self,
        point: GeoPoint,
    ) {
        if !gate::can_add_marker(self.markers.len(), self.controller.state()) {
            return;
        }
        self.markers.append(point);
        info!(
            latitude = point.latitude,
            longitude = point.longitude,
            ordinal = self.markers.len(),
            "marker added"
        );
    }

    /// Clear-button action; refused while a submission is in flight.
    pub fn clear_markers(&mut self) {
        if !gate::can_clear(self.controller.state()) {
            return;
        }
        self.markers.clear();
        self.clear_message();
    }

    /// Send-button action: starts a submission and hands the transport call
    /// to the runtime. The completion comes back through the channel polled
    /// in [`MapApp::poll_submission`]; `request_repaint` wakes the frame
    /// loop when it arrives.
    pub fn begin_submission(
        &mut self,
        ctx: &Context,
    ) {
        if !gate::can_submit(self.markers.len(), self.controller.state()) {
            return;
        }
        let Some(request) = self.controller.begin_submit(self.markers.snapshot()) else {
            return;
        };
        self.clear_message();

        let (tx, rx) = mpsc::channel();
        let transport = Arc::clone(&self.transport);
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = transport.send_markers(&request).await;
            let _ = tx.send(result);
            ctx.request_repaint();
        });
        self.pending = Some(rx);
    }

    /// Drains at most one submission completion per frame.
    pub fn poll_submission(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                Err(TransportError::Network("submission task dropped".to_string()))
            }
        };
        self.pending = None;

        match self.controller.finish_submit(&mut self.markers, result) {
            SubmitOutcome::Success => {
                self.show_message("Coordinates sent successfully", MessageType::Success);
            }
            SubmitOutcome::Failure(error) => {
                self.show_message(
                    format!("Failed to send coordinates: {error}"),
                    MessageType::Error,
                );
            }
            // finish_submit never reports Busy.
            SubmitOutcome::Busy => {}
        }
    }
}

impl eframe::App for MapApp {
    fn update(
        &mut self,
        ctx: &Context,
        _frame: &mut eframe::Frame,
    ) {
        self.poll_submission();

        // Status bar at bottom
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some((msg, msg_type)) = &self.status_message {
                    let color = match msg_type {
                        MessageType::Info => egui::Color32::GRAY,
                        MessageType::Success => egui::Color32::GREEN,
                        MessageType::Error => egui::Color32::RED,
                    };
                    ui.colored_label(color, msg);

                    if ui.small_button("✖").clicked() {
                        self.clear_message();
                    }
                }
            });
        });

        egui::SidePanel::right("marker_panel")
            .resizable(false)
            .default_width(300.0)
            .show(ctx, |ui| MarkerPanel::show(self, ui));

        egui::CentralPanel::default().show(ctx, |ui| MapView::show(self, ui));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use geo_core::AreaRequest;

    use super::*;

    struct StubTransport {
        result: Result<(), TransportError>,
        calls: AtomicUsize,
    }

    impl StubTransport {
        fn new(result: Result<(), TransportError>) -> Arc<Self> {
            Arc::new(Self {
                result,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl AreaTransport for StubTransport {
        async fn send_markers(&self, _request: &AreaRequest) -> Result<(), TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn test_app(
        runtime: &tokio::runtime::Runtime,
        transport: Arc<StubTransport>,
    ) -> MapApp {
        MapApp::new(transport, runtime.handle().clone())
    }

    /// Polls until the in-flight submission settles.
    fn wait_for_completion(app: &mut MapApp) {
        for _ in 0..200 {
            app.poll_submission();
            if !app.controller.is_sending() {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("submission did not complete in time");
    }

    fn add_points(
        app: &mut MapApp,
        count: usize,
    ) {
        for n in 0..count {
            app.handle_point_selected(GeoPoint::new(n as f64, n as f64 + 0.5));
        }
    }

    #[test]
    fn fifth_point_selection_is_ignored() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = test_app(&runtime, StubTransport::new(Ok(())));

        add_points(&mut app, 5);

        assert_eq!(app.markers.len(), 4);
    }

    #[test]
    fn points_may_be_added_while_sending() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = test_app(&runtime, StubTransport::new(Ok(())));
        add_points(&mut app, 3);

        let request = app.controller.begin_submit(app.markers.snapshot());
        assert!(request.is_some());
        assert!(app.controller.is_sending());

        app.handle_point_selected(GeoPoint::new(10.0, 10.0));

        assert_eq!(app.markers.len(), 4);
    }

    #[test]
    fn clear_is_refused_while_sending() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = test_app(&runtime, StubTransport::new(Ok(())));
        add_points(&mut app, 3);

        let _request = app.controller.begin_submit(app.markers.snapshot());
        app.clear_markers();

        assert_eq!(app.markers.len(), 3);
    }

    #[test]
    fn successful_submission_resets_the_list() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let transport = StubTransport::new(Ok(()));
        let mut app = test_app(&runtime, Arc::clone(&transport));
        add_points(&mut app, 3);

        app.begin_submission(&Context::default());
        assert!(app.controller.is_sending());
        wait_for_completion(&mut app);

        assert!(app.markers.is_empty());
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
        assert!(matches!(
            &app.status_message,
            Some((_, MessageType::Success))
        ));
    }

    #[test]
    fn failed_submission_keeps_the_list_and_shows_an_error() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let transport = StubTransport::new(Err(TransportError::Rejected { status: 500 }));
        let mut app = test_app(&runtime, transport);
        add_points(&mut app, 4);

        app.begin_submission(&Context::default());
        wait_for_completion(&mut app);

        assert_eq!(app.markers.len(), 4);
        assert!(matches!(&app.status_message, Some((_, MessageType::Error))));
    }

    #[test]
    fn begin_submission_requires_three_markers() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let transport = StubTransport::new(Ok(()));
        let mut app = test_app(&runtime, Arc::clone(&transport));
        add_points(&mut app, 2);

        app.begin_submission(&Context::default());

        assert!(!app.controller.is_sending());
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }
}
