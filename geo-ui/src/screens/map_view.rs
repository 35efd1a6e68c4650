//! Flat world-map canvas: the stand-in for a real tile-based map surface.
//!
//! Renders an equirectangular view of the whole world with a 30° graticule,
//! converts clicks to geographic coordinates, and draws the current markers
//! as numbered circles in insertion order.

use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui};

use geo_core::GeoPoint;

use crate::app::MapApp;

pub struct MapView;

impl MapView {
    const MARKER_RADIUS: f32 = 9.0;
    const MARKER_FILL: Color32 = Color32::from_rgb(0, 123, 255);
    const BACKGROUND: Color32 = Color32::from_rgb(225, 236, 247);
    const GRID_LINE: Color32 = Color32::from_rgb(188, 203, 219);
    const AXIS_LINE: Color32 = Color32::from_rgb(150, 168, 189);

    pub fn show(
        app: &mut MapApp,
        ui: &mut Ui,
    ) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, Self::BACKGROUND);
        Self::draw_graticule(&painter, rect);

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                app.handle_point_selected(screen_to_geo(pos, rect));
            }
        }

        for (index, point) in app.markers.snapshot().iter().enumerate() {
            let center = geo_to_screen(*point, rect);
            painter.circle_filled(center, Self::MARKER_RADIUS, Self::MARKER_FILL);
            painter.text(
                center,
                Align2::CENTER_CENTER,
                (index + 1).to_string(),
                FontId::proportional(11.0),
                Color32::WHITE,
            );
        }
    }

    /// Meridians and parallels every 30°, with the equator and prime
    /// meridian drawn stronger.
    fn draw_graticule(
        painter: &egui::Painter,
        rect: Rect,
    ) {
        let thin = Stroke::new(1.0, Self::GRID_LINE);
        let axis = Stroke::new(1.0, Self::AXIS_LINE);

        for step in 1..12 {
            let x = rect.left() + rect.width() * step as f32 / 12.0;
            let stroke = if step == 6 { axis } else { thin };
            painter.line_segment(
                [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
                stroke,
            );
        }
        for step in 1..6 {
            let y = rect.top() + rect.height() * step as f32 / 6.0;
            let stroke = if step == 3 { axis } else { thin };
            painter.line_segment(
                [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
                stroke,
            );
        }
    }
}

/// Converts a canvas position to geographic coordinates on the
/// equirectangular view: left edge is 180°W, top edge is 90°N.
pub(crate) fn screen_to_geo(
    pos: Pos2,
    rect: Rect,
) -> GeoPoint {
    let x = f64::from((pos.x - rect.left()) / rect.width()).clamp(0.0, 1.0);
    let y = f64::from((pos.y - rect.top()) / rect.height()).clamp(0.0, 1.0);
    GeoPoint::new(90.0 - y * 180.0, x * 360.0 - 180.0)
}

/// Inverse of [`screen_to_geo`].
pub(crate) fn geo_to_screen(
    point: GeoPoint,
    rect: Rect,
) -> Pos2 {
    let x = (point.longitude + 180.0) / 360.0;
    let y = (90.0 - point.latitude) / 180.0;
    Pos2::new(
        rect.left() + rect.width() * x as f32,
        rect.top() + rect.height() * y as f32,
    )
}

#[cfg(test)]
mod tests {
    use egui::{pos2, vec2};
    use pretty_assertions::assert_eq;

    use super::*;

    fn world_rect() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(360.0, 180.0))
    }

    #[test]
    fn canvas_center_maps_to_null_island() {
        let point = screen_to_geo(pos2(180.0, 90.0), world_rect());

        assert_eq!(point, GeoPoint::new(0.0, 0.0));
    }

    #[test]
    fn top_left_corner_is_north_west() {
        let point = screen_to_geo(pos2(0.0, 0.0), world_rect());

        assert_eq!(point, GeoPoint::new(90.0, -180.0));
    }

    #[test]
    fn bottom_right_corner_is_south_east() {
        let point = screen_to_geo(pos2(360.0, 180.0), world_rect());

        assert_eq!(point, GeoPoint::new(-90.0, 180.0));
    }

    #[test]
    fn positions_outside_the_canvas_are_clamped() {
        let point = screen_to_geo(pos2(-10.0, 500.0), world_rect());

        assert_eq!(point, GeoPoint::new(-90.0, -180.0));
    }

    #[test]
    fn projection_round_trips_within_pixel_precision() {
        let rect = Rect::from_min_size(pos2(40.0, 20.0), vec2(800.0, 400.0));
        let original = GeoPoint::new(48.8566, 2.3522);

        let back = screen_to_geo(geo_to_screen(original, rect), rect);

        assert!((back.latitude - original.latitude).abs() < 0.5);
        assert!((back.longitude - original.longitude).abs() < 0.5);
    }
}
