mod map_view;
mod marker_panel;

pub use map_view::MapView;
pub use marker_panel::MarkerPanel;
