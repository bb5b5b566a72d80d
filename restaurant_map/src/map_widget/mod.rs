pub mod terminal;

use common::constants::{MAP_CENTER, MAP_ZOOM};
use common::types::geo::{LatLng, LatLngBounds, Viewport};
use common::types::marker::{MarkerHandle, MarkerOptions};
use common::types::tile_layer::TileLayer;

/// Surface the map adapter draws on.
///
/// Implementations only need to keep markers and a viewport; the adapter
/// decides which markers exist and when the view moves.
pub trait MapWidget {
    fn set_view(&mut self, viewport: Viewport);
    fn add_tile_layer(&mut self, layer: &TileLayer);
    fn add_marker(&mut self, marker: MarkerOptions) -> MarkerHandle;
    /// Returns `false` if the handle was not on the map.
    fn remove_marker(&mut self, handle: MarkerHandle) -> bool;
    /// Moves the view so `bounds` is fully visible, leaving `padding` pixels
    /// on each side.
    fn fit_bounds(&mut self, bounds: &LatLngBounds, padding: (f64, f64));
    fn viewport(&self) -> Viewport;
    fn marker_count(&self) -> usize;
    /// Releases the widget. Nothing is called on it afterwards.
    fn remove(&mut self);
}

/// How a fresh map is set up.
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: u8,
    pub tile_layer: TileLayer,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: LatLng::from(MAP_CENTER),
            zoom: MAP_ZOOM,
            tile_layer: TileLayer::default(),
        }
    }
}

/// Owned map widget. It is initialized at most once and disposed exactly
/// once, either through [`MapHandle::dispose`] or when dropped.
pub struct MapHandle {
    widget: Option<Box<dyn MapWidget>>,
    initialized: bool,
}

impl MapHandle {
    pub fn new(widget: Box<dyn MapWidget>) -> Self {
        Self {
            widget: Some(widget),
            initialized: false,
        }
    }

    /// Sets the initial view and the tile layer. Returns `false` if the map
    /// was already initialized or has been disposed.
    pub fn initialize(&mut self, options: &MapOptions) -> bool {
        if self.initialized {
            return false;
        }
        let Some(widget) = self.widget.as_deref_mut() else {
            return false;
        };
        widget.set_view(Viewport::new(options.center, options.zoom));
        widget.add_tile_layer(&options.tile_layer);
        self.initialized = true;
        true
    }

    pub fn widget(&self) -> Option<&(dyn MapWidget + 'static)> {
        self.widget.as_deref()
    }

    pub fn widget_mut(&mut self) -> Option<&mut (dyn MapWidget + 'static)> {
        self.widget.as_deref_mut()
    }

    pub fn is_disposed(&self) -> bool {
        self.widget.is_none()
    }

    pub fn dispose(&mut self) {
        if let Some(mut widget) = self.widget.take() {
            widget.remove();
        }
    }
}

impl Drop for MapHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingMap;
    use super::*;

    #[test]
    fn test_initialize_only_once() {
        let (widget, recording) = RecordingMap::new();
        let mut handle = MapHandle::new(Box::new(widget));
        assert!(handle.initialize(&MapOptions::default()));
        assert!(!handle.initialize(&MapOptions::default()));
        assert_eq!(recording.borrow().views.len(), 1);
        assert_eq!(recording.borrow().tile_layers, 1);
    }

    #[test]
    fn test_dispose_is_idempotent() {
        let (widget, recording) = RecordingMap::new();
        let mut handle = MapHandle::new(Box::new(widget));
        handle.dispose();
        handle.dispose();
        assert!(handle.is_disposed());
        assert!(handle.widget().is_none());
        drop(handle);
        assert_eq!(recording.borrow().removals, 1);
    }

    #[test]
    fn test_drop_disposes_the_widget() {
        let (widget, recording) = RecordingMap::new();
        {
            let mut handle = MapHandle::new(Box::new(widget));
            handle.initialize(&MapOptions::default());
        }
        assert_eq!(recording.borrow().removals, 1);
    }

    #[test]
    fn test_disposed_map_cannot_be_initialized() {
        let (widget, recording) = RecordingMap::new();
        let mut handle = MapHandle::new(Box::new(widget));
        handle.dispose();
        assert!(!handle.initialize(&MapOptions::default()));
        assert!(recording.borrow().views.is_empty());
    }
}
