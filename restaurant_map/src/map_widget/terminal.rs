use crate::map_widget::MapWidget;
use colored::Color;
use common::constants::{MAP_CENTER, MAP_ZOOM, TILE_MAX_ZOOM};
use common::logger::Logger;
use common::types::geo::{LatLng, LatLngBounds, Viewport};
use common::types::marker::{MarkerHandle, MarkerOptions};
use common::types::tile_layer::{TileCoord, TileLayer};
use std::collections::BTreeMap;

/// Map widget that keeps its state in memory and reports view changes on the
/// console.
pub struct TerminalMap {
    size: (f64, f64),
    viewport: Viewport,
    tile_layer: Option<TileLayer>,
    markers: BTreeMap<MarkerHandle, MarkerOptions>,
    next_handle: u64,
    removed: bool,
    logger: Logger,
}

impl TerminalMap {
    /// `size` is the pixel size used when fitting bounds.
    pub fn new(size: (f64, f64)) -> Self {
        Self {
            size,
            viewport: Viewport::new(LatLng::from(MAP_CENTER), MAP_ZOOM),
            tile_layer: None,
            markers: BTreeMap::new(),
            next_handle: 0,
            removed: false,
            logger: Logger::new("Map", Color::Cyan),
        }
    }

    fn max_zoom(&self) -> u8 {
        self.tile_layer
            .as_ref()
            .map_or(TILE_MAX_ZOOM, |layer| layer.max_zoom)
    }

    fn log_view(&self) {
        let center = self.viewport.center;
        let tile = self
            .tile_layer
            .as_ref()
            .map(|layer| layer.tile_url(TileCoord::containing(center, self.viewport.zoom)))
            .unwrap_or_else(|| "no tile layer".to_string());
        self.logger.info(format!(
            "View at ({:.5}, {:.5}) zoom {} [{}]",
            center.lat, center.lng, self.viewport.zoom, tile
        ));
    }
}

impl MapWidget for TerminalMap {
    fn set_view(&mut self, viewport: Viewport) {
        self.viewport = Viewport::new(viewport.center, viewport.zoom.min(self.max_zoom()));
        self.log_view();
    }

    fn add_tile_layer(&mut self, layer: &TileLayer) {
        self.logger
            .info(format!("Tile layer {} ({})", layer.url_template, layer.attribution));
        self.tile_layer = Some(layer.clone());
    }

    fn add_marker(&mut self, marker: MarkerOptions) -> MarkerHandle {
        self.next_handle += 1;
        let handle = MarkerHandle(self.next_handle);
        self.markers.insert(handle, marker);
        handle
    }

    fn remove_marker(&mut self, handle: MarkerHandle) -> bool {
        self.markers.remove(&handle).is_some()
    }

    fn fit_bounds(&mut self, bounds: &LatLngBounds, padding: (f64, f64)) {
        self.viewport = Viewport::fitting(bounds, self.size, padding, self.max_zoom());
        self.log_view();
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn marker_count(&self) -> usize {
        self.markers.len()
    }

    fn remove(&mut self) {
        self.markers.clear();
        self.tile_layer = None;
        self.removed = true;
        self.logger.info("Map removed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::types::restaurant_record::RestaurantRecord;

    fn marker(lat: f64, lng: f64) -> MarkerOptions {
        MarkerOptions::for_restaurant(&RestaurantRecord::new("A", "Italian", "1 St", lat, lng))
            .unwrap()
    }

    #[test]
    fn test_handles_are_unique_and_removable() {
        let mut map = TerminalMap::new((1280.0, 800.0));
        let first = map.add_marker(marker(40.7, -73.9));
        let second = map.add_marker(marker(40.8, -74.0));
        assert_ne!(first, second);
        assert_eq!(map.marker_count(), 2);
        assert!(map.remove_marker(first));
        assert!(!map.remove_marker(first));
        assert_eq!(map.markers.len(), 1);
    }

    #[test]
    fn test_fit_bounds_respects_tile_max_zoom() {
        let mut map = TerminalMap::new((1280.0, 800.0));
        map.add_tile_layer(&TileLayer {
            max_zoom: 15,
            ..TileLayer::default()
        });
        let point = LatLng::new(40.7, -73.9);
        map.fit_bounds(&LatLngBounds::new(point, point), (50.0, 50.0));
        assert_eq!(map.viewport().zoom, 15);
    }

    #[test]
    fn test_remove_clears_the_map() {
        let mut map = TerminalMap::new((1280.0, 800.0));
        map.add_tile_layer(&TileLayer::default());
        map.add_marker(marker(40.7, -73.9));
        map.remove();
        assert!(map.removed);
        assert_eq!(map.marker_count(), 0);
    }
}
