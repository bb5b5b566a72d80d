use crate::map_widget::{MapHandle, MapOptions, MapWidget};
use crate::messages::internal_messages::CloseMap;
use actix::prelude::*;
use colored::Color;
use common::constants::{FIT_BOUNDS_PADDING, LOGGED_MARKERS_PER_PASS};
use common::logger::Logger;
use common::messages::{GetMarkerCount, GetViewport, ViewChanged};
use common::types::geo::{LatLngBounds, Viewport};
use common::types::marker::{MarkerHandle, MarkerOptions};
use common::types::restaurant_record::RestaurantRecord;

/// The `MapAdapter` actor owns the map widget and keeps its marker layer equal
/// to the current filtered restaurant list.
///
/// ## Responsibilities:
/// - Initialize the widget once when the actor starts (center, zoom, tiles).
/// - On every view change, remove all markers of the previous pass, add one
///   marker per restaurant with a valid position, and fit the viewport to them.
/// - Dispose of the widget when the actor stops.
pub struct MapAdapter {
    /// The owned widget.
    pub map: MapHandle,
    /// Initial center, zoom and tile layer.
    pub options: MapOptions,
    /// Markers placed by the last pass.
    pub markers: Vec<MarkerHandle>,
    /// Logger instance for events
    pub logger: Logger,
}

impl MapAdapter {
    pub fn new(widget: Box<dyn MapWidget>, options: MapOptions) -> Self {
        MapAdapter {
            map: MapHandle::new(widget),
            options,
            markers: Vec::new(),
            logger: Logger::new("Map Adapter", Color::Blue),
        }
    }

    /// Rebuilds the marker layer from scratch for `restaurants`.
    ///
    /// ## Returns
    /// The number of markers placed.
    fn reconcile(&mut self, restaurants: &[RestaurantRecord]) -> usize {
        let Some(widget) = self.map.widget_mut() else {
            self.logger.warn("Map already removed, ignoring view change.");
            return 0;
        };

        let previous = self.markers.len();
        for handle in self.markers.drain(..) {
            widget.remove_marker(handle);
        }
        if previous > 0 {
            self.logger.info(format!("Cleared {} existing markers", previous));
        }

        let mut skipped = 0;
        let mut placed_positions = Vec::with_capacity(restaurants.len());
        for record in restaurants {
            let Some(marker) = MarkerOptions::for_restaurant(record) else {
                skipped += 1;
                continue;
            };
            if self.markers.len() < LOGGED_MARKERS_PER_PASS {
                self.logger.info(format!(
                    "Creating marker {}: {} at ({}, {})",
                    self.markers.len(),
                    record.name,
                    marker.position.lat,
                    marker.position.lng
                ));
            }
            placed_positions.push(marker.position);
            self.markers.push(widget.add_marker(marker));
        }

        if skipped > 0 {
            self.logger.warn(format!(
                "Skipped {} restaurants without valid coordinates",
                skipped
            ));
        }

        if let Some(bounds) = LatLngBounds::from_points(placed_positions) {
            widget.fit_bounds(&bounds, FIT_BOUNDS_PADDING);
        }

        self.markers.len()
    }
}

impl Actor for MapAdapter {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        if self.map.initialize(&self.options) {
            self.logger.info("Map initialized!");
        } else {
            self.logger.warn("Map could not be initialized.");
        }
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.markers.clear();
        self.map.dispose();
        self.logger.info("Map adapter stopped.");
    }
}

impl Handler<ViewChanged> for MapAdapter {
    type Result = ();

    fn handle(&mut self, msg: ViewChanged, _ctx: &mut Self::Context) -> Self::Result {
        let placed = self.reconcile(&msg.view.restaurants);
        self.logger.info(format!(
            "Created {} markers for {} restaurants",
            placed,
            msg.view.restaurants.len()
        ));
    }
}

impl Handler<GetMarkerCount> for MapAdapter {
    type Result = MessageResult<GetMarkerCount>;

    fn handle(&mut self, _msg: GetMarkerCount, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.map.widget().map_or(0, |widget| widget.marker_count()))
    }
}

impl Handler<GetViewport> for MapAdapter {
    type Result = MessageResult<GetViewport>;

    fn handle(&mut self, _msg: GetViewport, _ctx: &mut Self::Context) -> Self::Result {
        let viewport = self
            .map
            .widget()
            .map(|widget| widget.viewport())
            .unwrap_or_else(|| Viewport::new(self.options.center, self.options.zoom));
        MessageResult(viewport)
    }
}

impl Handler<CloseMap> for MapAdapter {
    type Result = ();

    fn handle(&mut self, _msg: CloseMap, ctx: &mut Self::Context) -> Self::Result {
        self.markers.clear();
        self.map.dispose();
        ctx.stop();
    }
}
