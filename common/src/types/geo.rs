use crate::constants::TILE_SIZE;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Web Mercator stops being useful past this latitude.
const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_779_8;

/// A geographic point in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Only finite coordinates inside the WGS84 range can be drawn.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        LatLng::new(lat, lng)
    }
}

/// Smallest axis-aligned box containing a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(a: LatLng, b: LatLng) -> Self {
        let mut bounds = Self {
            south_west: a,
            north_east: a,
        };
        bounds.extend(b);
        bounds
    }

    /// Returns `None` when `points` is empty.
    pub fn from_points(points: impl IntoIterator<Item = LatLng>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self::new(first, first);
        for point in points {
            bounds.extend(point);
        }
        Some(bounds)
    }

    pub fn extend(&mut self, point: LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Plain midpoint in degrees, not the projected one.
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    pub fn north_west(&self) -> LatLng {
        LatLng::new(self.north_east.lat, self.south_west.lng)
    }

    pub fn south_east(&self) -> LatLng {
        LatLng::new(self.south_west.lat, self.north_east.lng)
    }
}

/// What the map is currently looking at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: u8,
}

impl Viewport {
    pub fn new(center: LatLng, zoom: u8) -> Self {
        Self { center, zoom }
    }

    /// Viewport that shows `bounds` as closely as possible inside a
    /// `size` pixel area, keeping `padding` pixels free on every side.
    pub fn fitting(bounds: &LatLngBounds, size: (f64, f64), padding: (f64, f64), max_zoom: u8) -> Self {
        let zoom = bounds_zoom(bounds, size, padding, max_zoom);
        let (west, north) = project(bounds.north_west(), zoom);
        let (east, south) = project(bounds.south_east(), zoom);
        let center = unproject(((west + east) / 2.0, (north + south) / 2.0), zoom);
        Self { center, zoom }
    }
}

fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * 2f64.powi(i32::from(zoom))
}

/// Spherical Mercator projection to absolute pixel coordinates at `zoom`.
pub fn project(point: LatLng, zoom: u8) -> (f64, f64) {
    let scale = world_size(zoom);
    let lat = point.lat.clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE);
    let sin = lat.to_radians().sin();
    let x = (point.lng + 180.0) / 360.0 * scale;
    let y = (0.5 - ((1.0 + sin) / (1.0 - sin)).ln() / (4.0 * PI)) * scale;
    (x, y)
}

pub fn unproject((x, y): (f64, f64), zoom: u8) -> LatLng {
    let scale = world_size(zoom);
    let lng = x / scale * 360.0 - 180.0;
    let n = PI - 2.0 * PI * y / scale;
    let lat = n.sinh().atan().to_degrees();
    LatLng::new(lat, lng)
}

/// Largest integer zoom, capped at `max_zoom`, at which `bounds` fits in
/// `size` minus `padding` on both sides.
pub fn bounds_zoom(bounds: &LatLngBounds, size: (f64, f64), padding: (f64, f64), max_zoom: u8) -> u8 {
    let available_width = (size.0 - 2.0 * padding.0).max(1.0);
    let available_height = (size.1 - 2.0 * padding.1).max(1.0);

    for zoom in (0..=max_zoom).rev() {
        let (west, north) = project(bounds.north_west(), zoom);
        let (east, south) = project(bounds.south_east(), zoom);
        if east - west <= available_width && south - north <= available_height {
            return zoom;
        }
    }
    0
}
