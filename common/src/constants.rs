pub const DEFAULT_DATASET_PATH: &str = "restaurants.json";

pub const MAP_CENTER: (f64, f64) = (40.7429, -73.9803);
pub const MAP_ZOOM: u8 = 12;
/// Size in pixels of the viewport the terminal map pretends to draw into.
pub const VIEWPORT_SIZE: (f64, f64) = (1280.0, 800.0);
pub const FIT_BOUNDS_PADDING: (f64, f64) = (50.0, 50.0);
pub const TILE_SIZE: f64 = 256.0;

pub const TILE_URL_TEMPLATE: &str = "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png";
pub const TILE_SUBDOMAINS: &str = "abcd";
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";
pub const TILE_MAX_ZOOM: u8 = 20;

pub const MARKER_ICON_URL: &str =
    "https://raw.githubusercontent.com/pointhi/leaflet-color-markers/master/img/marker-icon-2x-blue.png";
pub const MARKER_SHADOW_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/leaflet/0.7.7/images/marker-shadow.png";
pub const MARKER_ICON_SIZE: (u32, u32) = (25, 41);
pub const MARKER_ICON_ANCHOR: (i32, i32) = (12, 41);
pub const MARKER_POPUP_ANCHOR: (i32, i32) = (1, -34);
pub const MARKER_SHADOW_SIZE: (u32, u32) = (41, 41);
pub const TOOLTIP_OPACITY: f32 = 0.9;

/// How many markers of a pass get their own log line.
pub const LOGGED_MARKERS_PER_PASS: usize = 3;
/// How many cuisines are sampled in the dataset load summary.
pub const LOGGED_CUISINE_SAMPLE: usize = 5;

pub const ALL_CUISINES: &str = "all";
pub const PANEL_TITLE: &str = "NYC Restaurant Week 2026";
pub const PANEL_SUBTITLE: &str = "Jan. 20th - Feb. 12th";
