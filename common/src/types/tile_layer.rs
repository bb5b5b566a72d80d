use crate::constants::{
    TILE_ATTRIBUTION, TILE_MAX_ZOOM, TILE_SIZE, TILE_SUBDOMAINS, TILE_URL_TEMPLATE,
};
use crate::types::geo::{LatLng, project};
use serde::{Deserialize, Serialize};

/// Slippy-map tile address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl TileCoord {
    /// Tile containing `point` at `zoom`.
    pub fn containing(point: LatLng, zoom: u8) -> Self {
        let (x, y) = project(point, zoom);
        let last = (1u64 << zoom) - 1;
        let clamp = |v: f64| ((v / TILE_SIZE).floor().max(0.0) as u64).min(last) as u32;
        Self {
            x: clamp(x),
            y: clamp(y),
            z: zoom,
        }
    }
}

/// Base imagery source consumed through a templated URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayer {
    pub url_template: String,
    pub subdomains: String,
    pub attribution: String,
    pub max_zoom: u8,
    pub retina: bool,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url_template: TILE_URL_TEMPLATE.to_string(),
            subdomains: TILE_SUBDOMAINS.to_string(),
            attribution: TILE_ATTRIBUTION.to_string(),
            max_zoom: TILE_MAX_ZOOM,
            retina: false,
        }
    }
}

impl TileLayer {
    /// Expands `{s}`, `{z}`, `{x}`, `{y}` and `{r}` for one tile. The
    /// subdomain rotates with `x + y` so neighbouring tiles spread over hosts.
    pub fn tile_url(&self, tile: TileCoord) -> String {
        let subdomain = self
            .subdomains
            .chars()
            .nth((tile.x as usize + tile.y as usize) % self.subdomains.chars().count().max(1))
            .map(String::from)
            .unwrap_or_default();
        let retina = if self.retina { "@2x" } else { "" };

        self.url_template
            .replace("{s}", &subdomain)
            .replace("{z}", &tile.z.to_string())
            .replace("{x}", &tile.x.to_string())
            .replace("{y}", &tile.y.to_string())
            .replace("{r}", retina)
    }
}
