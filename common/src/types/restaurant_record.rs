use crate::types::geo::LatLng;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, DisplayFromStr, PickFirst, serde_as};

/// One entry of the restaurant dataset, exactly as published.
///
/// Coordinates are optional: a missing, `null` or non-numeric value is read
/// as `None` so one bad row does not reject the whole file. Numbers written
/// as strings (`"40.7"`) are accepted.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    #[serde(rename = "Restaurant")]
    pub name: String,
    #[serde(rename = "Cuisine")]
    pub cuisine: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde_as(deserialize_as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(rename = "Latitude", default)]
    pub latitude: Option<f64>,
    #[serde_as(deserialize_as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(rename = "Longitude", default)]
    pub longitude: Option<f64>,
}

impl RestaurantRecord {
    pub fn new(
        name: impl Into<String>,
        cuisine: impl Into<String>,
        address: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            cuisine: cuisine.into(),
            address: address.into(),
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    /// Where the marker goes, if the record has a drawable position.
    pub fn position(&self) -> Option<LatLng> {
        let point = LatLng::new(self.latitude?, self.longitude?);
        point.is_valid().then_some(point)
    }
}
