use crate::types::dtos::{DerivedView, MapStateDTO};
use crate::types::filter_state::{CuisineSelection, FilterState};
use crate::types::geo::Viewport;
use crate::types::restaurant_record::RestaurantRecord;
use actix::{Message, Recipient};

/////////////////////////////////////////////////////////////////////
// Component state
/////////////////////////////////////////////////////////////////////

/// The dataset arrived. Sent once by the data loader.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct DatasetLoaded {
    pub records: Vec<RestaurantRecord>,
}

/// New value of the cuisine selector.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct SetCuisine {
    pub cuisine: CuisineSelection,
}

/// New content of the search field.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct SetSearchText {
    pub text: String,
}

/// Back to the "all cuisines, no search" state.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct ResetFilters;

/// Registers a listener for every recomputation. The listener immediately
/// receives the current view.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Subscribe {
    pub recipient: Recipient<ViewChanged>,
}

#[derive(Message, Debug, Clone)]
#[rtype(result = "MapStateDTO")]
pub struct GetMapState;

/////////////////////////////////////////////////////////////////////
// Notifications
/////////////////////////////////////////////////////////////////////

/// Published after every recomputation of the derived view.
///
/// ## Contents
/// - `filter`: the inputs the view was computed from.
/// - `total_restaurants`: size of the source dataset.
/// - `view`: cuisine options and the filtered restaurants.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct ViewChanged {
    pub filter: FilterState,
    pub total_restaurants: usize,
    pub view: DerivedView,
}

/////////////////////////////////////////////////////////////////////
// Map queries
/////////////////////////////////////////////////////////////////////

#[derive(Message, Debug, Clone)]
#[rtype(result = "usize")]
pub struct GetMarkerCount;

#[derive(Message, Debug, Clone)]
#[rtype(result = "Viewport")]
pub struct GetViewport;
