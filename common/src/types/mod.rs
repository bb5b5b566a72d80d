pub mod dtos;
pub mod filter_state;
pub mod geo;
pub mod marker;
pub mod restaurant_record;
pub mod tile_layer;
