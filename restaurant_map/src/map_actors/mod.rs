pub mod data_loader;
pub mod map_adapter;
pub mod restaurant_map;
pub mod ui_handler;
