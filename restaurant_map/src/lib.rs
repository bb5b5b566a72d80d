pub mod errors;
pub mod map_actors;
pub mod map_widget;
pub mod messages;
