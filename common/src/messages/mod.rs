pub mod map_messages;

pub use map_messages::*;
