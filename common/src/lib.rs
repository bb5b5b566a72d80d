pub mod constants;
pub mod logger;
pub mod messages;
pub mod types;
pub mod utils;
