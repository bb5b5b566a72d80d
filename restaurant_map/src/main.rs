use actix::prelude::*;
use colored::Color;
use common::constants::{DEFAULT_DATASET_PATH, VIEWPORT_SIZE};
use common::logger::Logger;
use common::messages::Subscribe;
use common::utils::print_welcome_message;
use restaurant_map::map_actors::data_loader::{DataLoader, DatasetSource};
use restaurant_map::map_actors::map_adapter::MapAdapter;
use restaurant_map::map_actors::restaurant_map::RestaurantMap;
use restaurant_map::map_actors::ui_handler::UIHandler;
use restaurant_map::map_widget::MapOptions;
use restaurant_map::map_widget::terminal::TerminalMap;
use restaurant_map::messages::internal_messages::{CloseMap, UserInput};
use std::env;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal::ctrl_c;

#[actix::main]
async fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [dataset path or URL]", args[0]);
        std::process::exit(1);
    }
    let source = DatasetSource::parse(args.get(1).map_or(DEFAULT_DATASET_PATH, String::as_str));
    let logger = Logger::new("Main", Color::White);

    print_welcome_message();

    let map_adapter = MapAdapter::new(
        Box::new(TerminalMap::new(VIEWPORT_SIZE)),
        MapOptions::default(),
    )
    .start();
    let restaurant_map = RestaurantMap::new().start();
    restaurant_map.do_send(Subscribe {
        recipient: map_adapter.clone().recipient(),
    });

    let ui_handler = UIHandler::new(restaurant_map.clone()).start();
    restaurant_map.do_send(Subscribe {
        recipient: ui_handler.clone().recipient(),
    });

    DataLoader::new(source, restaurant_map.clone().recipient()).start();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = ctrl_c() => {
                logger.info("Ctrl-C received, shutting down...");
                break;
            }
            line = lines.next_line() => match line {
                Ok(Some(line)) => match ui_handler.send(UserInput { line }).await {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(e) => {
                        logger.error(format!("Filter controls unavailable: {}", e));
                        break;
                    }
                },
                Ok(None) => {
                    logger.info("Input closed, shutting down...");
                    break;
                }
                Err(e) => {
                    logger.error(format!("Error while reading input: {}", e));
                    break;
                }
            }
        }
    }

    if let Err(e) = map_adapter.send(CloseMap).await {
        logger.warn(format!("Map adapter already gone: {}", e));
    }
    System::current().stop();
    Ok(())
}
