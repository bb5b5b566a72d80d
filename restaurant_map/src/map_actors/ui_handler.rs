use crate::map_actors::restaurant_map::RestaurantMap;
use crate::messages::internal_messages::UserInput;
use actix::prelude::*;
use colored::*;
use common::constants::{ALL_CUISINES, PANEL_SUBTITLE, PANEL_TITLE};
use common::logger::Logger;
use common::messages::{ResetFilters, SetCuisine, SetSearchText, ViewChanged};
use common::types::filter_state::CuisineSelection;
use common::types::restaurant_record::RestaurantRecord;

const HELP: &str = "\
Commands:
  cuisine <name|number|all>   filter by cuisine (see `list`)
  search [text]               filter by restaurant name, empty clears
  reset                       clear both filters
  list                        show the cuisine options
  show                        show the visible restaurants
  help                        this message
  quit                        leave";

/// One line of input from the filter controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlCommand {
    Cuisine(String),
    Search(String),
    Reset,
    List,
    Show,
    Help,
    Quit,
    Nothing,
}

impl ControlCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (command, argument) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(command, argument)| (command, argument.trim()));

        match command.to_lowercase().as_str() {
            "" => Ok(ControlCommand::Nothing),
            "cuisine" | "c" => {
                if argument.is_empty() {
                    Err("Usage: cuisine <name|number|all>".to_string())
                } else {
                    Ok(ControlCommand::Cuisine(argument.to_string()))
                }
            }
            "search" | "s" => Ok(ControlCommand::Search(argument.to_string())),
            "reset" | "r" => Ok(ControlCommand::Reset),
            "list" | "l" => Ok(ControlCommand::List),
            "show" => Ok(ControlCommand::Show),
            "help" | "h" | "?" => Ok(ControlCommand::Help),
            "quit" | "q" | "exit" => Ok(ControlCommand::Quit),
            other => Err(format!("Unknown command `{}`. Type `help`.", other)),
        }
    }
}

/// Maps what the user typed onto one of the selector options. Option 0 is
/// "All Cuisines", the rest follow `cuisines`.
pub fn resolve_cuisine(cuisines: &[String], input: &str) -> Option<CuisineSelection> {
    if input.eq_ignore_ascii_case(ALL_CUISINES) {
        return Some(CuisineSelection::All);
    }
    if let Ok(index) = input.parse::<usize>() {
        return match index {
            0 => Some(CuisineSelection::All),
            n => cuisines
                .get(n - 1)
                .map(|cuisine| CuisineSelection::Cuisine(cuisine.clone())),
        };
    }
    let wanted = input.to_lowercase();
    cuisines
        .iter()
        .find(|cuisine| cuisine.to_lowercase() == wanted)
        .map(|cuisine| CuisineSelection::Cuisine(cuisine.clone()))
}

/// The overlay panel: title, current inputs and the live count.
pub fn render_panel(update: &ViewChanged) -> String {
    format!(
        "{}\n{}\nFilter by Cuisine: {}\nSearch Restaurant: {}\nShowing {} restaurants",
        PANEL_TITLE.bold(),
        PANEL_SUBTITLE,
        update.filter.selected_cuisine,
        if update.filter.search_text.is_empty() {
            "(empty)".dimmed().to_string()
        } else {
            format!("\"{}\"", update.filter.search_text)
        },
        update.view.restaurants.len().to_string().bold()
    )
}

pub fn render_options(cuisines: &[String]) -> String {
    std::iter::once(format!("0: {}", CuisineSelection::All))
        .chain(
            cuisines
                .iter()
                .enumerate()
                .map(|(i, cuisine)| format!("{}: {}", i + 1, cuisine)),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_restaurants(restaurants: &[RestaurantRecord]) -> String {
    if restaurants.is_empty() {
        return "No restaurants match the current filters.".to_string();
    }
    restaurants
        .iter()
        .map(|r| format!("{} | {} | {}", r.name, r.cuisine, r.address))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Actor UIHandler: the filter controls and the overlay panel.
pub struct UIHandler {
    /// Component whose filter inputs this handler writes.
    pub map: Addr<RestaurantMap>,
    /// Last view published by the component.
    pub last_update: Option<ViewChanged>,
    pub logger: Logger,
}

impl UIHandler {
    pub fn new(map: Addr<RestaurantMap>) -> Self {
        UIHandler {
            map,
            last_update: None,
            logger: Logger::new("Filters", Color::BrightBlue),
        }
    }

    fn cuisines(&self) -> &[String] {
        match &self.last_update {
            Some(update) => &update.view.cuisines,
            None => &[],
        }
    }

    /// Runs one command. Returns `false` once the user wants to leave.
    fn execute(&mut self, command: ControlCommand) -> bool {
        match command {
            ControlCommand::Cuisine(input) => match resolve_cuisine(self.cuisines(), &input) {
                Some(cuisine) => self.map.do_send(SetCuisine { cuisine }),
                None => self.logger.warn(format!(
                    "`{}` is not one of the cuisine options. Type `list` to see them.",
                    input
                )),
            },
            ControlCommand::Search(text) => self.map.do_send(SetSearchText { text }),
            ControlCommand::Reset => self.map.do_send(ResetFilters),
            ControlCommand::List => println!("{}", render_options(self.cuisines())),
            ControlCommand::Show => {
                let restaurants: &[RestaurantRecord] = match &self.last_update {
                    Some(update) => &update.view.restaurants,
                    None => &[],
                };
                println!("{}", render_restaurants(restaurants));
            }
            ControlCommand::Help => println!("{}", HELP),
            ControlCommand::Quit => return false,
            ControlCommand::Nothing => {}
        }
        true
    }
}

impl Actor for UIHandler {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        self.logger.info("Filter controls ready.");
    }
}

impl Handler<ViewChanged> for UIHandler {
    type Result = ();

    fn handle(&mut self, msg: ViewChanged, _ctx: &mut Self::Context) -> Self::Result {
        println!("{}", render_panel(&msg));
        self.last_update = Some(msg);
    }
}

impl Handler<UserInput> for UIHandler {
    type Result = bool;

    fn handle(&mut self, msg: UserInput, _ctx: &mut Self::Context) -> Self::Result {
        match ControlCommand::parse(&msg.line) {
            Ok(command) => self.execute(command),
            Err(reason) => {
                self.logger.warn(reason);
                true
            }
        }
    }
}
