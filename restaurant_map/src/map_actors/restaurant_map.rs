use actix::prelude::*;
use colored::Color;
use common::logger::Logger;
use common::messages::{
    DatasetLoaded, GetMapState, ResetFilters, SetCuisine, SetSearchText, Subscribe, ViewChanged,
};
use common::types::dtos::{DerivedView, MapStateDTO};
use common::types::filter_state::FilterState;
use common::types::restaurant_record::RestaurantRecord;

/// The `RestaurantMap` actor holds the state of the map component: the source
/// dataset and the filter inputs. Every mutation recomputes the derived view
/// and publishes it to all subscribers.
pub struct RestaurantMap {
    /// Source dataset, empty until the loader delivers it.
    pub restaurants: Vec<RestaurantRecord>,
    /// Current filter inputs.
    pub filter: FilterState,
    /// Result of the last recomputation.
    pub view: DerivedView,
    /// Listeners notified after each recomputation.
    pub subscribers: Vec<Recipient<ViewChanged>>,
    pub logger: Logger,
}

impl RestaurantMap {
    pub fn new() -> Self {
        RestaurantMap {
            restaurants: Vec::new(),
            filter: FilterState::default(),
            view: DerivedView::default(),
            subscribers: Vec::new(),
            logger: Logger::new("Restaurant Map", Color::Green),
        }
    }

    fn current_view(&self) -> ViewChanged {
        ViewChanged {
            filter: self.filter.clone(),
            total_restaurants: self.restaurants.len(),
            view: self.view.clone(),
        }
    }

    fn recompute(&mut self) {
        self.view = DerivedView::compute(&self.restaurants, &self.filter);
        self.logger.info(format!(
            "Filtered restaurants: {} of {}",
            self.view.restaurants.len(),
            self.restaurants.len()
        ));
        self.publish();
    }

    fn publish(&mut self) {
        self.subscribers.retain(|subscriber| subscriber.connected());
        let update = self.current_view();
        for subscriber in &self.subscribers {
            subscriber.do_send(update.clone());
        }
    }
}

impl Default for RestaurantMap {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor for RestaurantMap {
    type Context = Context<Self>;
}

impl Handler<DatasetLoaded> for RestaurantMap {
    type Result = ();

    fn handle(&mut self, msg: DatasetLoaded, _ctx: &mut Self::Context) -> Self::Result {
        self.logger
            .info(format!("Dataset loaded with {} restaurants", msg.records.len()));
        self.restaurants = msg.records;
        self.recompute();
        self.logger
            .info(format!("Unique cuisines: {}", self.view.cuisines.join(", ")));
    }
}

impl Handler<SetCuisine> for RestaurantMap {
    type Result = ();

    fn handle(&mut self, msg: SetCuisine, _ctx: &mut Self::Context) -> Self::Result {
        self.filter.selected_cuisine = msg.cuisine;
        self.recompute();
    }
}

impl Handler<SetSearchText> for RestaurantMap {
    type Result = ();

    fn handle(&mut self, msg: SetSearchText, _ctx: &mut Self::Context) -> Self::Result {
        self.filter.search_text = msg.text;
        self.recompute();
    }
}

impl Handler<ResetFilters> for RestaurantMap {
    type Result = ();

    fn handle(&mut self, _msg: ResetFilters, _ctx: &mut Self::Context) -> Self::Result {
        self.filter.reset();
        self.recompute();
    }
}

impl Handler<Subscribe> for RestaurantMap {
    type Result = ();

    fn handle(&mut self, msg: Subscribe, _ctx: &mut Self::Context) -> Self::Result {
        msg.recipient.do_send(self.current_view());
        self.subscribers.push(msg.recipient);
    }
}

impl Handler<GetMapState> for RestaurantMap {
    type Result = MessageResult<GetMapState>;

    fn handle(&mut self, _msg: GetMapState, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(MapStateDTO {
            filter: self.filter.clone(),
            total_restaurants: self.restaurants.len(),
            view: self.view.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map_actors::map_adapter::MapAdapter;
    use crate::map_widget::MapOptions;
    use crate::map_widget::terminal::TerminalMap;
    use common::constants::VIEWPORT_SIZE;
    use common::messages::{GetMarkerCount, GetViewport};
    use common::types::filter_state::CuisineSelection;

    fn scenario_dataset() -> Vec<RestaurantRecord> {
        vec![
            RestaurantRecord::new("A", "Italian", "1 St", 40.7, -73.9),
            RestaurantRecord::new("B", "Thai", "2 St", 40.8, -74.0),
        ]
    }

    async fn wired() -> (Addr<RestaurantMap>, Addr<MapAdapter>) {
        let adapter =
            MapAdapter::new(Box::new(TerminalMap::new(VIEWPORT_SIZE)), MapOptions::default())
                .start();
        let map = RestaurantMap::new().start();
        map.send(Subscribe {
            recipient: adapter.clone().recipient(),
        })
        .await
        .unwrap();
        (map, adapter)
    }

    #[actix_rt::test]
    async fn test_loaded_dataset_is_shown_in_full() {
        let (map, adapter) = wired().await;
        map.send(DatasetLoaded {
            records: scenario_dataset(),
        })
        .await
        .unwrap();

        let state = map.send(GetMapState).await.unwrap();
        assert_eq!(state.total_restaurants, 2);
        assert_eq!(state.view.restaurants, scenario_dataset());
        assert_eq!(adapter.send(GetMarkerCount).await.unwrap(), 2);
    }

    #[actix_rt::test]
    async fn test_select_italian() {
        let (map, adapter) = wired().await;
        map.send(DatasetLoaded {
            records: scenario_dataset(),
        })
        .await
        .unwrap();
        map.send(SetCuisine {
            cuisine: CuisineSelection::from_value("Italian"),
        })
        .await
        .unwrap();

        let state = map.send(GetMapState).await.unwrap();
        assert_eq!(state.view.restaurants, vec![scenario_dataset()[0].clone()]);
        assert_eq!(state.view.cuisines, vec!["Italian", "Thai"]);
        assert_eq!(adapter.send(GetMarkerCount).await.unwrap(), 1);
    }

    #[actix_rt::test]
    async fn test_search_is_case_insensitive() {
        let (map, adapter) = wired().await;
        map.send(DatasetLoaded {
            records: scenario_dataset(),
        })
        .await
        .unwrap();
        map.send(SetSearchText {
            text: "b".to_string(),
        })
        .await
        .unwrap();

        let state = map.send(GetMapState).await.unwrap();
        assert_eq!(state.view.restaurants, vec![scenario_dataset()[1].clone()]);
        assert_eq!(adapter.send(GetMarkerCount).await.unwrap(), 1);
    }

    #[actix_rt::test]
    async fn test_reset_restores_full_dataset() {
        let (map, adapter) = wired().await;
        map.send(DatasetLoaded {
            records: scenario_dataset(),
        })
        .await
        .unwrap();
        map.send(SetCuisine {
            cuisine: CuisineSelection::from_value("Thai"),
        })
        .await
        .unwrap();
        map.send(SetSearchText {
            text: "zzz".to_string(),
        })
        .await
        .unwrap();
        assert_eq!(adapter.send(GetMarkerCount).await.unwrap(), 0);

        map.send(ResetFilters).await.unwrap();
        let state = map.send(GetMapState).await.unwrap();
        assert_eq!(state.filter, FilterState::default());
        assert_eq!(state.view.restaurants, scenario_dataset());
        assert_eq!(adapter.send(GetMarkerCount).await.unwrap(), 2);
    }

    #[actix_rt::test]
    async fn test_empty_dataset_keeps_everything_empty() {
        let (map, adapter) = wired().await;
        let initial_viewport = adapter.send(GetViewport).await.unwrap();
        map.send(DatasetLoaded {
            records: Vec::new(),
        })
        .await
        .unwrap();

        let state = map.send(GetMapState).await.unwrap();
        assert!(state.view.cuisines.is_empty());
        assert!(state.view.restaurants.is_empty());
        assert_eq!(adapter.send(GetMarkerCount).await.unwrap(), 0);
        assert_eq!(adapter.send(GetViewport).await.unwrap(), initial_viewport);
    }

    #[actix_rt::test]
    async fn test_cuisines_come_from_the_full_dataset() {
        let (map, _adapter) = wired().await;
        map.send(DatasetLoaded {
            records: scenario_dataset(),
        })
        .await
        .unwrap();
        map.send(SetSearchText {
            text: "a".to_string(),
        })
        .await
        .unwrap();

        let state = map.send(GetMapState).await.unwrap();
        assert_eq!(state.view.restaurants.len(), 1);
        assert_eq!(state.view.cuisines, vec!["Italian", "Thai"]);
    }
}
