use crate::errors::LoadError;
use actix::prelude::*;
use colored::Color;
use common::logger::Logger;
use common::messages::DatasetLoaded;
use common::types::restaurant_record::RestaurantRecord;
use common::utils::summarize_dataset;
use std::fmt;
use std::path::PathBuf;

/// Where the restaurant list lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// Fetched with a plain GET.
    Http(String),
    File(PathBuf),
}

impl DatasetSource {
    /// URLs with an `http` or `https` scheme are fetched, anything else is
    /// read from disk.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            DatasetSource::Http(location.to_string())
        } else {
            DatasetSource::File(PathBuf::from(location))
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Http(url) => write!(f, "{}", url),
            DatasetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub fn parse_dataset(text: &str) -> Result<Vec<RestaurantRecord>, LoadError> {
    Ok(serde_json::from_str(text)?)
}

async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let network_error = |source: reqwest::Error| LoadError::Network {
        url: url.to_string(),
        source,
    };

    let response = reqwest::get(url).await.map_err(network_error)?;
    if !response.status().is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }
    response.text().await.map_err(network_error)
}

pub async fn load_dataset(source: &DatasetSource) -> Result<Vec<RestaurantRecord>, LoadError> {
    let text = match source {
        DatasetSource::Http(url) => fetch_text(url).await?,
        DatasetSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?
        }
    };
    parse_dataset(&text)
}

/// The `DataLoader` actor fetches the dataset once when it starts, hands it to
/// `target` and stops. A failure is only logged: the target keeps its empty
/// state.
pub struct DataLoader {
    pub source: DatasetSource,
    pub target: Recipient<DatasetLoaded>,
    pub logger: Logger,
}

impl DataLoader {
    pub fn new(source: DatasetSource, target: Recipient<DatasetLoaded>) -> Self {
        DataLoader {
            source,
            target,
            logger: Logger::new("Data Loader", Color::Magenta),
        }
    }
}

impl Actor for DataLoader {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        self.logger
            .info(format!("Fetching restaurant data from {}...", self.source));
        let source = self.source.clone();

        async move { load_dataset(&source).await }
            .into_actor(self)
            .map(|result, act, ctx| {
                match result {
                    Ok(records) => {
                        act.logger.info(format!(
                            "Data loaded successfully: {}",
                            summarize_dataset(&records)
                        ));
                        act.target.do_send(DatasetLoaded { records });
                    }
                    Err(e) => {
                        act.logger
                            .error(format!("Error loading restaurant data: {}", e));
                    }
                }
                ctx.stop();
            })
            .wait(ctx);
    }
}
