//! The two ways a dataset enters the pipeline: the well-known default file
//! served next to the dashboard, and a local file chosen by the user.
//!
//! Both are one-shot loads. There is no retry, timeout or cancellation; when
//! two loads overlap, whichever finishes last is the one applied.

use crate::dataset::Dataset;
use crate::error::DashboardError;
use log::info;
use reqwest::{Client, StatusCode};
use std::path::{Path, PathBuf};

/// Path of the default dataset relative to the dashboard origin.
pub const DEFAULT_DATASET_PATH: &str = "/data/dwlr_data.csv";

/// Where a load reads its CSV from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// The default dataset served at [`DEFAULT_DATASET_PATH`] under `base_url`.
    Default { base_url: String },
    /// A user-selected local file.
    Upload(PathBuf),
}

impl DataSource {
    pub async fn load(&self, client: &Client) -> Result<Dataset, DashboardError> {
        match self {
            DataSource::Default { base_url } => fetch_default_dataset(client, base_url).await,
            DataSource::Upload(path) => read_upload(path).await,
        }
    }
}

/// Full URL of the default dataset for a dashboard origin.
pub fn default_dataset_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), DEFAULT_DATASET_PATH)
}

/// Fetch and parse the default dataset.
pub async fn fetch_default_dataset(
    client: &Client,
    base_url: &str,
) -> Result<Dataset, DashboardError> {
    let url = default_dataset_url(base_url);
    info!("Fetching default dataset from {}", url);

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| DashboardError::Fetch(e.to_string()))?;
    if response.status() != StatusCode::OK {
        return Err(DashboardError::Fetch(format!(
            "{} returned {}",
            url,
            response.status()
        )));
    }
    let body = response
        .bytes()
        .await
        .map_err(|e| DashboardError::Fetch(e.to_string()))?;
    let text = std::str::from_utf8(&body)
        .map_err(|_| DashboardError::Fetch(format!("{} did not return text", url)))?;
    Dataset::from_csv(text)
}

/// Read and parse an uploaded CSV file.
pub async fn read_upload(path: &Path) -> Result<Dataset, DashboardError> {
    info!("Reading uploaded dataset {}", path.display());
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| DashboardError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Dataset::from_bytes(&bytes)
}
