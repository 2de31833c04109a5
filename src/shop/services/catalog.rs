//! # Catalog Service
//!
//! Read-only client for the remote plant catalog. Each query runs as a
//! spawned tokio task that sends its outcome back through an internal
//! channel, so the UI loop never blocks on the network. Requests are
//! one-shot: no retry, no cache, no timeout - a hung request simply
//! leaves the loading indicator visible while the UI stays responsive.
//!
//! Transport and decode failures are caught here, logged, and reported
//! as messages the controller turns into an empty display; they never
//! propagate far enough to crash the UI.

use crate::shop::models::{CatalogItem, Category};
use anyhow::Result;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tokio::sync::mpsc;

/// Failure classification for a catalog query
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport or connection failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body did not match the expected envelope
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Outcome of an asynchronous catalog query
#[derive(Debug)]
pub enum CatalogMessage {
    /// Category list fetched and decoded
    CategoriesLoaded(Vec<Category>),
    /// Category fetch failed (already logged)
    CategoriesFailed { message: String },
    /// Item list fetched and decoded, stamped with its fetch generation
    ItemsLoaded {
        generation: u64,
        items: Vec<CatalogItem>,
    },
    /// Items fetch failed (already logged)
    ItemsFailed { generation: u64, message: String },
}

/// Service for querying the remote plant catalog
///
/// Wraps a reqwest client plus the channel the spawned fetch tasks
/// report back through. The controller drains [`poll_message`] from its
/// event loop.
///
/// [`poll_message`]: CatalogService::poll_message
pub struct CatalogService {
    client: reqwest::Client,
    base_url: String,
    /// Channel for receiving async fetch outcomes
    message_receiver: mpsc::Receiver<CatalogMessage>,
    /// Channel sender cloned into each fetch task
    message_sender: mpsc::Sender<CatalogMessage>,
}

impl CatalogService {
    /// Create a new catalog service for an API base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let (message_sender, message_receiver) = mpsc::channel(10);
        let client = reqwest::Client::builder()
            .build()
            .map_err(anyhow::Error::from)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            message_receiver,
            message_sender,
        })
    }

    /// The configured API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check for a completed fetch outcome (non-blocking)
    pub fn poll_message(&mut self) -> Option<CatalogMessage> {
        self.message_receiver.try_recv().ok()
    }

    /// Fetch the category list asynchronously
    pub fn fetch_categories_async(&self) {
        let url = format!("{}/categories", self.base_url);
        let client = self.client.clone();
        let sender = self.message_sender.clone();

        tokio::spawn(async move {
            let message = match fetch_body(&client, &url).await {
                Ok(body) => match decode_categories(&body) {
                    Ok(categories) => CatalogMessage::CategoriesLoaded(categories),
                    Err(error) => {
                        tracing::error!("Failed to decode categories from {url}: {error}");
                        CatalogMessage::CategoriesFailed {
                            message: error.to_string(),
                        }
                    }
                },
                Err(error) => {
                    tracing::error!("Failed to fetch categories from {url}: {error}");
                    CatalogMessage::CategoriesFailed {
                        message: error.to_string(),
                    }
                }
            };

            // Ignore send errors (receiver might have been dropped)
            let _ = sender.send(message).await;
        });
    }

    /// Fetch an item list asynchronously.
    ///
    /// `category_id` of None queries the unfiltered list. The caller
    /// stamps the request with the generation obtained from the catalog
    /// model; the outcome message carries it back so stale responses can
    /// be recognized and dropped.
    pub fn fetch_items_async(&self, category_id: Option<&str>, generation: u64) {
        let url = match category_id {
            Some(id) => format!("{}/category/{id}", self.base_url),
            None => format!("{}/plants", self.base_url),
        };
        let client = self.client.clone();
        let sender = self.message_sender.clone();

        tokio::spawn(async move {
            let message = match fetch_body(&client, &url).await {
                Ok(body) => match decode_plants(&body) {
                    Ok(items) => CatalogMessage::ItemsLoaded { generation, items },
                    Err(error) => {
                        tracing::error!("Failed to decode items from {url}: {error}");
                        CatalogMessage::ItemsFailed {
                            generation,
                            message: error.to_string(),
                        }
                    }
                },
                Err(error) => {
                    tracing::error!("Failed to fetch items from {url}: {error}");
                    CatalogMessage::ItemsFailed {
                        generation,
                        message: error.to_string(),
                    }
                }
            };

            let _ = sender.send(message).await;
        });
    }
}

/// Perform one GET and return the response body text
async fn fetch_body(client: &reqwest::Client, url: &str) -> Result<String, CatalogError> {
    tracing::debug!("GET {url}");
    let response = client.get(url).send().await?;
    let body = response.text().await?;
    Ok(body)
}

// --- wire envelopes -------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CategoriesEnvelope {
    #[serde(default)]
    categories: Vec<CategoryDto>,
}

#[derive(Debug, Deserialize)]
struct CategoryDto {
    id: Option<serde_json::Value>,
    category_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlantsEnvelope {
    #[serde(default)]
    plants: Vec<PlantDto>,
}

/// Raw item as the catalog serves it. Ids and prices arrive as numbers
/// or strings depending on the endpoint, and several fields can be
/// missing entirely, so everything is optional here and normalized in
/// the conversion below.
#[derive(Debug, Deserialize)]
struct PlantDto {
    id: Option<serde_json::Value>,
    #[serde(rename = "plantId")]
    plant_id: Option<serde_json::Value>,
    name: Option<String>,
    description: Option<String>,
    category: Option<String>,
    price: Option<serde_json::Value>,
    image: Option<String>,
}

/// Decode the `/categories` envelope
pub fn decode_categories(body: &str) -> Result<Vec<Category>, CatalogError> {
    let envelope: CategoriesEnvelope = serde_json::from_str(body)?;

    Ok(envelope
        .categories
        .into_iter()
        .filter_map(|dto| {
            let id = dto.id.as_ref().and_then(value_to_string)?;
            let name = dto.category_name?;
            Some(Category { id, name })
        })
        .collect())
}

/// Decode a `/plants` or `/category/{id}` envelope
pub fn decode_plants(body: &str) -> Result<Vec<CatalogItem>, CatalogError> {
    let envelope: PlantsEnvelope = serde_json::from_str(body)?;
    Ok(envelope.plants.into_iter().map(CatalogItem::from).collect())
}

impl From<PlantDto> for CatalogItem {
    fn from(dto: PlantDto) -> Self {
        let name = dto
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "Unknown".to_string());
        let category = dto
            .category
            .filter(|category| !category.trim().is_empty())
            .unwrap_or_else(|| "Uncategorized".to_string());
        let price = dto.price.as_ref().and_then(value_to_price).unwrap_or(0.0);

        // plantId takes precedence over id; items carrying neither get a
        // deterministic fallback so the same item rendered in the list
        // and in the detail overlay merges into one cart line.
        let id = dto
            .plant_id
            .as_ref()
            .or(dto.id.as_ref())
            .and_then(value_to_string)
            .unwrap_or_else(|| fallback_id(&name, &category, price));

        Self {
            id,
            name,
            description: dto.description.unwrap_or_default(),
            category,
            price,
            image_url: dto.image.unwrap_or_default(),
        }
    }
}

/// Normalize a JSON id value (number or string) to a string
fn value_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) => Some(text.clone()),
        serde_json::Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Coerce a JSON price value (number or numeric string) to a non-negative
/// f64; anything else is treated as 0
fn value_to_price(value: &serde_json::Value) -> Option<f64> {
    let price = match value {
        serde_json::Value::Number(number) => number.as_f64()?,
        serde_json::Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if price.is_finite() && price >= 0.0 {
        Some(price)
    } else {
        Some(0.0)
    }
}

/// Deterministic identity for items the catalog serves without an id:
/// a short SHA-256 digest over the attributes that make the item itself.
fn fallback_id(name: &str, category: &str, price: f64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.update([0]);
    hasher.update(category.as_bytes());
    hasher.update([0]);
    hasher.update(price.to_bits().to_le_bytes());

    let digest = hasher.finalize();
    let mut id = String::with_capacity(18);
    id.push_str("gen-");
    for byte in &digest[..7] {
        id.push_str(&format!("{byte:02x}"));
    }
    id
}
