//! JSON document store for the storefront server.
//!
//! One file per document under the data directory. Reads tolerate a missing
//! file (first boot serves the empty default); writes go through a mutex so
//! two concurrent saves cannot interleave on the same file. Whole-document
//! overwrite, last writer wins.

use std::path::{Path, PathBuf};

use chrono::Utc;
use shared_types::{Coupon, CustomizationMap, PersonalizationsDocument};
use tokio::sync::Mutex;
use tracing::warn;

use crate::seed::demo_coupons;

const PERSONALIZATIONS_FILE: &str = "personalizations.json";
const COUPONS_FILE: &str = "coupons.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("document io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub struct DocumentStore {
    data_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl DocumentStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn personalizations_path(&self) -> PathBuf {
        self.data_dir.join(PERSONALIZATIONS_FILE)
    }

    fn coupons_path(&self) -> PathBuf {
        self.data_dir.join(COUPONS_FILE)
    }

    /// Read the persisted personalization document. A missing or unreadable
    /// file yields the empty default so a fresh deployment never 500s on its
    /// first GET.
    pub async fn read_personalizations(&self) -> PersonalizationsDocument {
        match tokio::fs::read(self.personalizations_path()).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(doc) => doc,
                Err(e) => {
                    warn!(error = %e, "personalizations document is malformed; serving empty default");
                    PersonalizationsDocument::empty()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                PersonalizationsDocument::empty()
            }
            Err(e) => {
                warn!(error = %e, "failed to read personalizations document; serving empty default");
                PersonalizationsDocument::empty()
            }
        }
    }

    /// Overwrite the personalization document with the given map. Returns
    /// the `lastUpdated` stamp written into the document.
    pub async fn write_personalizations(
        &self,
        customizations: CustomizationMap,
    ) -> Result<String, StoreError> {
        let last_updated = Utc::now().to_rfc3339();
        let doc = PersonalizationsDocument {
            customizations,
            last_updated: Some(last_updated.clone()),
        };

        let _guard = self.write_lock.lock().await;
        write_json(&self.personalizations_path(), &doc).await?;
        Ok(last_updated)
    }

    /// Reset the personalization document to its empty state.
    pub async fn clear_personalizations(&self) -> Result<String, StoreError> {
        self.write_personalizations(CustomizationMap::new()).await
    }

    /// Read the coupon feed, seeding the document with the built-in demo set
    /// on first read.
    pub async fn read_coupons(&self) -> Result<Vec<Coupon>, StoreError> {
        match tokio::fs::read(self.coupons_path()).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let coupons = demo_coupons();
                let _guard = self.write_lock.lock().await;
                write_json(&self.coupons_path(), &coupons).await?;
                Ok(coupons)
            }
            Err(e) => Err(e.into()),
        }
    }
}

async fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let bytes = serde_json::to_vec_pretty(value)?;
    tokio::fs::write(path, bytes).await?;
    Ok(())
}
