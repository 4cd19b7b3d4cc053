//! Region resolution and filtering for globally-namespaced resources.
//!
//! Some resource identities (storage bucket names) are not scoped to a
//! region: every region's list call returns the full set, and an instance's
//! true region has to be resolved out-of-band. [`LocationFilter`] resolves
//! each candidate once, memoizes the answer in a [`RegionCache`], and keeps
//! only the candidates matching the requested region.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::aws::client::ApiClient;
use crate::error::Error;
use crate::resource::descriptor::LocationSpec;
use crate::resource::instance::Resource;
use crate::resource::paths;

/// Region assumed when the caller requests none, and when the service
/// reports no location constraint for an instance.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Map provider sentinel values to canonical region identifiers.
fn normalize_region(raw: Option<&str>) -> String {
    match raw {
        None | Some("") => DEFAULT_REGION.to_string(),
        // Legacy alias predating per-region location constraints.
        Some("EU") => "eu-west-1".to_string(),
        Some(region) => region.to_string(),
    }
}

/// Memoized resource-id -> region resolutions.
///
/// Entries are never evicted; once resolved, a region is treated as
/// correct for the lifetime of the cache. The lock is held only across
/// map operations, never across a remote call, so two tasks resolving the
/// same id for the first time may both issue the call - last write wins,
/// the values are idempotent.
#[derive(Debug, Default)]
pub struct RegionCache {
    entries: Mutex<HashMap<String, String>>,
}

impl RegionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    pub fn insert(&self, id: &str, region: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.to_string(), region.to_string());
    }

    /// Drop every memoized resolution, forcing re-resolution on next use.
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Post-enumeration filtering hook for resource types whose identity
/// namespace is global rather than per-region.
#[async_trait]
pub trait RegionFilter: Send + Sync {
    /// Reduce `candidates` to the ones belonging to `requested`, or to
    /// [`DEFAULT_REGION`] when no region was requested.
    ///
    /// A remote failure during resolution aborts the enumeration; the
    /// engine does not return a partially filtered set.
    async fn filter(
        &self,
        client: &dyn ApiClient,
        requested: Option<&str>,
        candidates: Vec<Resource>,
    ) -> Result<Vec<Resource>, Error>;
}

/// Built-in policy: resolve each candidate's region through the
/// declaration's location operation, memoized in a shared [`RegionCache`].
pub struct LocationFilter {
    spec: LocationSpec,
    cache: Arc<RegionCache>,
}

impl LocationFilter {
    pub fn new(spec: LocationSpec, cache: Arc<RegionCache>) -> Self {
        Self { spec, cache }
    }

    /// Resolve the region for one id, consulting the cache first.
    async fn resolve(&self, client: &dyn ApiClient, id: &str) -> Result<String, Error> {
        if let Some(region) = self.cache.get(id) {
            return Ok(region);
        }

        tracing::debug!("finding location for {}", id);
        let mut params = Map::new();
        params.insert(self.spec.param.clone(), Value::String(id.to_string()));
        let response = client.call(&self.spec.operation, &params).await?;

        let raw = paths::extract(&self.spec.path, &response);
        let region = normalize_region(raw.as_ref().and_then(Value::as_str));
        self.cache.insert(id, &region);
        Ok(region)
    }
}

#[async_trait]
impl RegionFilter for LocationFilter {
    async fn filter(
        &self,
        client: &dyn ApiClient,
        requested: Option<&str>,
        candidates: Vec<Resource>,
    ) -> Result<Vec<Resource>, Error> {
        let requested = requested.unwrap_or(DEFAULT_REGION);

        let mut kept = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let region = self.resolve(client, candidate.id()).await?;
            if region == requested {
                kept.push(candidate);
            }
        }
        Ok(kept)
    }
}
