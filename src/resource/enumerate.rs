//! Enumeration engine.
//!
//! Walks a resource declaration: one list call, one [`Resource`] per
//! returned record (each triggering its attribute calls), then the region
//! filter pass for globally-namespaced types.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::aws::client::ApiClient;
use crate::error::Error;
use crate::resource::descriptor::ResourceDescriptor;
use crate::resource::instance::Resource;
use crate::resource::paths;
use crate::resource::region::{LocationFilter, RegionCache, RegionFilter};
use crate::resource::registry;

/// Region/account context an enumeration runs under.
#[derive(Debug, Clone)]
pub struct Scope {
    /// Requested region; `None` means the provider default region for
    /// globally-namespaced types and "wherever the client points" for
    /// regional ones.
    pub region: Option<String>,
    pub account: String,
}

impl Scope {
    pub fn new(account: &str) -> Self {
        Self {
            region: None,
            account: account.to_string(),
        }
    }

    pub fn in_region(account: &str, region: &str) -> Self {
        Self {
            region: Some(region.to_string()),
            account: account.to_string(),
        }
    }
}

fn filter_key(service: &str, kind: &str) -> String {
    format!("{}/{}", service, kind)
}

/// Drives resource discovery from declarations.
///
/// Holds the region-resolution cache shared by every enumeration made
/// through this value; clone the enumerator (or share it behind an `Arc`)
/// to share the cache across tasks.
#[derive(Clone, Default)]
pub struct Enumerator {
    region_cache: Arc<RegionCache>,
    region_filters: HashMap<String, Arc<dyn RegionFilter>>,
}

impl Enumerator {
    /// Create an enumerator with a fresh region cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an enumerator sharing an existing region cache.
    pub fn with_region_cache(cache: Arc<RegionCache>) -> Self {
        Self {
            region_cache: cache,
            region_filters: HashMap::new(),
        }
    }

    /// The cache backing the built-in location filter.
    pub fn region_cache(&self) -> &Arc<RegionCache> {
        &self.region_cache
    }

    /// Replace the region filter applied to one resource kind.
    ///
    /// Declarations carrying a `location_spec` get the built-in
    /// [`LocationFilter`] unless overridden here.
    pub fn set_region_filter(&mut self, service: &str, kind: &str, filter: Arc<dyn RegionFilter>) {
        self.region_filters.insert(filter_key(service, kind), filter);
    }

    /// Enumerate instances of `descriptor` visible to `client` within `scope`.
    ///
    /// Issues one list call plus one call per `attr_specs` entry per
    /// returned record - `records x attrs` remote calls before any region
    /// filtering runs, which makes this a hot path when inventories are
    /// large. Latency-sensitive callers should narrow with `resource_id`
    /// where they can.
    ///
    /// `resource_id` narrows the result to one resource: server-side via
    /// the declared `filter_name` parameter when present, client-side by
    /// the identity field otherwise (skipping augmentation of non-matching
    /// records). `extra_params` merge into the list call after the
    /// declaration's own parameters.
    pub async fn enumerate(
        &self,
        descriptor: &Arc<ResourceDescriptor>,
        client: &dyn ApiClient,
        scope: &Scope,
        resource_id: Option<&str>,
        extra_params: Option<&Map<String, Value>>,
    ) -> Result<Vec<Resource>, Error> {
        let spec = &descriptor.enum_spec;

        let mut params = spec.params.clone().unwrap_or_default();
        if let Some(extra) = extra_params {
            for (key, value) in extra {
                params.insert(key.clone(), value.clone());
            }
        }
        if let (Some(id), Some(filter_name)) = (resource_id, &descriptor.filter_name) {
            params.insert(filter_name.clone(), Value::String(id.to_string()));
        }

        tracing::debug!(
            "enumerate: service={}, operation={}",
            descriptor.service,
            spec.operation
        );
        let response = client.call(&spec.operation, &params).await?;
        let records = paths::extract_list(&spec.path, &response).ok_or_else(|| Error::Extraction {
            operation: spec.operation.clone(),
            path: spec.path.clone(),
        })?;

        let mut resources = Vec::with_capacity(records.len());
        for record in records {
            if descriptor.filter_name.is_none() {
                if let Some(id) = resource_id {
                    let matches =
                        record.get(&descriptor.id_field).and_then(Value::as_str) == Some(id);
                    if !matches {
                        continue;
                    }
                }
            }
            let resource = Resource::build(
                Arc::clone(descriptor),
                client,
                scope.region.as_deref(),
                &scope.account,
                record,
            )
            .await?;
            resources.push(resource);
        }

        if let Some(filter) = self.region_filter_for(descriptor) {
            resources = filter
                .filter(client, scope.region.as_deref(), resources)
                .await?;
        }

        Ok(resources)
    }

    /// Enumerate by registry key (e.g. `"s3-buckets"`).
    pub async fn enumerate_key(
        &self,
        key: &str,
        client: &dyn ApiClient,
        scope: &Scope,
        resource_id: Option<&str>,
        extra_params: Option<&Map<String, Value>>,
    ) -> Result<Vec<Resource>, Error> {
        let descriptor =
            registry::get_resource(key).ok_or_else(|| Error::UnknownResource(key.to_string()))?;
        self.enumerate(&descriptor, client, scope, resource_id, extra_params)
            .await
    }

    fn region_filter_for(&self, descriptor: &ResourceDescriptor) -> Option<Arc<dyn RegionFilter>> {
        let key = filter_key(&descriptor.service, &descriptor.kind);
        if let Some(filter) = self.region_filters.get(&key) {
            return Some(Arc::clone(filter));
        }
        descriptor.location_spec.as_ref().map(|spec| {
            Arc::new(LocationFilter::new(
                spec.clone(),
                Arc::clone(&self.region_cache),
            )) as Arc<dyn RegionFilter>
        })
    }
}
