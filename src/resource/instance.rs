//! Resource instances.
//!
//! A [`Resource`] is one discovered resource: the raw record from the list
//! call merged with the supplementary fields fetched during construction,
//! plus lazily cached child items and tags.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tokio::sync::OnceCell;

use crate::aws::client::ApiClient;
use crate::error::Error;
use crate::resource::descriptor::{IdentitySource, ResourceDescriptor};
use crate::resource::paths;

/// Envelope field carrying transport metadata rather than resource data.
const RESPONSE_METADATA: &str = "ResponseMetadata";

const EMPTY: &[Value] = &[];

/// One discovered resource instance.
///
/// Immutable after construction except for the detail and tag caches,
/// which fill on first access.
#[derive(Debug)]
pub struct Resource {
    descriptor: Arc<ResourceDescriptor>,
    id: String,
    region: Option<String>,
    account: String,
    data: Map<String, Value>,
    details: OnceCell<Vec<Value>>,
    tags: OnceCell<Vec<Value>>,
}

impl Resource {
    /// Build an instance from one raw record, issuing the declaration's
    /// attribute calls in declared order.
    ///
    /// One remote call per `attr_specs` entry. Any failure aborts the
    /// build; a partially augmented instance is never returned.
    pub(crate) async fn build(
        descriptor: Arc<ResourceDescriptor>,
        client: &dyn ApiClient,
        region: Option<&str>,
        account: &str,
        record: Value,
    ) -> Result<Self, Error> {
        let list_op = &descriptor.enum_spec.operation;
        let Value::Object(mut data) = record else {
            return Err(Error::Extraction {
                operation: list_op.clone(),
                path: descriptor.enum_spec.path.clone(),
            });
        };

        let id = data
            .get(&descriptor.id_field)
            .and_then(Value::as_str)
            .ok_or_else(|| Error::MissingId {
                operation: list_op.clone(),
                field: descriptor.id_field.clone(),
            })?
            .to_string();

        for attr in &descriptor.attr_specs {
            let mut params = Map::new();
            params.insert(attr.param.clone(), Value::String(id.clone()));
            let mut value = client.call(&attr.operation, &params).await?;

            if let Some(path) = &attr.path {
                value = paths::extract(path, &value).ok_or_else(|| Error::Extraction {
                    operation: attr.operation.clone(),
                    path: path.clone(),
                })?;
            }
            if let Value::Object(ref mut map) = value {
                map.remove(RESPONSE_METADATA);
            }
            data.insert(attr.dest.clone(), value);
        }

        Ok(Self {
            descriptor,
            id,
            region: region.map(str::to_string),
            account: account.to_string(),
            data,
            details: OnceCell::new(),
            tags: OnceCell::new(),
        })
    }

    /// Identity value, unique within the resource type and account.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn service(&self) -> &str {
        &self.descriptor.service
    }

    pub fn kind(&self) -> &str {
        &self.descriptor.kind
    }

    /// Region scope this instance was discovered under.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    /// Raw record plus augmented fields.
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// A single field of the record, raw or augmented.
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    pub fn name(&self) -> Option<&str> {
        self.data
            .get(&self.descriptor.name_field)
            .and_then(Value::as_str)
    }

    /// Creation time parsed from the declared date field.
    pub fn date(&self) -> Option<DateTime<Utc>> {
        let field = self.descriptor.date_field.as_ref()?;
        let raw = self.data.get(field)?.as_str()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Child items belonging to this instance.
    ///
    /// The first call issues the declaration's detail operation and caches
    /// the result for the lifetime of the instance, so repeated iteration
    /// sees one stable snapshot and performs no further remote calls. A
    /// response without the declared list yields an empty snapshot.
    pub async fn details(&self, client: &dyn ApiClient) -> Result<&[Value], Error> {
        let Some(spec) = &self.descriptor.detail_spec else {
            return Ok(EMPTY);
        };

        let items = self
            .details
            .get_or_try_init(|| async {
                let mut params = Map::new();
                params.insert(spec.param.clone(), Value::String(self.id.clone()));
                let response = client.call(&spec.operation, &params).await?;
                Ok::<_, Error>(paths::extract_list(&spec.path, &response).unwrap_or_default())
            })
            .await?;
        Ok(items.as_slice())
    }

    /// Free-form tags attached to this instance, fetched once and cached.
    pub async fn tags(&self, client: &dyn ApiClient) -> Result<&[Value], Error> {
        let Some(spec) = &self.descriptor.tags_spec else {
            return Ok(EMPTY);
        };

        let items = self
            .tags
            .get_or_try_init(|| async {
                let identity = match spec.source {
                    IdentitySource::Id => self.id.as_str(),
                    IdentitySource::Name => self.name().unwrap_or(self.id.as_str()),
                };
                let mut params = Map::new();
                params.insert(spec.param.clone(), Value::String(identity.to_string()));
                let response = client.call(&spec.operation, &params).await?;
                Ok::<_, Error>(paths::extract_list(&spec.path, &response).unwrap_or_default())
            })
            .await?;
        Ok(items.as_slice())
    }
}
