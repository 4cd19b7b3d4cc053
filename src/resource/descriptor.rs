//! Typed resource declarations.
//!
//! A resource type is described entirely by metadata: which operation lists
//! it, which operations fetch its supplementary attributes, child items and
//! tags, and where its identity lives within a raw record. The engine walks
//! these declarations; no per-resource-type enumeration code exists.

use serde::Deserialize;
use serde_json::{Map, Value};

/// How to list raw candidate records.
#[derive(Debug, Clone, Deserialize)]
pub struct EnumSpec {
    /// Operation that returns the candidate records.
    pub operation: String,
    /// Path to the record list within the response (e.g. `Buckets[]`).
    pub path: String,
    /// Extra parameters merged into every list call.
    #[serde(default)]
    pub params: Option<Map<String, Value>>,
}

/// How to enumerate an instance's child items, lazily.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailSpec {
    pub operation: String,
    /// Parameter name the instance id is passed under.
    pub param: String,
    /// Path to the child list within the response (e.g. `Contents[]`).
    pub path: String,
}

/// One supplementary call made eagerly per instance.
#[derive(Debug, Clone, Deserialize)]
pub struct AttrSpec {
    pub operation: String,
    /// Parameter name the instance id is passed under.
    pub param: String,
    /// Optional sub-path narrowing the response before storing.
    #[serde(default)]
    pub path: Option<String>,
    /// Destination field name on the instance. Declarations must use
    /// distinct destinations; later entries overwrite earlier ones.
    pub dest: String,
}

/// Which identity field a spec passes to its operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentitySource {
    Id,
    Name,
}

/// How to fetch free-form tags.
#[derive(Debug, Clone, Deserialize)]
pub struct TagsSpec {
    pub operation: String,
    /// Path to the tag list within the response (e.g. `TagSet[]`).
    pub path: String,
    /// Parameter name the identity value is passed under.
    pub param: String,
    /// Which identity field to pass.
    pub source: IdentitySource,
}

/// How to resolve the true region of a globally-namespaced resource.
///
/// Present only on resource types whose identity namespace is global
/// rather than per-region; its presence switches on the region filter
/// pass after enumeration.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationSpec {
    pub operation: String,
    /// Parameter name the instance id is passed under.
    pub param: String,
    /// Path to the region value within the response.
    pub path: String,
}

/// Static metadata for one resource type.
///
/// Read-only after load; shared across all instances of the type and
/// across threads.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceDescriptor {
    pub display_name: String,
    /// Identifier of the target API surface (e.g. `s3`).
    pub service: String,
    /// Short name for the resource kind (e.g. `bucket`).
    pub kind: String,
    pub enum_spec: EnumSpec,
    #[serde(default)]
    pub detail_spec: Option<DetailSpec>,
    /// Processed in declared order during instance construction.
    #[serde(default)]
    pub attr_specs: Vec<AttrSpec>,
    #[serde(default)]
    pub tags_spec: Option<TagsSpec>,
    #[serde(default)]
    pub location_spec: Option<LocationSpec>,
    /// Field holding the identity value within a raw record. Unique within
    /// the resource type and account.
    pub id_field: String,
    /// Field holding the display name within a raw record.
    pub name_field: String,
    /// Field holding the creation time within a raw record.
    #[serde(default)]
    pub date_field: Option<String>,
    /// Grouping dimension for metric-style rollups, when the service
    /// defines one.
    #[serde(default)]
    pub dimension: Option<String>,
    /// List-call parameter accepting a single resource id, for services
    /// that support server-side narrowing. When absent the engine narrows
    /// client-side by `id_field`.
    #[serde(default)]
    pub filter_name: Option<String>,
}

impl ResourceDescriptor {
    /// Whether this type's identity namespace is global rather than
    /// per-region.
    pub fn is_global(&self) -> bool {
        self.location_spec.is_some()
    }
}
