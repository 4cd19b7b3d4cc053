//! Resource Registry - Load resource declarations from JSON
//!
//! This module loads all resource declarations from embedded JSON files
//! and provides lookup functions for the rest of the crate. New resource
//! types are added by dropping a declaration file into `src/resources/`
//! and listing it here - no enumeration code required.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use super::descriptor::ResourceDescriptor;

/// Embedded resource JSON files (compiled into the binary)
const RESOURCE_FILES: &[&str] = &[include_str!("../resources/s3.json")];

/// Root structure of resources/*.json
#[derive(Debug, Deserialize)]
struct ResourceConfig {
    #[serde(default)]
    resources: HashMap<String, ResourceDescriptor>,
}

/// Global registry loaded from JSON
static REGISTRY: OnceLock<HashMap<String, Arc<ResourceDescriptor>>> = OnceLock::new();

fn registry() -> &'static HashMap<String, Arc<ResourceDescriptor>> {
    REGISTRY.get_or_init(|| {
        let mut resources = HashMap::new();

        for content in RESOURCE_FILES {
            let partial: ResourceConfig = serde_json::from_str(content)
                .unwrap_or_else(|e| panic!("Failed to parse embedded resource JSON: {}", e));
            resources.extend(
                partial
                    .resources
                    .into_iter()
                    .map(|(key, descriptor)| (key, Arc::new(descriptor))),
            );
        }

        resources
    })
}

/// Get a resource declaration by key
pub fn get_resource(key: &str) -> Option<Arc<ResourceDescriptor>> {
    registry().get(key).cloned()
}

/// Get all resource keys
pub fn get_all_resource_keys() -> Vec<&'static str> {
    registry().keys().map(|s| s.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_loads_successfully() {
        assert!(!registry().is_empty(), "Registry should have resources");
    }

    #[test]
    fn test_s3_buckets_resource_exists() {
        let resource = get_resource("s3-buckets");
        assert!(resource.is_some(), "S3 buckets resource should exist");

        let resource = resource.unwrap();
        assert_eq!(resource.display_name, "S3 Buckets");
        assert_eq!(resource.service, "s3");
        assert_eq!(resource.kind, "bucket");
        assert_eq!(resource.id_field, "Name");
    }

    #[test]
    fn test_s3_buckets_declaration_shape() {
        let resource = get_resource("s3-buckets").unwrap();

        assert_eq!(resource.enum_spec.operation, "list_buckets");
        assert_eq!(resource.enum_spec.path, "Buckets[]");
        assert_eq!(resource.attr_specs.len(), 14);
        assert!(
            resource.attr_specs.iter().any(|a| a.dest == "Versioning"),
            "Versioning attribute should be declared"
        );
        assert!(resource.is_global(), "bucket namespace is global");

        let details = resource.detail_spec.as_ref().unwrap();
        assert_eq!(details.operation, "list_objects");
        assert_eq!(details.param, "Bucket");
    }

    #[test]
    fn test_get_all_resource_keys() {
        let keys = get_all_resource_keys();
        assert!(!keys.is_empty(), "Should have resource types");
        assert!(keys.contains(&"s3-buckets"), "Should contain s3-buckets");
    }
}
