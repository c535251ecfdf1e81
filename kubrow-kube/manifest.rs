use k8s_openapi::serde_json::{Value, from_value};
use kube::api::DynamicObject;
use serde::Deserialize;

#[cfg(test)]
#[path = "./manifest.tests.rs"]
mod manifest_tests;

/// Possible errors from parsing Kubernetes manifests.
#[derive(thiserror::Error, Debug)]
pub enum ManifestError {
    /// Manifest is not a valid YAML document.
    #[error("cannot parse manifest: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Document is not a Kubernetes object.
    #[error("document {index} is not a Kubernetes object: {source}")]
    ObjectError {
        index: usize,
        #[source]
        source: k8s_openapi::serde_json::Error,
    },
}

/// Parses YAML (or JSON) manifests into a list of [`DynamicObject`]s.\
/// **Note** that it accepts multiple documents and expands `List` kinds (e.g. `kubectl get -o yaml` output).
pub fn parse_manifests(content: &str) -> Result<Vec<DynamicObject>, ManifestError> {
    let mut objects = Vec::new();

    for (index, document) in serde_yaml::Deserializer::from_str(content).enumerate() {
        let value = Value::deserialize(document)?;
        if value.is_null() {
            continue;
        }

        expand_document(index, value, &mut objects)?;
    }

    Ok(objects)
}

fn expand_document(index: usize, mut value: Value, objects: &mut Vec<DynamicObject>) -> Result<(), ManifestError> {
    if is_list(&value) {
        if let Some(items) = value.get_mut("items").and_then(Value::as_array_mut) {
            for item in items.drain(..) {
                expand_document(index, item, objects)?;
            }
        }

        return Ok(());
    }

    let object = from_value::<DynamicObject>(value).map_err(|source| ManifestError::ObjectError { index, source })?;
    objects.push(object);

    Ok(())
}

fn is_list(value: &Value) -> bool {
    value["kind"].as_str().is_some_and(|k| k == "List" || k.ends_with("List")) && value["items"].is_array()
}
