use k8s_openapi::Resource;
use k8s_openapi::serde_json::{from_value, to_value};
use kube::api::DynamicObject;
use serde::de::DeserializeOwned;

#[cfg(test)]
#[path = "./decode.tests.rs"]
mod decode_tests;

/// Possible errors from converting a raw object into a typed Kubernetes resource.
#[derive(thiserror::Error, Debug)]
pub enum ConversionError {
    /// Raw object does not declare its `apiVersion` and `kind`.
    #[error("expected {expected}, but got an object without type information")]
    MissingType { expected: &'static str },

    /// Raw object declares a different resource kind.
    #[error("expected {expected}, but got {kind} ({api_version})")]
    KindMismatch {
        expected: &'static str,
        api_version: String,
        kind: String,
    },

    /// Raw object has the expected kind, but its content does not match the schema.
    #[error("cannot decode {kind}: {source}")]
    Malformed {
        kind: String,
        #[source]
        source: k8s_openapi::serde_json::Error,
    },
}

impl ConversionError {
    /// Returns the kind observed on the raw object, if it had one.
    pub fn observed_kind(&self) -> Option<&str> {
        match self {
            ConversionError::MissingType { .. } => None,
            ConversionError::KindMismatch { kind, .. } | ConversionError::Malformed { kind, .. } => Some(kind),
        }
    }
}

/// Decodes [`DynamicObject`] into the strongly typed Kubernetes resource `K`.\
/// **Note** that the declared `apiVersion` and `kind` must match the ones of `K`.
pub fn decode<K>(object: &DynamicObject) -> Result<K, ConversionError>
where
    K: Resource + DeserializeOwned,
{
    let Some(types) = &object.types else {
        return Err(ConversionError::MissingType { expected: K::KIND });
    };

    if types.api_version != K::API_VERSION || types.kind != K::KIND {
        return Err(ConversionError::KindMismatch {
            expected: K::KIND,
            api_version: types.api_version.clone(),
            kind: types.kind.clone(),
        });
    }

    to_value(object)
        .and_then(from_value::<K>)
        .map_err(|source| ConversionError::Malformed {
            kind: types.kind.clone(),
            source,
        })
}
