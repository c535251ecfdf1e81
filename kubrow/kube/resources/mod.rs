use kube::api::DynamicObject;
use kubrow_common::Capabilities;
use kubrow_kube::ConversionError;
use kubrow_kube::scan::VulnerabilityScorer;
use kubrow_table::{Header, Row};
use std::sync::Arc;

pub use self::schema::{ColumnSchema, ColumnSpec};
pub use self::stateful_set::StatefulSetRenderer;
pub use self::status::{Diagnosis, diagnose};

mod schema;
mod stateful_set;
mod status;

/// Turns raw Kubernetes objects of a single kind into table rows.
pub trait ResourceRenderer: Send + Sync {
    /// Returns kind of the resources this renderer handles.
    fn kind(&self) -> &'static str;

    /// Returns [`Header`] for the rendered resources.\
    /// **Note** that `namespace` is the view namespace, empty for all namespaces.
    fn header(&self, namespace: &str) -> Header;

    /// Renders `object` as a [`Row`] matching the [`Header`] returned by `header`.
    fn render(&self, object: &DynamicObject, namespace: &str) -> Result<Row, ConversionError>;

    /// Returns container images referenced by `object`.
    fn images(&self, object: &DynamicObject) -> Vec<String> {
        let _ = object;
        Vec::new()
    }
}

/// Returns [`ResourceRenderer`] for provided Kubernetes resource kind.
pub fn get_renderer(
    kind: &str,
    capabilities: &Capabilities,
    scorer: Option<Arc<dyn VulnerabilityScorer>>,
) -> Option<Box<dyn ResourceRenderer>> {
    match kind {
        "StatefulSet" => Some(Box::new(StatefulSetRenderer::new(capabilities.clone(), scorer))),
        _ => None,
    }
}
