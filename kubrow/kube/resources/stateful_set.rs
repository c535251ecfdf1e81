use k8s_openapi::api::apps::v1::StatefulSet;
use k8s_openapi::api::core::v1::PodSpec;
use kube::api::DynamicObject;
use kubrow_common::{Capabilities, Capability, NOT_AVAILABLE, or_not_available};
use kubrow_kube::scan::VulnerabilityScorer;
use kubrow_kube::utils::{
    container_names, format_age, image_names, labels_to_string, object_fqn, pod_images, selector_to_string,
};
use kubrow_kube::{ConversionError, decode};
use kubrow_table::{AGE, Column, Header, NAME, NAMESPACE, Row};
use std::sync::Arc;

use super::{ColumnSchema, ColumnSpec, ResourceRenderer, diagnose};

#[cfg(test)]
#[path = "./stateful_set.tests.rs"]
mod stateful_set_tests;

const KIND: &str = "StatefulSet";

static COLUMNS: ColumnSchema<11> = ColumnSchema::new([
    ColumnSpec::always(NAMESPACE),
    ColumnSpec::always(NAME),
    ColumnSpec::requires(Column::new("VS"), Capability::VulnerabilityScanner),
    ColumnSpec::always(Column::new("READY")),
    ColumnSpec::always(Column::wide("SELECTOR")),
    ColumnSpec::always(Column::new("SERVICE")),
    ColumnSpec::always(Column::wide("CONTAINERS")),
    ColumnSpec::always(Column::wide("IMAGES")),
    ColumnSpec::always(Column::wide("LABELS")),
    ColumnSpec::always(Column::wide("VALID")),
    ColumnSpec::always(AGE),
]);

/// Renders the `statefulset` kubernetes resources.\
/// **Note** that the `VS` column is present only while the vulnerability scanner is active.
pub struct StatefulSetRenderer {
    capabilities: Capabilities,
    scorer: Option<Arc<dyn VulnerabilityScorer>>,
}

impl StatefulSetRenderer {
    /// Creates new [`StatefulSetRenderer`] instance.\
    /// **Note** that `scorer` must not block, as it is called for every rendered row.
    pub fn new(capabilities: Capabilities, scorer: Option<Arc<dyn VulnerabilityScorer>>) -> Self {
        Self { capabilities, scorer }
    }

    fn score(&self, name: &str, spec: &PodSpec) -> String {
        let Some(scorer) = &self.scorer else {
            return NOT_AVAILABLE.to_owned();
        };

        match scorer.score(spec) {
            Ok(score) => score,
            Err(error) => {
                tracing::debug!("No vulnerability score for '{}': {}", name, error);
                NOT_AVAILABLE.to_owned()
            },
        }
    }
}

impl ResourceRenderer for StatefulSetRenderer {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn header(&self, _namespace: &str) -> Header {
        COLUMNS.header(self.capabilities.snapshot())
    }

    fn render(&self, object: &DynamicObject, _namespace: &str) -> Result<Row, ConversionError> {
        let capabilities = self.capabilities.snapshot();
        let sts = decode::<StatefulSet>(object)?;

        let metadata = &sts.metadata;
        let name = metadata.name.as_deref().unwrap_or_default();
        let namespace = metadata.namespace.as_deref();
        let spec = sts.spec.unwrap_or_default();
        let status = sts.status.unwrap_or_default();
        let pod_spec = spec.template.spec.unwrap_or_default();

        let desired = status.replicas;
        let ready = status.ready_replicas.unwrap_or_default();
        let service = Option::<&String>::from(&spec.service_name).map(String::as_str);

        let score = if capabilities.has(Capability::VulnerabilityScanner) {
            self.score(name, &pod_spec)
        } else {
            String::new()
        };

        let values = [
            namespace.unwrap_or_default().to_owned(),
            name.to_owned(),
            score,
            format!("{ready}/{desired}"),
            selector_to_string(Option::from(&spec.selector)),
            or_not_available(service.unwrap_or_default()).to_owned(),
            container_names(&pod_spec),
            image_names(&pod_spec),
            labels_to_string(metadata.labels.as_ref()),
            diagnose(desired, ready).to_status(),
            metadata
                .creation_timestamp
                .as_ref()
                .map_or(NOT_AVAILABLE.to_owned(), |t| format_age(&t.0)),
        ];

        Ok(COLUMNS.row(capabilities, object_fqn(namespace, name), values))
    }

    fn images(&self, object: &DynamicObject) -> Vec<String> {
        let Ok(sts) = decode::<StatefulSet>(object) else {
            return Vec::new();
        };

        sts.spec
            .and_then(|s| s.template.spec)
            .map(|s| pod_images(&s).into_iter().map(String::from).collect())
            .unwrap_or_default()
    }
}
