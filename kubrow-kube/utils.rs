use k8s_openapi::api::core::v1::{Container, PodSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, LabelSelectorRequirement};
use k8s_openapi::jiff::Timestamp;
use std::collections::{BTreeMap, BTreeSet};

#[cfg(test)]
#[path = "./utils.tests.rs"]
mod utils_tests;

/// Text displayed in place of an empty collection.
pub const NONE_VALUE: &str = "<none>";

/// Returns fully qualified name of the resource: `namespace/name`, or just `name` for cluster scoped ones.
pub fn object_fqn(namespace: Option<&str>, name: &str) -> String {
    match namespace {
        Some(namespace) if !namespace.is_empty() => format!("{namespace}/{name}"),
        _ => name.to_owned(),
    }
}

/// Formats the time elapsed since `time` to a human-readable string.
pub fn format_age(time: &Timestamp) -> String {
    format_age_at(time, &Timestamp::now())
}

/// Formats the time elapsed between `time` and `now` to a human-readable string.
pub fn format_age_at(time: &Timestamp, now: &Timestamp) -> String {
    let total = (now.as_second() - time.as_second()).max(0);
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let secs = total % 60;

    if days > 0 {
        format!("{days}d{hours:0>2}h")
    } else if hours > 0 {
        format!("{hours}h{minutes:0>2}m")
    } else if minutes > 0 {
        format!("{minutes}m{secs:0>2}s")
    } else {
        format!("{secs}s")
    }
}

/// Converts labels map to a space separated list of `key=value` pairs.
pub fn labels_to_string(labels: Option<&BTreeMap<String, String>>) -> String {
    match labels {
        Some(labels) if !labels.is_empty() => labels
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(" "),
        _ => NONE_VALUE.to_owned(),
    }
}

/// Converts [`LabelSelector`] to its textual form, e.g. `app=web,tier in (back,front)`.\
/// **Note** that requirements are sorted by key, the same way `kubectl` prints them.
pub fn selector_to_string(selector: Option<&LabelSelector>) -> String {
    let Some(selector) = selector else {
        return String::new();
    };

    let mut requirements = Vec::new();
    if let Some(labels) = &selector.match_labels {
        requirements.extend(labels.iter().map(|(k, v)| (k.as_str(), format!("{k}={v}"))));
    }

    if let Some(expressions) = &selector.match_expressions {
        requirements.extend(expressions.iter().map(|e| (e.key.as_str(), requirement_to_string(e))));
    }

    requirements.sort_by(|a, b| a.0.cmp(b.0));
    requirements.into_iter().map(|(_, r)| r).collect::<Vec<_>>().join(",")
}

fn requirement_to_string(requirement: &LabelSelectorRequirement) -> String {
    let key = &requirement.key;
    let values = || {
        requirement
            .values
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>()
            .join(",")
    };

    match requirement.operator.as_str() {
        "In" => format!("{key} in ({})", values()),
        "NotIn" => format!("{key} notin ({})", values()),
        "Exists" => key.clone(),
        "DoesNotExist" => format!("!{key}"),
        operator => format!("{key} {operator} ({})", values()),
    }
}

/// Returns comma separated names of all containers in the pod, init containers first.
pub fn container_names(spec: &PodSpec) -> String {
    all_containers(spec).map(|c| c.name.as_str()).collect::<Vec<_>>().join(",")
}

/// Returns comma separated images of all containers in the pod, init containers first.
pub fn image_names(spec: &PodSpec) -> String {
    all_containers(spec)
        .filter_map(|c| c.image.as_deref())
        .collect::<Vec<_>>()
        .join(",")
}

/// Returns distinct images used by all containers in the pod.
pub fn pod_images(spec: &PodSpec) -> BTreeSet<&str> {
    all_containers(spec).filter_map(|c| c.image.as_deref()).collect()
}

fn all_containers(spec: &PodSpec) -> impl Iterator<Item = &Container> {
    spec.init_containers
        .iter()
        .flatten()
        .chain(spec.containers.iter())
}
