use anyhow::Result;
use kube::api::DynamicObject;
use kubrow_common::{Capabilities, Capability};
use kubrow_config::Config;
use kubrow_kube::scan::{BgScanner, ReportScanner, VulnerabilityScorer};
use kubrow_kube::utils::object_fqn;
use kubrow_table::{Header, Row};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{info, warn};

use crate::cli::Args;
use crate::kube::resources::get_renderer;

#[cfg(test)]
#[path = "./app.tests.rs"]
mod app_tests;

/// Application settings resolved from the configuration and command line arguments.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Settings {
    pub namespace: Option<String>,
    pub wide: bool,
    pub scan_report: Option<PathBuf>,
}

impl Settings {
    /// Creates new [`Settings`] instance, command line arguments take precedence over the `config`.
    pub fn new(config: &Config, args: &Args) -> Self {
        Self {
            namespace: args.namespace(None).map(String::from),
            wide: args.wide(config.wide),
            scan_report: args.scan_report(config.scan_report()).map(Path::to_path_buf),
        }
    }
}

/// Rendered rows of a single resource kind.
pub struct RenderedTable {
    pub kind: &'static str,
    pub header: Header,
    pub rows: Vec<Row>,
}

/// Result of rendering a set of objects.\
/// **Note** that `errors` contains one message for each object that could not be rendered.
#[derive(Default)]
pub struct RenderOutput {
    pub tables: Vec<RenderedTable>,
    pub errors: Vec<String>,
}

/// Main application object that orchestrates the vulnerability scanner and rendering.
pub struct App {
    runtime: Handle,
    settings: Settings,
    capabilities: Capabilities,
    scanner: Option<BgScanner>,
}

impl App {
    /// Creates new [`App`] instance.
    pub fn new(runtime: Handle, settings: Settings) -> Self {
        Self {
            runtime,
            settings,
            capabilities: Capabilities::default(),
            scanner: None,
        }
    }

    /// Returns application settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns `true` if the vulnerability scanner capability is active.
    pub fn is_scanner_active(&self) -> bool {
        self.capabilities.is_active(Capability::VulnerabilityScanner)
    }

    /// Loads the scan report and starts the background vulnerability scanner.\
    /// **Note** that it does nothing when there is no scan report configured.
    pub async fn start_scanner(&mut self) -> Result<()> {
        let Some(path) = &self.settings.scan_report else {
            return Ok(());
        };

        let report = ReportScanner::load(path).await?;
        let mut scanner = BgScanner::new(self.runtime.clone(), self.capabilities.clone(), Arc::new(report));
        scanner.start()?;
        self.scanner = Some(scanner);

        Ok(())
    }

    /// Stops the background vulnerability scanner.
    pub fn stop(&mut self) {
        if let Some(mut scanner) = self.scanner.take() {
            scanner.stop();
        }
    }

    /// Scans all images used by `objects`, so their scores are known for the first render.
    pub async fn prefetch(&self, objects: &[DynamicObject]) {
        let Some(scanner) = &self.scanner else {
            return;
        };

        let mut images = BTreeSet::new();
        for (kind, objects) in group_by_kind(objects) {
            if let Some(renderer) = get_renderer(kind, &self.capabilities, None) {
                images.extend(objects.into_iter().flat_map(|o| renderer.images(o)));
            }
        }

        info!("Prefetching scan results for {} image(s)", images.len());
        scanner.prefetch(images).await;
    }

    /// Renders `objects` grouped by their kind.
    pub fn render(&self, objects: &[DynamicObject]) -> RenderOutput {
        let namespace = self.settings.namespace.as_deref().unwrap_or_default();
        let scorer = self.scorer();
        let mut output = RenderOutput::default();

        for (kind, objects) in group_by_kind(objects) {
            let objects = objects.into_iter().filter(|o| self.is_visible(o)).collect::<Vec<_>>();
            if objects.is_empty() {
                continue;
            }

            let Some(renderer) = get_renderer(kind, &self.capabilities, scorer.clone()) else {
                warn!("Skipping {} object(s) of unsupported kind '{}'", objects.len(), kind);
                output.errors.extend(objects.iter().map(|o| format!("{}: unsupported kind '{}'", fqn(o), kind)));
                continue;
            };

            let header = renderer.header(namespace);
            let mut rows = Vec::with_capacity(objects.len());
            for object in objects {
                match renderer.render(object, namespace) {
                    Ok(row) => rows.push(row),
                    Err(error) => {
                        warn!("Cannot render '{}': {}", fqn(object), error);
                        output.errors.push(format!("{}: {}", fqn(object), error));
                    },
                }
            }

            output.tables.push(RenderedTable {
                kind: renderer.kind(),
                header,
                rows,
            });
        }

        output
    }

    fn scorer(&self) -> Option<Arc<dyn VulnerabilityScorer>> {
        self.scanner
            .as_ref()
            .map(|s| Arc::new(s.scorer()) as Arc<dyn VulnerabilityScorer>)
    }

    fn is_visible(&self, object: &DynamicObject) -> bool {
        match &self.settings.namespace {
            Some(namespace) => object.metadata.namespace.as_ref() == Some(namespace),
            None => true,
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.stop();
    }
}

fn group_by_kind(objects: &[DynamicObject]) -> Vec<(&str, Vec<&DynamicObject>)> {
    let mut groups: Vec<(&str, Vec<&DynamicObject>)> = Vec::new();
    for object in objects {
        let kind = object.types.as_ref().map(|t| t.kind.as_str()).unwrap_or_default();
        match groups.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, group)) => group.push(object),
            None => groups.push((kind, vec![object])),
        }
    }

    groups
}

fn fqn(object: &DynamicObject) -> String {
    object_fqn(
        object.metadata.namespace.as_deref(),
        object.metadata.name.as_deref().unwrap_or_default(),
    )
}
