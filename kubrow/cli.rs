use clap::Parser;
use kubrow_kube::ALL_NAMESPACES;
use std::path::{Path, PathBuf};

#[cfg(test)]
#[path = "./cli.tests.rs"]
mod cli_tests;

/// kubrow renders Kubernetes workload manifests as a resource table.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Manifest files to render, `-` reads from stdin (default when no files are given).
    #[arg()]
    pub files: Vec<PathBuf>,

    /// Namespace to show.
    #[arg(long, short)]
    pub namespace: Option<String>,

    /// Show resources from all namespaces.
    #[arg(long, short = 'A')]
    pub all_namespaces: bool,

    /// Show wide columns.
    #[arg(long, short)]
    pub wide: bool,

    /// Path to the vulnerability scan report, enables the scanner.
    #[arg(long, env = "KUBROW_SCAN_REPORT")]
    pub scan_report: Option<PathBuf>,

    /// Disable the vulnerability scanner.
    #[arg(long, conflicts_with = "scan_report")]
    pub no_scan: bool,
}

impl Args {
    /// Returns the namespace option respecting `--all-namespaces` switch.
    pub fn namespace<'a>(&'a self, default: Option<&'a str>) -> Option<&'a str> {
        if self.all_namespaces {
            return None;
        }

        let namespace = if self.namespace.is_some() {
            self.namespace.as_deref()
        } else {
            default
        };

        if namespace.is_some_and(|n| n == ALL_NAMESPACES) {
            None
        } else {
            namespace
        }
    }

    /// Returns `true` if wide columns should be shown.
    pub fn wide(&self, default: bool) -> bool {
        self.wide || default
    }

    /// Returns scan report path respecting `--no-scan` switch.
    pub fn scan_report<'a>(&'a self, default: Option<&'a Path>) -> Option<&'a Path> {
        if self.no_scan {
            None
        } else if self.scan_report.is_some() {
            self.scan_report.as_deref()
        } else {
            default
        }
    }
}
