use crate::cli::Action;
use crate::config::ResolverConfig;
use crate::k8s::ClusterSource;
use crate::report::{self, Outcome, Stopwatch};
use crate::Result;
use std::io::Write;
use tracing::info;

/// Runtime options that are not part of the chosen action.
#[derive(Debug, Clone)]
pub struct Settings {
    pub datacenters: Vec<String>,
    pub filter_namespace: bool,
}

impl Settings {
    /// `--filter-namespace` turns filtering on even when the config file leaves it off.
    pub fn new(config: &ResolverConfig, filter_namespace: bool) -> Self {
        Self {
            datacenters: config.datacenters.clone(),
            filter_namespace: filter_namespace || config.filter_namespace,
        }
    }
}

/// Fetches the cluster once, then runs `action` against the snapshot.
pub async fn handle_action<S, W>(
    action: &Action,
    source: &S,
    settings: &Settings,
    stopwatch: &Stopwatch,
    out: &mut W,
) -> Result<Outcome>
where
    S: ClusterSource + ?Sized,
    W: Write,
{
    let snapshot = source.fetch().await?;
    info!(
        "Fetched {} pod(s) and {} namespace(s)",
        snapshot.pods.len(),
        snapshot.namespaces.len()
    );

    match action {
        Action::ShowNamespaces => report::list_namespaces(out, &snapshot.namespaces, stopwatch),
        Action::ShowDatacenterHint => {
            report::datacenter_hint(out, &settings.datacenters, stopwatch)
        }
        Action::LookupPod(query) => report::lookup_pod(
            out,
            &snapshot.pods,
            query,
            settings.filter_namespace,
            stopwatch,
        ),
    }
}
