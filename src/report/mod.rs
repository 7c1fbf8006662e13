pub mod table;

use crate::k8s::{NamespaceInfo, PodInfo};
use crate::Result;
use std::io::Write;
use std::time::Instant;
use table::TextTable;
use tracing::{debug, info};

pub const POD_TABLE_HEADER: [&str; 2] = ["Pod's Name", "Namespace"];
pub const NOT_FOUND_MESSAGE: &str = "Cannot find specific pod ip to name";

/// Wall-clock timer started once per run and read by every report branch.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    #[cfg(test)]
    pub(crate) fn started_at(started: Instant) -> Self {
        Self { started }
    }

    /// Whole seconds since start, truncated.
    pub fn elapsed_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }

    pub fn write_runtime<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Resolver runtime was {} seconds", self.elapsed_secs())?;
        Ok(())
    }
}

/// How a run ended. Only the datacenter hint is a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NamespacesListed,
    DatacenterHint,
    PodsFound(usize),
    PodNotFound,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::DatacenterHint => 1,
            Outcome::NamespacesListed | Outcome::PodsFound(_) | Outcome::PodNotFound => 0,
        }
    }
}

/// What a pod lookup matches on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodQuery {
    pub ip: String,
    pub datacenter: Option<String>,
    pub namespace: Option<String>,
}

fn format_list<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    format!("[{}]", items.into_iter().collect::<Vec<_>>().join(", "))
}

pub fn list_namespaces<W: Write>(
    out: &mut W,
    namespaces: &[NamespaceInfo],
    stopwatch: &Stopwatch,
) -> Result<Outcome> {
    info!("Listing {} namespace(s)", namespaces.len());

    writeln!(
        out,
        "{}",
        format_list(namespaces.iter().map(|ns| ns.name.as_str()))
    )?;
    stopwatch.write_runtime(out)?;

    Ok(Outcome::NamespacesListed)
}

pub fn datacenter_hint<W: Write>(
    out: &mut W,
    datacenters: &[String],
    stopwatch: &Stopwatch,
) -> Result<Outcome> {
    info!("Datacenter was not specified");

    writeln!(out, "You must choose dc, the options are:")?;
    writeln!(out, "{}", format_list(datacenters.iter().map(String::as_str)))?;
    stopwatch.write_runtime(out)?;

    Ok(Outcome::DatacenterHint)
}

/// Pods whose IP contains `ip`, in input order. When `namespace` is set the
/// pod's namespace must also be equal to it.
pub fn matching_pods<'a>(
    pods: &'a [PodInfo],
    ip: &'a str,
    namespace: Option<&'a str>,
) -> impl Iterator<Item = &'a PodInfo> + 'a {
    pods.iter().filter(move |pod| {
        pod.ip_contains(ip) && namespace.map_or(true, |ns| pod.namespace == ns)
    })
}

/// Scans `pods` for `query.ip`, redrawing the accumulated match table and
/// the runtime after each hit.
pub fn lookup_pod<W: Write>(
    out: &mut W,
    pods: &[PodInfo],
    query: &PodQuery,
    filter_namespace: bool,
    stopwatch: &Stopwatch,
) -> Result<Outcome> {
    let namespace = if filter_namespace {
        query.namespace.as_deref()
    } else {
        if let Some(ns) = &query.namespace {
            debug!("Ignoring namespace {} (namespace filtering disabled)", ns);
        }
        None
    };

    info!("Looking up pod ip {} among {} pod(s)", query.ip, pods.len());

    let mut table = TextTable::new(POD_TABLE_HEADER);
    for pod in matching_pods(pods, &query.ip, namespace) {
        debug!("Matched {}/{}", pod.namespace, pod.name);
        table.add_row([pod.name.as_str(), pod.namespace.as_str()]);
        writeln!(out, "{}", table.draw())?;
        stopwatch.write_runtime(out)?;
    }

    if table.is_empty() {
        writeln!(out, "{}", NOT_FOUND_MESSAGE)?;
        stopwatch.write_runtime(out)?;
        return Ok(Outcome::PodNotFound);
    }

    Ok(Outcome::PodsFound(table.len()))
}
