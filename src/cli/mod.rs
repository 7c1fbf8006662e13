pub mod commands;

use crate::report::PodQuery;
use crate::{ResolverError, Result};
use clap::{ArgGroup, CommandFactory, Parser};
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

const USAGES: &str = "\
Available usages are:

show:
   resolver --pod-ip <ip> --dc <dc_name> --namespace <namespace>
   resolver --show --ns";

#[derive(Parser, Debug)]
#[command(name = "resolver")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Resolve a pod IP address to its pod name and namespace", long_about = None)]
#[command(after_help = USAGES)]
#[command(group(ArgGroup::new("action").required(true).args(["show", "pod_ip"])))]
pub struct Cli {
    #[arg(long, help = "Show information of namespaces and dc")]
    pub show: bool,

    #[arg(long = "dc", value_name = "DC", help = "Datacenter name (use --show to list them)")]
    pub datacenter: Option<String>,

    #[arg(long, value_name = "IP", help = "Pod IP, or any part of it, to look up")]
    pub pod_ip: Option<String>,

    #[arg(long, help = "Kubernetes namespace of the pod")]
    pub namespace: Option<String>,

    #[arg(long, conflicts_with = "pod_ip", help = "Get the list of available namespaces")]
    pub ns: bool,

    #[arg(long, help = "Only match pods in the --namespace namespace")]
    pub filter_namespace: bool,

    #[arg(short, long, env = "RESOLVER_CONFIG", help = "YAML settings file")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Also write log events to stderr")]
    pub verbose: bool,
}

/// Parses `args` (program name first) into a [`Cli`], or the exit code to
/// stop with. A bare invocation writes the full help to `out` before
/// failing on the missing action. Usage errors exit 1, `--help` and
/// `--version` exit 0.
pub fn parse_from<I, T, W>(args: I, out: &mut W) -> std::result::Result<Cli, i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    if args.len() < 2 {
        let _ = writeln!(out, "{}", Cli::command().render_help());
    }

    Cli::try_parse_from(args).map_err(|e| {
        if e.use_stderr() {
            let _ = e.print();
            1
        } else {
            let _ = write!(out, "{}", e.render());
            0
        }
    })
}

/// The single thing a run does, decided from the raw arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ShowNamespaces,
    ShowDatacenterHint,
    LookupPod(PodQuery),
}

impl Action {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        if cli.show {
            if cli.ns {
                return Ok(Action::ShowNamespaces);
            }
            if cli.datacenter.is_none() {
                return Ok(Action::ShowDatacenterHint);
            }
            return Err(ResolverError::InvalidArguments(
                "--show needs --ns, or drop --dc to list the available datacenters".to_string(),
            ));
        }

        let ip = cli.pod_ip.clone().ok_or_else(|| {
            ResolverError::InvalidArguments("--pod-ip is required for a lookup".to_string())
        })?;

        Ok(Action::LookupPod(PodQuery {
            ip,
            datacenter: cli.datacenter.clone(),
            namespace: cli.namespace.clone(),
        }))
    }
}
