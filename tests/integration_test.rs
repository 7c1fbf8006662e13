use clap::Parser;
use pod_resolver::cli::commands::{handle_action, Settings};
use pod_resolver::cli::{Action, Cli};
use pod_resolver::config::ResolverConfig;
use pod_resolver::error::{ResolverError, Result};
use pod_resolver::k8s::{ClusterSnapshot, ClusterSource, NamespaceInfo, PodInfo};
use pod_resolver::report::{Outcome, Stopwatch};

struct StaticSource(ClusterSnapshot);

#[async_trait::async_trait]
impl ClusterSource for StaticSource {
    async fn fetch(&self) -> Result<ClusterSnapshot> {
        Ok(self.0.clone())
    }
}

fn cluster() -> StaticSource {
    let pod = |name: &str, namespace: &str, ip: Option<&str>| PodInfo {
        name: name.to_string(),
        namespace: namespace.to_string(),
        pod_ip: ip.map(str::to_string),
    };

    StaticSource(ClusterSnapshot {
        pods: vec![
            pod("web-0", "shop", Some("172.17.0.4")),
            pod("web-1", "shop", Some("172.17.0.41")),
            pod("init-job", "batch", None),
            pod("db-0", "data", Some("172.17.1.9")),
        ],
        namespaces: ["default", "kube-system", "shop", "batch", "data"]
            .iter()
            .map(|name| NamespaceInfo {
                name: name.to_string(),
            })
            .collect(),
    })
}

async fn run(args: &[&str]) -> Result<(Outcome, String)> {
    let cli = Cli::try_parse_from(std::iter::once("resolver").chain(args.iter().copied()))
        .expect("arguments should parse");
    let action = Action::from_cli(&cli)?;
    let settings = Settings::new(&ResolverConfig::default(), cli.filter_namespace);

    let mut out = Vec::new();
    let outcome =
        handle_action(&action, &cluster(), &settings, &Stopwatch::start(), &mut out).await?;
    Ok((outcome, String::from_utf8(out).expect("utf-8 output")))
}

#[tokio::test]
async fn test_resolve_pod_ip() {
    let (outcome, output) = run(&["--pod-ip", "172.17.1.9", "--dc", "IL", "--namespace", "data"])
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::PodsFound(1));
    assert_eq!(
        output,
        "+------------+-----------+\n\
         | Pod's Name | Namespace |\n\
         +============+===========+\n\
         | db-0       | data      |\n\
         +------------+-----------+\n\
         Resolver runtime was 0 seconds\n"
    );
}

#[tokio::test]
async fn test_prefix_overlap_reports_every_match() {
    let (outcome, output) = run(&["--pod-ip", "172.17.0.4"]).await.unwrap();

    assert_eq!(outcome, Outcome::PodsFound(2));
    assert!(output.contains("web-0"));
    assert!(output.contains("web-1"));
}

#[tokio::test]
async fn test_namespace_has_no_effect_by_default() {
    let (outcome, _) = run(&["--pod-ip", "172.17", "--namespace", "missing"])
        .await
        .unwrap();
    assert_eq!(outcome, Outcome::PodsFound(3));

    let (outcome, _) = run(&["--pod-ip", "172.17", "--namespace", "missing", "--filter-namespace"])
        .await
        .unwrap();
    assert_eq!(outcome, Outcome::PodNotFound);
}

#[tokio::test]
async fn test_unknown_ip() {
    let (outcome, output) = run(&["--pod-ip", "10.0.0.1"]).await.unwrap();

    assert_eq!(outcome, Outcome::PodNotFound);
    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(output.matches("Cannot find specific pod ip to name").count(), 1);
}

#[tokio::test]
async fn test_show_namespaces_and_hint() {
    let (outcome, output) = run(&["--show", "--ns"]).await.unwrap();
    assert_eq!(outcome.exit_code(), 0);
    assert!(output.starts_with("[default, kube-system, shop, batch, data]\n"));

    let (outcome, output) = run(&["--show"]).await.unwrap();
    assert_eq!(outcome.exit_code(), 1);
    assert!(output.contains("[IL, FR, SY, CH]"));
}

#[tokio::test]
async fn test_show_with_dc_is_invalid() {
    let err = run(&["--show", "--dc", "FR"]).await.unwrap_err();
    assert!(matches!(err, ResolverError::InvalidArguments(_)));
}

#[test]
fn test_error_types() {
    let err = ResolverError::ApiRejected {
        code: 401,
        message: "Unauthorized".to_string(),
    };

    assert!(err.to_string().contains("401"));
    assert!(err.to_string().contains("Unauthorized"));
}

#[test]
fn test_version_const() {
    assert!(!pod_resolver::VERSION.is_empty());
}
