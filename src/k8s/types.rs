use k8s_openapi::api::core::v1::{Namespace, Pod};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodInfo {
    pub name: String,
    pub namespace: String,
    pub pod_ip: Option<String>,
}

impl PodInfo {
    pub fn from_k8s_pod(pod: &Pod) -> Self {
        let metadata = &pod.metadata;
        let status = pod.status.as_ref();

        Self {
            name: metadata.name.clone().unwrap_or_default(),
            namespace: metadata.namespace.clone().unwrap_or_default(),
            pod_ip: status.and_then(|s| s.pod_ip.clone()),
        }
    }

    /// Unanchored, case-sensitive containment test against the pod IP.
    /// Pods that have not been assigned an IP never match.
    pub fn ip_contains(&self, query: &str) -> bool {
        self.pod_ip
            .as_deref()
            .map(|ip| ip.contains(query))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceInfo {
    pub name: String,
}

impl NamespaceInfo {
    pub fn from_k8s_namespace(namespace: &Namespace) -> Self {
        Self {
            name: namespace.metadata.name.clone().unwrap_or_default(),
        }
    }
}

/// Everything fetched from the cluster in a single run, in API response order.
#[derive(Debug, Clone, Default)]
pub struct ClusterSnapshot {
    pub pods: Vec<PodInfo>,
    pub namespaces: Vec<NamespaceInfo>,
}
