use crate::k8s::types::{ClusterSnapshot, NamespaceInfo, PodInfo};
use crate::Result;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::{Namespace, Pod};
use kube::{Api, Client};
use tracing::{debug, info};

/// Source of the pod and namespace lists a run operates on.
#[async_trait]
pub trait ClusterSource {
    async fn fetch(&self) -> Result<ClusterSnapshot>;
}

pub struct K8sClient {
    client: Client,
}

impl K8sClient {
    /// Connects using the ambient kubeconfig or in-cluster service account.
    pub async fn try_default() -> Result<Self> {
        debug!("Initializing Kubernetes client");

        let client = Client::try_default().await?;

        info!("Successfully connected to Kubernetes cluster");

        Ok(Self { client })
    }

    fn pods_all(&self) -> Api<Pod> {
        Api::all(self.client.clone())
    }

    fn namespaces(&self) -> Api<Namespace> {
        Api::all(self.client.clone())
    }

    pub async fn list_pods(&self) -> Result<Vec<PodInfo>> {
        let pod_list = self.pods_all().list(&Default::default()).await?;

        debug!("Listed {} pod(s) across all namespaces", pod_list.items.len());

        Ok(pod_list.items.iter().map(PodInfo::from_k8s_pod).collect())
    }

    pub async fn list_namespaces(&self) -> Result<Vec<NamespaceInfo>> {
        let ns_list = self.namespaces().list(&Default::default()).await?;

        debug!("Listed {} namespace(s)", ns_list.items.len());

        Ok(ns_list
            .items
            .iter()
            .map(NamespaceInfo::from_k8s_namespace)
            .collect())
    }
}

#[async_trait]
impl ClusterSource for K8sClient {
    async fn fetch(&self) -> Result<ClusterSnapshot> {
        let pods = self.list_pods().await?;
        let namespaces = self.list_namespaces().await?;

        Ok(ClusterSnapshot { pods, namespaces })
    }
}
