pub mod client;
pub mod types;

pub use client::{ClusterSource, K8sClient};
pub use types::{ClusterSnapshot, NamespaceInfo, PodInfo};
