use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("Failed to load cluster configuration: {0}")]
    KubeConfigError(String),

    #[error("Kubernetes error: {0}")]
    KubernetesError(String),

    #[error("Kubernetes API rejected the request ({code}): {message}")]
    ApiRejected { code: u16, message: String },

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<kube::Error> for ResolverError {
    fn from(err: kube::Error) -> Self {
        match err {
            kube::Error::Api(response) => ResolverError::ApiRejected {
                code: response.code,
                message: response.message,
            },
            kube::Error::InferConfig(e) => ResolverError::KubeConfigError(e.to_string()),
            other => ResolverError::KubernetesError(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ResolverError>;
