use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LauncherError {
    #[error("config file not found at {0}")]
    ConfigNotFound(PathBuf),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(
        "IP address of this machine does not match any IP address supplied in the \
         `storm.yaml` -> `storm.zookeeper.servers` section of the cluster config"
    )]
    ConfigurationMismatch,

    #[error("Must start at least one of Zookeeper or Zookeeper ambassador. Exiting.")]
    NoContainerRequested,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("address discovery failed: {0}")]
    AddressDiscovery(String),

    #[error("docker operation failed: {0}")]
    Docker(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LauncherError {
    /// Process exit code the binary reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LauncherError::NoContainerRequested => 1,
            LauncherError::InvalidArgument(_) => 2,
            LauncherError::ConfigurationMismatch => 3,
            _ => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, LauncherError>;
