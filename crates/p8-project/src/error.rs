//! Error types for p8-project

use thiserror::Error;

/// Result type alias using p8-project's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Project tooling error types
#[derive(Error, Debug)]
pub enum Error {
    /// Package manager name not recognised
    #[error("Unknown package manager: {value}. Accepted values: {accepted}")]
    UnknownPackageManager { value: String, accepted: String },

    /// Workspace mode name not recognised
    #[error("Unknown workspace mode: {value}. Accepted values: {accepted}")]
    UnknownWorkspaceMode { value: String, accepted: String },

    /// Known package manager without a command for the requested mode
    #[error(
        "Unsupported workspace mode '{mode}' for {package_manager}. Supported modes: {supported}"
    )]
    UnsupportedWorkspaceMode {
        package_manager: String,
        mode: String,
        supported: String,
    },

    /// Project manifest missing where one is required
    #[error("package.json not found at: {path}")]
    ManifestNotFound { path: String },

    /// Project manifest present but unusable
    #[error("Invalid package.json at {path}: {message}")]
    InvalidManifest { path: String, message: String },

    /// Requested boilerplate asset is not bundled
    #[error("Asset not found: {name}")]
    AssetNotFound { name: String },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an unknown package manager error
    pub fn unknown_package_manager(value: impl Into<String>, accepted: &[&str]) -> Self {
        Self::UnknownPackageManager {
            value: value.into(),
            accepted: accepted.join(", "),
        }
    }

    /// Create an unknown workspace mode error
    pub fn unknown_workspace_mode(value: impl Into<String>, accepted: &[&str]) -> Self {
        Self::UnknownWorkspaceMode {
            value: value.into(),
            accepted: accepted.join(", "),
        }
    }

    /// Create an unsupported workspace mode error
    pub fn unsupported_workspace_mode(
        package_manager: impl Into<String>,
        mode: impl Into<String>,
        supported: &[&str],
    ) -> Self {
        Self::UnsupportedWorkspaceMode {
            package_manager: package_manager.into(),
            mode: mode.into(),
            supported: supported.join(", "),
        }
    }

    /// Create a manifest not found error
    pub fn manifest_not_found(path: impl Into<String>) -> Self {
        Self::ManifestNotFound { path: path.into() }
    }

    /// Create an invalid manifest error
    pub fn invalid_manifest(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidManifest {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an asset not found error
    pub fn asset_not_found(name: impl Into<String>) -> Self {
        Self::AssetNotFound { name: name.into() }
    }

    /// Whether this error reports a bad user-supplied configuration value
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownPackageManager { .. }
                | Self::UnknownWorkspaceMode { .. }
                | Self::UnsupportedWorkspaceMode { .. }
        )
    }
}
