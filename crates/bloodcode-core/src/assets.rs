//! Environment-conditioned asset path resolution.
//!
//! Scene images in case definitions are site-root-relative
//! (`/suburban-scene.png`). Development serves them as-is; production
//! deployments live under a base path that must be prefixed. This is a
//! presentation-side utility, not part of the game core.

/// Deployment environment for asset resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetEnv {
    Development,
    Production,
}

impl AssetEnv {
    /// Read from `BLOODCODE_ENV`; anything other than `production`
    /// (including unset) is development.
    pub fn from_env() -> Self {
        match std::env::var("BLOODCODE_ENV") {
            Ok(v) if v == "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

/// Resolve an asset path, prefixing the base path in production.
/// The input is normalized to start with `/`.
pub fn asset_path(path: &str, env: AssetEnv, base_path: &str) -> String {
    let normalized = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };
    match env {
        AssetEnv::Development => normalized,
        AssetEnv::Production => {
            let base = base_path.trim_end_matches('/');
            if base.is_empty() {
                normalized
            } else if base.starts_with('/') {
                format!("{}{}", base, normalized)
            } else {
                format!("/{}{}", base, normalized)
            }
        }
    }
}
