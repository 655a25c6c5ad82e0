use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port the storefront server listens on
    pub port: u16,
    /// Directory holding the JSON documents (personalizations, coupons)
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            port: env_parse("STOREFRONT_PORT", 8080)?,
            data_dir: PathBuf::from(env_str("STOREFRONT_DATA_DIR", "./data")),
        })
    }
}

fn env_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse env var {key}={val}: {e}")),
        Err(_) => Ok(default),
    }
}

/// Resolve the Dioxus frontend dist directory.
///
/// If `FRONTEND_DIST` is set, that value is used as-is. Otherwise resolve
/// from the workspace root so this works whether the server is launched from
/// the repository root or from `storefront-server/`.
pub fn frontend_dist_from_env() -> String {
    if let Ok(path) = std::env::var("FRONTEND_DIST") {
        return path;
    }

    let workspace_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    workspace_root
        .join("storefront-ui/target/dx/storefront-ui/debug/web/public")
        .to_string_lossy()
        .to_string()
}
