// Configuration module entry point
// Loads startup configuration and builds the shared immutable state

mod state;
mod types;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, RoutesConfig, ServerConfig};

impl Config {
    /// Load configuration from the default `registry.toml` (if present),
    /// environment variables, and built-in defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("registry")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; defaults reproduce the reference deployment
    /// (all interfaces, port 8080, `test-registry` document root).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("REGISTRY"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.root", "test-registry")?
            .set_default("logging.access_log", true)?
            .set_default("routes.index_files", vec!["index.html", "index.htm"])?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Resolve the document root to an absolute path.
    ///
    /// A relative root is anchored at the directory containing the running
    /// executable, not the invoking shell's working directory, so behavior
    /// does not depend on where the server is started from. The directory is
    /// not required to exist at startup; missing roots yield 404s per request.
    pub fn resolve_root(&self) -> std::io::Result<PathBuf> {
        let root = Path::new(&self.server.root);
        if root.is_absolute() {
            return Ok(root.to_path_buf());
        }

        let exe = std::env::current_exe()?;
        let exe_dir = exe.parent().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "executable has no parent directory",
            )
        })?;
        Ok(exe_dir.join(root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_deployment() {
        let cfg = Config::load_from("no-such-config-file").expect("defaults should load");
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.root, "test-registry");
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.routes.index_files, vec!["index.html", "index.htm"]);
        assert!(cfg.server.workers.is_none());
    }

    #[test]
    fn socket_addr_from_defaults() {
        let cfg = Config::load_from("no-such-config-file").expect("defaults should load");
        let addr = cfg.socket_addr().expect("valid address");
        assert_eq!(addr.port(), 8080);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn absolute_root_is_kept_verbatim() {
        let mut cfg = Config::load_from("no-such-config-file").expect("defaults should load");
        cfg.server.root = if cfg!(windows) {
            "C:\\fixtures".to_string()
        } else {
            "/srv/fixtures".to_string()
        };
        let resolved = cfg.resolve_root().expect("resolvable");
        assert_eq!(resolved, PathBuf::from(&cfg.server.root));
    }

    #[test]
    fn relative_root_is_anchored_at_executable_dir() {
        let cfg = Config::load_from("no-such-config-file").expect("defaults should load");
        let resolved = cfg.resolve_root().expect("resolvable");
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("test-registry"));
    }
}
