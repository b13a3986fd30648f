use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret used to sign and verify bearer tokens.
    pub token_key: String,
    pub token_expire_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectStoreConfig {
    pub bucket: String,
    pub region: String,
    /// S3-compatible endpoint (e.g. Yandex Object Storage).
    pub endpoint: String,
    /// Base under which stored keys are publicly resolvable.
    pub public_base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixturesConfig {
    /// Directory holding the JSON seed files for the add_all endpoints.
    pub dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub fixtures: FixturesConfig,
    pub object_store: Option<ObjectStoreConfig>,
}

pub fn load() -> anyhow::Result<AppConfig> {
    // Load .env first (optional)
    let _ = dotenvy::dotenv();

    let defaults: &str = include_str!("../config/default.toml");
    let mut builder = ::config::Config::builder()
        .add_source(::config::File::from_str(defaults, ::config::FileFormat::Toml))
        // Optional local file: aedb.toml (in CWD)
        .add_source(::config::File::with_name("aedb").required(false));

    if let Ok(custom_path) = std::env::var("AEDB_CONFIG") {
        builder = builder.add_source(::config::File::with_name(&custom_path).required(false));
    }
    // Environment variables last to have highest precedence
    builder = builder.add_source(::config::Environment::with_prefix("AEDB").separator("__"));

    let cfg = builder.build()?;
    let app_cfg: AppConfig = cfg.try_deserialize()?;
    validate(&app_cfg)?;
    Ok(app_cfg)
}

fn validate(cfg: &AppConfig) -> anyhow::Result<()> {
    // Server
    if cfg.server.port == 0 {
        return Err(anyhow::anyhow!("invalid server.port: {}", cfg.server.port));
    }
    #[cfg(unix)]
    if cfg.server.port < 1024 {
        tracing::warn!("Using privileged port {} - may require elevated permissions", cfg.server.port);
    }

    // Auth
    if cfg.auth.token_key.is_empty() {
        return Err(anyhow::anyhow!("auth.token_key must not be empty"));
    }
    if cfg.auth.token_key == "change-me" {
        tracing::warn!("auth.token_key is the embedded default - override it in production");
    }
    if cfg.auth.token_expire_minutes <= 0 {
        return Err(anyhow::anyhow!(
            "auth.token_expire_minutes must be > 0, got {}",
            cfg.auth.token_expire_minutes
        ));
    }

    // Object store: validated only when configured
    if let Some(ref os) = cfg.object_store {
        if os.bucket.is_empty() {
            return Err(anyhow::anyhow!("object_store.bucket must not be empty"));
        }
        if os.endpoint.is_empty() || os.public_base_url.is_empty() {
            return Err(anyhow::anyhow!(
                "object_store.endpoint and public_base_url must not be empty"
            ));
        }
    }

    Ok(())
}

pub fn ensure_sqlite_parent_dir(url: &str) -> anyhow::Result<()> {
    if let Some(path) = url.strip_prefix("sqlite://") {
        let p = Path::new(path);
        if let Some(parent) = p.parent() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
