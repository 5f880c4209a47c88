use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{bail, Context};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "flowdoc.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub lookup_url: String,
    pub submission_url: String,
    pub notification_duration_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lookup_url: "https://n8n.jetsalesbrasil.com/webhook/5978ad8c-77c4-4e0c-a6a9-46ca24ab54c5"
                .into(),
            submission_url:
                "https://n8n.jetsalesbrasil.com/webhook/e8f08853-b006-4d65-87b3-3554001d6e72"
                    .into(),
            notification_duration_ms: 5000,
        }
    }
}

impl Settings {
    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_duration_ms)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    lookup_url: Option<String>,
    submission_url: Option<String>,
    notification_duration_ms: Option<u64>,
}

/// Defaults, then the config file, then the environment.
///
/// An explicit `path` must exist; the default `flowdoc.toml` is optional.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let (path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };
    match fs::read_to_string(&path) {
        Ok(raw) => apply_file(&mut settings, &raw)
            .with_context(|| format!("invalid config file '{}'", path.display()))?,
        Err(err) if required => {
            return Err(anyhow::Error::new(err)
                .context(format!("failed to read '{}'", path.display())));
        }
        Err(_) => {}
    }

    apply_env(&mut settings, |key| std::env::var(key).ok())?;
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw)?;
    if let Some(v) = file_cfg.lookup_url {
        settings.lookup_url = v;
    }
    if let Some(v) = file_cfg.submission_url {
        settings.submission_url = v;
    }
    if let Some(v) = file_cfg.notification_duration_ms {
        settings.notification_duration_ms = v;
    }
    Ok(())
}

fn apply_env(
    settings: &mut Settings,
    var: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<()> {
    if let Some(v) = var("FLOWDOC_LOOKUP_URL") {
        settings.lookup_url = v;
    }
    if let Some(v) = var("APP__LOOKUP_URL") {
        settings.lookup_url = v;
    }

    if let Some(v) = var("FLOWDOC_SUBMISSION_URL") {
        settings.submission_url = v;
    }
    if let Some(v) = var("APP__SUBMISSION_URL") {
        settings.submission_url = v;
    }

    for key in ["FLOWDOC_NOTIFICATION_MS", "APP__NOTIFICATION_MS"] {
        if let Some(v) = var(key) {
            settings.notification_duration_ms = v
                .trim()
                .parse()
                .with_context(|| format!("{key} must be a number of milliseconds, got '{v}'"))?;
        }
    }

    Ok(())
}

pub fn parse_endpoint_url(name: &str, raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("{name} is not a valid URL: '{raw}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("{name} must use http or https, got '{}'", url.scheme());
    }
    Ok(url)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
