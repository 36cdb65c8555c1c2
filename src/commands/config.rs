use crate::config::Config;
use anyhow::{Context, Result};

/// Redacted copy for display; keys never reach stdout
fn redacted(config: &Config) -> Config {
    let mut shown = config.clone();
    if shown.youtube.api_key.is_some() {
        shown.youtube.api_key = Some("********".to_string());
    }
    shown
}

pub fn list(config: &Config) -> Result<()> {
    let toml_str =
        toml::to_string_pretty(&redacted(config)).context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

/// Look up a dotted key, e.g. `youtube.video_id`
pub fn lookup(key: &str, config: &Config) -> Result<serde_json::Value> {
    let value = serde_json::to_value(redacted(config)).context("Failed to serialize config")?;

    let mut current = &value;
    for part in key.split('.') {
        current = current
            .get(part)
            .with_context(|| format!("Key not found: {}", part))?;
    }
    Ok(current.clone())
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    match lookup(key, config)? {
        serde_json::Value::String(s) => println!("{}", s),
        v => println!("{}", v),
    }
    Ok(())
}
