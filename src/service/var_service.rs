use anyhow::{anyhow, Result};
use std::env::var;

pub async fn get_bind_address() -> Result<String> {
    match var("PORT") {
        Ok(port) => match port.parse::<u16>() {
            Ok(port) => Ok(format!("0.0.0.0:{}", port)),
            Err(e) => {
                let err = format!("Failed to parse PORT to u16: {}", e);
                tracing::error!(err);
                Err(anyhow!(err))
            }
        },
        Err(_) => Ok("0.0.0.0:5000".to_string()),
    }
}

pub async fn get_cache_db_path() -> Result<String> {
    match var("CACHE_DB_PATH") {
        Ok(path) => match path.is_empty() {
            true => {
                let err = "CACHE_DB_PATH is empty";
                tracing::error!(err);
                Err(anyhow!(err))
            }
            false => Ok(path),
        },
        Err(_) => Ok("capital_facts_cache.sqlite".to_string()),
    }
}

pub async fn get_wikipedia_enrichment() -> Result<bool> {
    match var("WIKIPEDIA_ENRICHMENT") {
        Ok(value) => match value.to_lowercase().as_str() {
            "false" | "0" | "off" => Ok(false),
            _ => Ok(true),
        },
        Err(_) => Ok(true),
    }
}
