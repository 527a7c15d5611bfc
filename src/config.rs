use std::env;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub seed_inventory: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port = match env::var("APP_PORT") {
            Ok(p) => p
                .parse::<u16>()
                .with_context(|| format!("invalid APP_PORT {p:?}"))?,
            Err(_) => 8080,
        };
        let seed_inventory = env::var("APP_SEED_INVENTORY")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);
        Ok(Self {
            host,
            port,
            seed_inventory,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::parse_flag;

    #[test]
    fn seed_flag_values() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(" OFF "));
        assert!(!parse_flag("0"));
    }
}
