use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expires_in: i64,  // seconds
    pub refresh_token_expires_in: i64, // seconds
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Directory holding the four state files. `None` keeps state in memory.
    #[serde(default)]
    pub data_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub starting_balance_cents: i64,
    pub jackpot_delay_ms: u64,
    pub lucky_draw_delay_ms: u64,
    pub max_multiplier: u32,
    pub next_draw_interval_secs: i64,
    /// Fixed seed for reproducible demo sessions.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_balance_cents: 100_000,
            jackpot_delay_ms: 2000,
            lucky_draw_delay_ms: 3000,
            max_multiplier: 10,
            next_draw_interval_secs: 60,
            rng_seed: None,
        }
    }
}

impl GameConfig {
    pub fn jackpot_delay(&self) -> Duration {
        Duration::from_millis(self.jackpot_delay_ms)
    }

    pub fn lucky_draw_delay(&self) -> Duration {
        Duration::from_millis(self.lucky_draw_delay_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub admin_email: String,
    pub admin_password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_email: "admin@betbliss.com".to_string(),
            admin_password: "admin123".to_string(),
        }
    }
}

impl Config {
    pub fn from_toml() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        // A missing file is fine: everything has an env var or a default.
        let config_result = std::fs::read_to_string(&config_path);

        let mut config: Config = match config_result {
            Ok(config_str) => toml::from_str(&config_str)
                .map_err(|e| format!("Failed to parse config file: {e}"))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                fn get_env(name: &str) -> Option<String> {
                    env::var(name).ok()
                }
                fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
                    env::var(name)
                        .ok()
                        .and_then(|v| v.parse::<T>().ok())
                        .unwrap_or(default)
                }

                Config {
                    server: ServerConfig {
                        host: get_env("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                        port: get_env_parse("SERVER_PORT", 8080u16),
                    },
                    jwt: JwtConfig {
                        secret: get_env("JWT_SECRET")
                            .unwrap_or_else(|| "change-me-in-production".to_string()),
                        access_token_expires_in: get_env_parse("JWT_ACCESS_EXPIRES_IN", 7200i64),
                        refresh_token_expires_in: get_env_parse(
                            "JWT_REFRESH_EXPIRES_IN",
                            2_592_000i64,
                        ),
                    },
                    storage: StorageConfig::default(),
                    game: GameConfig::default(),
                    auth: AuthConfig::default(),
                }
            }
            Err(e) => {
                return Err(format!("Unable to read config file {config_path}: {e}").into());
            }
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Environment variables win over file values.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = env::var("SERVER_HOST") {
            self.server.host = v;
        }
        if let Ok(v) = env::var("SERVER_PORT")
            && let Ok(p) = v.parse()
        {
            self.server.port = p;
        }
        if let Ok(v) = env::var("JWT_SECRET") {
            self.jwt.secret = v;
        }
        if let Ok(v) = env::var("JWT_ACCESS_EXPIRES_IN")
            && let Ok(n) = v.parse()
        {
            self.jwt.access_token_expires_in = n;
        }
        if let Ok(v) = env::var("JWT_REFRESH_EXPIRES_IN")
            && let Ok(n) = v.parse()
        {
            self.jwt.refresh_token_expires_in = n;
        }
        if let Ok(v) = env::var("DATA_DIR") {
            self.storage.data_dir = Some(v).filter(|d| !d.is_empty());
        }
        if let Ok(v) = env::var("STARTING_BALANCE_CENTS")
            && let Ok(n) = v.parse()
        {
            self.game.starting_balance_cents = n;
        }
        if let Ok(v) = env::var("JACKPOT_DELAY_MS")
            && let Ok(n) = v.parse()
        {
            self.game.jackpot_delay_ms = n;
        }
        if let Ok(v) = env::var("LUCKY_DRAW_DELAY_MS")
            && let Ok(n) = v.parse()
        {
            self.game.lucky_draw_delay_ms = n;
        }
        if let Ok(v) = env::var("MAX_MULTIPLIER")
            && let Ok(n) = v.parse()
        {
            self.game.max_multiplier = n;
        }
        if let Ok(v) = env::var("NEXT_DRAW_INTERVAL_SECS")
            && let Ok(n) = v.parse()
        {
            self.game.next_draw_interval_secs = n;
        }
        if let Ok(v) = env::var("RNG_SEED")
            && let Ok(n) = v.parse()
        {
            self.game.rng_seed = Some(n);
        }
        if let Ok(v) = env::var("ADMIN_EMAIL") {
            self.auth.admin_email = v;
        }
        if let Ok(v) = env::var("ADMIN_PASSWORD") {
            self.auth.admin_password = v;
        }
    }

    fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.game.max_multiplier == 0 {
            return Err("game.max_multiplier must be at least 1".into());
        }
        if self.game.starting_balance_cents < 0 {
            return Err("game.starting_balance_cents must not be negative".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_toml_uses_defaults() {
        let raw = r#"
            [server]
            host = "127.0.0.1"
            port = 9000

            [jwt]
            secret = "s3cret"
            access_token_expires_in = 60
            refresh_token_expires_in = 600
        "#;
        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.server.port, 9000);
        assert!(config.storage.data_dir.is_none());
        assert_eq!(config.game.starting_balance_cents, 100_000);
        assert_eq!(config.game.jackpot_delay(), Duration::from_millis(2000));
        assert_eq!(config.game.lucky_draw_delay(), Duration::from_millis(3000));
        assert_eq!(config.auth.admin_email, "admin@betbliss.com");
    }

    #[test]
    fn test_parse_game_section() {
        let raw = r#"
            [server]
            host = "127.0.0.1"
            port = 9000

            [jwt]
            secret = "s3cret"
            access_token_expires_in = 60
            refresh_token_expires_in = 600

            [storage]
            data_dir = "/tmp/betbliss"

            [game]
            jackpot_delay_ms = 0
            rng_seed = 42
        "#;
        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.storage.data_dir.as_deref(), Some("/tmp/betbliss"));
        assert_eq!(config.game.jackpot_delay_ms, 0);
        assert_eq!(config.game.lucky_draw_delay_ms, 3000);
        assert_eq!(config.game.rng_seed, Some(42));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_multiplier_rejected() {
        let mut config: Config = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9000
            [jwt]
            secret = "s3cret"
            access_token_expires_in = 60
            refresh_token_expires_in = 600
        "#,
        )
        .unwrap();
        config.game.max_multiplier = 0;
        assert!(config.validate().is_err());
    }
}
