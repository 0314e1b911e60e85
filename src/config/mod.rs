use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

/// Default board dimensions, matching a standard 15x15 word-tile board.
const DEFAULT_BOARD_ROWS: usize = 15;
const DEFAULT_BOARD_COLS: usize = 15;
/// Default edge length in pixels of one rendered board cell.
const DEFAULT_CELL_SIZE: u32 = 32;

#[derive(Debug, Deserialize, Clone)]
pub struct CommonConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl CommonConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    #[serde(flatten)]
    pub common: CommonConfig,
    pub lexicon: LexiconConfig,
    pub board: BoardConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LexiconConfig {
    /// Path to the newline-delimited word list, read once at startup.
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    /// Edge length in pixels of one cell in the rendered board image.
    pub cell_size: u32,
}

impl ServiceConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = CommonConfig::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let config = ServiceConfig {
            common,
            lexicon: LexiconConfig {
                path: get_env("LEXICON_PATH", Some("sowpods.txt"), is_prod)?,
            },
            board: BoardConfig {
                rows: parse_env(get_env(
                    "BOARD_ROWS",
                    Some(&DEFAULT_BOARD_ROWS.to_string()),
                    is_prod,
                )?)?,
                cols: parse_env(get_env(
                    "BOARD_COLS",
                    Some(&DEFAULT_BOARD_COLS.to_string()),
                    is_prod,
                )?)?,
                cell_size: parse_env(get_env(
                    "BOARD_CELL_SIZE",
                    Some(&DEFAULT_CELL_SIZE.to_string()),
                    is_prod,
                )?)?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.board.rows == 0 || self.board.cols == 0 {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "board dimensions must be non-zero, got {}x{}",
                self.board.rows,
                self.board.cols
            )));
        }
        if self.board.cell_size == 0 {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "board cell size must be non-zero"
            )));
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(value: String) -> Result<T, AppError>
where
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| AppError::ConfigError(anyhow::anyhow!("invalid value {:?}: {}", value, e)))
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
