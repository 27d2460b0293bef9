// src/config.rs
use serde::Deserialize;
use web_sys::window;

use crate::notice::NOTICE_TTL_MS;

/// Id of the `<script type="application/json">` block in index.html.
pub const CONFIG_ELEMENT_ID: &str = "board-config";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    /// Prefix for every API path. Empty = same origin as the page.
    pub api_base: String,
    pub notice_ttl_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            notice_ttl_ms: NOTICE_TTL_MS,
        }
    }
}

pub fn parse_config(raw: &str) -> Result<BoardConfig, serde_json::Error> {
    if raw.trim().is_empty() {
        return Ok(BoardConfig::default());
    }
    serde_json::from_str(raw)
}

fn config_json_from_dom() -> Result<String, String> {
    let win = window().ok_or("no window")?;
    let doc = win.document().ok_or("no document")?;
    let el = doc
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .ok_or("missing <script id=\"board-config\" type=\"application/json\">")?;
    Ok(el.text_content().unwrap_or_default())
}

/// Reads the page's config block; anything wrong with it falls back to
/// defaults.
pub fn load_config() -> BoardConfig {
    let raw = match config_json_from_dom() {
        Ok(s) => s,
        Err(e) => {
            log::warn!("{e}; using default config");
            return BoardConfig::default();
        }
    };
    match parse_config(&raw) {
        Ok(cfg) => {
            log::debug!("config: {cfg:?}");
            cfg
        }
        Err(e) => {
            log::warn!("bad board-config JSON ({e}); using default config");
            BoardConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_block_means_defaults() {
        assert_eq!(parse_config("").unwrap(), BoardConfig::default());
        assert_eq!(parse_config("  \n ").unwrap(), BoardConfig::default());
        assert_eq!(parse_config("{}").unwrap(), BoardConfig::default());
    }

    #[test]
    fn defaults() {
        let cfg = BoardConfig::default();
        assert_eq!(cfg.api_base, "");
        assert_eq!(cfg.notice_ttl_ms, 5_000);
    }

    #[test]
    fn partial_override() {
        let cfg = parse_config(r#"{"api_base": "https://api.mergington.edu"}"#).unwrap();
        assert_eq!(cfg.api_base, "https://api.mergington.edu");
        assert_eq!(cfg.notice_ttl_ms, 5_000);
    }

    #[test]
    fn malformed_is_an_error() {
        assert!(parse_config("{api_base:").is_err());
        assert!(parse_config(r#"{"notice_ttl_ms": "soon"}"#).is_err());
    }
}
