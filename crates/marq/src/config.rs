// Author: Dustin Pilgrim
// License: MIT

use std::env;
use std::path::PathBuf;

use rune_cfg::RuneConfig;

#[derive(Debug, Clone)]
pub struct MarqConfig {
    pub guide_colour: u32,       // ARGB
    pub handle_colour: u32,      // ARGB
    pub max_display_width: i32,
}

impl Default for MarqConfig {
    fn default() -> Self {
        Self {
            guide_colour: 0xFF66_CCFF,
            handle_colour: 0xFFFF_D60A,
            max_display_width: 1400,
        }
    }
}

pub fn load() -> Result<MarqConfig, String> {
    let path = default_user_config_path();

    if !path.exists() {
        return Ok(MarqConfig::default());
    }

    let rc = RuneConfig::from_file(&path)
        .map_err(|e| format!("failed to read config: {e}"))?;

    parse_config(&rc)
}

fn parse_config(rc: &RuneConfig) -> Result<MarqConfig, String> {
    let mut cfg = MarqConfig::default();

    if !rc.has("marq") {
        return Ok(cfg);
    }

    if let Some(colour_str) = rc
        .get_optional::<String>("marq.guide_colour")
        .map_err(|e| format!("config error at marq.guide_colour: {e}"))?
    {
        cfg.guide_colour = parse_hex_colour(&colour_str)
            .map_err(|e| format!("config error at marq.guide_colour: {e}"))?;
    }

    if let Some(colour_str) = rc
        .get_optional::<String>("marq.handle_colour")
        .map_err(|e| format!("config error at marq.handle_colour: {e}"))?
    {
        cfg.handle_colour = parse_hex_colour(&colour_str)
            .map_err(|e| format!("config error at marq.handle_colour: {e}"))?;
    }

    if let Some(width_str) = rc
        .get_optional::<String>("marq.max_display_width")
        .map_err(|e| format!("config error at marq.max_display_width: {e}"))?
    {
        cfg.max_display_width = width_str
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|w| *w > 0)
            .ok_or_else(|| {
                format!(
                    "config error at marq.max_display_width: expected a positive integer, got \"{}\"",
                    width_str
                )
            })?;
    }

    Ok(cfg)
}

fn parse_hex_colour(s: &str) -> Result<u32, String> {
    let s = s.trim();

    if !s.starts_with('#') {
        return Err("colour must start with #".into());
    }

    let hex = &s[1..];

    if hex.len() != 6 {
        return Err("colour must be 6 hex digits (RRGGBB)".into());
    }

    let rgb = u32::from_str_radix(hex, 16)
        .map_err(|_| "invalid hex colour".to_string())?;

    Ok(0xFF00_0000 | rgb)
}

fn default_user_config_path() -> PathBuf {
    let dir: PathBuf = if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg)
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| ".".into());
        PathBuf::from(home).join(".config")
    };

    dir.join("marq").join("marq.rune")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colours_gain_full_alpha() {
        assert_eq!(parse_hex_colour("#66ccff"), Ok(0xFF66_CCFF));
        assert_eq!(parse_hex_colour(" #FFD60A "), Ok(0xFFFF_D60A));
        assert!(parse_hex_colour("66ccff").is_err());
        assert!(parse_hex_colour("#66ccff00").is_err());
        assert!(parse_hex_colour("#xyzxyz").is_err());
    }
}
