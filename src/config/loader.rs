//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{ShareTreeError, ShareTreeResult};

use super::types::{ColorMode, Config, SizeUnits};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ShareTreeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ShareTreeError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// An explicit path must exist; the user config is optional.
pub fn resolve(explicit: Option<&Path>) -> ShareTreeResult<(Config, Vec<ConfigWarning>)> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => user_config_path().filter(|p| p.exists()),
    };

    let (config, warnings) = match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    for w in &warnings {
        match &w.suggestion {
            Some(suggestion) => warn!(
                key = %w.key,
                file = %w.file.display(),
                line = ?w.line,
                "unknown config key, did you mean '{}'?",
                suggestion
            ),
            None => warn!(key = %w.key, file = %w.file.display(), line = ?w.line, "unknown config key"),
        }
    }

    Ok((config.with_env_overrides(), warnings))
}

/// Apply environment variable overrides (SHARETREE_* prefix).
///
/// Values that do not parse are ignored.
pub fn with_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    // SHARETREE_COLOR
    if let Some(color) = get_env("SHARETREE_COLOR") {
        match color.to_lowercase().as_str() {
            "auto" => config.output.color = ColorMode::Auto,
            "always" => config.output.color = ColorMode::Always,
            "never" => config.output.color = ColorMode::Never,
            _ => {}
        }
    }

    // SHARETREE_UNICODE
    if let Some(val) = get_env("SHARETREE_UNICODE") {
        config.output.unicode = val.to_lowercase() != "false" && val != "0";
    }

    // SHARETREE_EXPAND_DEPTH
    if let Some(depth) = get_env("SHARETREE_EXPAND_DEPTH") {
        if let Ok(depth) = depth.trim().parse::<usize>() {
            config.browse.expand_depth = depth;
        }
    }

    // SHARETREE_SIZE_UNITS
    if let Some(units) = get_env("SHARETREE_SIZE_UNITS") {
        match units.to_lowercase().as_str() {
            "decimal" => config.browse.size_units = SizeUnits::Decimal,
            "binary" => config.browse.size_units = SizeUnits::Binary,
            _ => {}
        }
    }

    config
}

/// ~/.config/sharetree/config.toml, honoring XDG_CONFIG_HOME
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .map(|dir| dir.join("sharetree/config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "output",
        "color",
        "unicode",
        "browse",
        "expand_depth",
        "show_sizes",
        "size_units",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
