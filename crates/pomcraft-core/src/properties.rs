use std::collections::BTreeMap;
use std::path::Path;

/// Loads a `.pomcraft.env` file (shell-style `KEY=value` format).
///
/// `.pomcraft.env` holds values that should stay out of `Pomcraft.toml`,
/// such as private repository hosts. Values are available via `${env:VAR}`
/// interpolation in the manifest.
pub fn load_env_file(path: &Path) -> miette::Result<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    if !path.is_file() {
        return Ok(map);
    }
    let content =
        std::fs::read_to_string(path).map_err(pomcraft_util::errors::PomcraftError::Io)?;
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = trimmed.split_once('=') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    Ok(map)
}

/// Interpolate `${env:VAR}` references in a string.
///
/// Looks up values first from `env_overrides` (populated from
/// `.pomcraft.env`), then falls back to process environment variables.
/// Unknown keys resolve to the empty string.
pub fn interpolate(input: &str, env_overrides: &BTreeMap<String, String>) -> String {
    let mut result = input.to_string();
    let mut from = 0;
    while let Some(offset) = result[from..].find("${env:") {
        let start = from + offset;
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let end = start + end;
        let key = &result[start + 6..end];
        let value = env_overrides
            .get(key)
            .cloned()
            .or_else(|| std::env::var(key).ok())
            .unwrap_or_default();
        result.replace_range(start..=end, &value);
        from = start + value.len();
    }
    result
}
