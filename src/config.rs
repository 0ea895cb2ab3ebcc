use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;
use cross_xdg::BaseDirs;

/// Presentation settings. The generated program never depends on these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Print `Generated Brainfuck code:` before the program.
    pub header: bool,
    /// Prompt on stderr when reading from an interactive stdin.
    pub prompt: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { header: false, prompt: true }
    }
}

/// Values found in the config file; `None` means not set there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileSettings {
    pub header: Option<bool>,
    pub prompt: Option<bool>,
}

static FILE_SETTINGS: OnceLock<FileSettings> = OnceLock::new();

/// Settings from the config file, loaded once.
pub fn file_settings() -> &'static FileSettings {
    FILE_SETTINGS.get_or_init(|| load_from_toml().unwrap_or_default())
}

/// Resolve settings: flags, then `TEXT2BF_*` environment, then file, then defaults.
pub fn settings(header_flag: bool, no_prompt_flag: bool) -> Settings {
    resolve(header_flag, no_prompt_flag, |key| env::var(key).ok(), file_settings())
}

pub fn resolve<F>(header_flag: bool, no_prompt_flag: bool, lookup: F, file: &FileSettings) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = Settings::default();
    let from_env = |key: &str| lookup(key).as_deref().and_then(parse_bool);

    let header = if header_flag {
        true
    } else {
        from_env("TEXT2BF_HEADER").or(file.header).unwrap_or(defaults.header)
    };
    let prompt = if no_prompt_flag {
        false
    } else {
        from_env("TEXT2BF_PROMPT").or(file.prompt).unwrap_or(defaults.prompt)
    };

    Settings { header, prompt }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read the `[output]` section of a config file.
///
/// Unknown keys and values that are not booleans are ignored.
pub fn parse_settings(content: &str) -> FileSettings {
    let mut in_output = false;
    let mut map: HashMap<String, String> = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        if line.starts_with('[') && line.ends_with(']') {
            in_output = line[1..line.len() - 1].trim() == "output";
            continue;
        }
        if !in_output { continue; }
        if let Some((key, value)) = line.split_once('=') {
            let value = value.trim();
            // Accept quoted or unquoted
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            map.insert(key.trim().to_string(), value.to_string());
        }
    }

    FileSettings {
        header: map.get("header").and_then(|v| parse_bool(v)),
        prompt: map.get("prompt").and_then(|v| parse_bool(v)),
    }
}

fn load_from_toml() -> Option<FileSettings> {
    // On Linux: resolves to /home/<user>/.config
    // On Windows: resolves to C:\Users\<user>\.config
    // On macOS: resolves to /Users/<user>/.config
    let base_dirs = BaseDirs::new().ok()?;

    let mut path = PathBuf::from(base_dirs.config_home());
    path.push("text2bf.toml");

    let content = fs::read_to_string(&path).ok()?;
    log::debug!("loaded settings from {}", path.display());
    Some(parse_settings(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_without_any_source() {
        let settings = resolve(false, false, no_env, &FileSettings::default());
        assert_eq!(settings, Settings { header: false, prompt: true });
    }

    #[test]
    fn parses_output_section() {
        let content = r#"
# text2bf settings
[colors]
header = true

[output]
header = "yes"
prompt = false
"#;
        let file = parse_settings(content);
        assert_eq!(file, FileSettings { header: Some(true), prompt: Some(false) });
    }

    #[test]
    fn ignores_other_sections_and_garbage() {
        let file = parse_settings("[other]\nheader = true\n[output]\nprompt = maybe\n");
        assert_eq!(file, FileSettings::default());
    }

    #[test]
    fn env_overrides_file() {
        let file = FileSettings { header: Some(true), prompt: Some(true) };
        let env = |key: &str| match key {
            "TEXT2BF_HEADER" => Some("0".to_string()),
            "TEXT2BF_PROMPT" => Some("no".to_string()),
            _ => None,
        };
        assert_eq!(resolve(false, false, env, &file), Settings { header: false, prompt: false });
    }

    #[test]
    fn flags_override_everything() {
        let file = FileSettings { header: Some(false), prompt: Some(true) };
        let env = |_: &str| Some("false".to_string());
        let settings = resolve(true, true, env, &file);
        assert_eq!(settings, Settings { header: true, prompt: false });
    }
}
