//! Internationalization (i18n) support
//!
//! UI strings ship with an embedded English table. Language files in the
//! site's `i18n_dir` (`<lang>.yml` or `<lang>.json`) add languages or
//! override individual keys; lookups fall back to English.

use anyhow::Result;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const EMBEDDED_EN: &str = include_str!("en.yml");

/// Internationalization handler
#[derive(Debug, Clone)]
pub struct I18n {
    /// Current language
    language: String,
    /// Language data: lang -> key -> translation
    translations: HashMap<String, HashMap<String, serde_yaml::Value>>,
}

impl I18n {
    /// Create a handler with the embedded English strings
    pub fn new(language: &str) -> Self {
        let mut translations = HashMap::new();
        match serde_yaml::from_str(EMBEDDED_EN) {
            Ok(en) => {
                translations.insert("en".to_string(), en);
            }
            Err(e) => tracing::error!("Embedded language table is invalid: {}", e),
        }

        Self {
            language: language.to_string(),
            translations,
        }
    }

    /// Load language files from a directory
    pub fn load_languages<P: AsRef<Path>>(&mut self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        if !dir.exists() {
            return Ok(());
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str());
            if !matches!(ext, Some("yml") | Some("yaml") | Some("json")) {
                continue;
            }

            let lang = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("en")
                .to_string();
            let content = fs::read_to_string(&path)?;

            // Skip invalid files
            let data: Option<HashMap<String, serde_yaml::Value>> = if ext == Some("json") {
                match serde_json::from_str::<HashMap<String, serde_json::Value>>(&content) {
                    Ok(json) => Some(
                        json.into_iter()
                            .filter_map(|(k, v)| Some((k, serde_yaml::to_value(v).ok()?)))
                            .collect(),
                    ),
                    Err(e) => {
                        tracing::warn!("Failed to parse language file {:?}: {}", path, e);
                        None
                    }
                }
            } else {
                match serde_yaml::from_str(&content) {
                    Ok(data) => Some(data),
                    Err(e) => {
                        tracing::warn!("Failed to parse language file {:?}: {}", path, e);
                        None
                    }
                }
            };

            if let Some(data) = data {
                let table = self.translations.entry(lang).or_default();
                merge(table, data);
                tracing::debug!("Loaded language file: {:?}", path);
            }
        }

        Ok(())
    }

    /// Get the current language
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Get a translation by key; keys can be nested like "blog.load_error"
    pub fn get(&self, key: &str) -> String {
        self.get_for_lang(&self.language, key)
    }

    /// Get a translation for a specific language
    pub fn get_for_lang(&self, lang: &str, key: &str) -> String {
        if let Some(value) = self
            .translations
            .get(lang)
            .and_then(|data| get_nested_value(data, key))
        {
            return yaml_value_to_string(value);
        }

        // Fallback to English
        if lang != "en" {
            if let Some(value) = self
                .translations
                .get("en")
                .and_then(|data| get_nested_value(data, key))
            {
                return yaml_value_to_string(value);
            }
        }

        // Return key as fallback
        key.to_string()
    }

    /// Get a pluralized translation, replacing `%d` with the count
    pub fn get_plural(&self, key: &str, count: usize) -> String {
        let plural_key = match count {
            0 => format!("{}.zero", key),
            1 => format!("{}.one", key),
            _ => format!("{}.other", key),
        };

        self.get(&plural_key).replace("%d", &count.to_string())
    }

    /// Get a translation with `%d` replaced by a number
    pub fn get_count(&self, key: &str, count: u64) -> String {
        self.get(key).replace("%d", &count.to_string())
    }

    /// All translations for the current language as a flat map with
    /// dot-notation keys, English filling any gaps
    pub fn get_all_translations(&self) -> HashMap<String, String> {
        let mut result = HashMap::new();

        if let Some(lang_data) = self.translations.get(&self.language) {
            flatten_translations(lang_data, "", &mut result);
        }

        if self.language != "en" {
            if let Some(en_data) = self.translations.get("en") {
                let mut en_result = HashMap::new();
                flatten_translations(en_data, "", &mut en_result);
                for (k, v) in en_result {
                    result.entry(k).or_insert(v);
                }
            }
        }

        result
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new("en")
    }
}

/// Merge `data` into `table`, descending into nested mappings
fn merge(
    table: &mut HashMap<String, serde_yaml::Value>,
    data: HashMap<String, serde_yaml::Value>,
) {
    for (key, value) in data {
        match value {
            serde_yaml::Value::Mapping(incoming) => match table.get_mut(&key) {
                Some(serde_yaml::Value::Mapping(existing)) => merge_mapping(existing, incoming),
                _ => {
                    table.insert(key, serde_yaml::Value::Mapping(incoming));
                }
            },
            value => {
                table.insert(key, value);
            }
        }
    }
}

fn merge_mapping(existing: &mut serde_yaml::Mapping, incoming: serde_yaml::Mapping) {
    for (key, value) in incoming {
        match value {
            serde_yaml::Value::Mapping(nested) => match existing.get_mut(&key) {
                Some(serde_yaml::Value::Mapping(inner)) => merge_mapping(inner, nested),
                _ => {
                    existing.insert(key, serde_yaml::Value::Mapping(nested));
                }
            },
            value => {
                existing.insert(key, value);
            }
        }
    }
}

/// Get a nested value from a YAML map using dot notation
fn get_nested_value<'a>(
    data: &'a HashMap<String, serde_yaml::Value>,
    key: &str,
) -> Option<&'a serde_yaml::Value> {
    let mut parts = key.split('.');
    let mut current = data.get(parts.next()?);

    for part in parts {
        match current {
            Some(serde_yaml::Value::Mapping(map)) => {
                current = map.get(serde_yaml::Value::String(part.to_string()));
            }
            _ => return None,
        }
    }

    current
}

/// Convert a YAML value to a string
fn yaml_value_to_string(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Null => String::new(),
        _ => format!("{:?}", value),
    }
}

/// Flatten translations into a HashMap with dot-notation keys
fn flatten_translations(
    data: &HashMap<String, serde_yaml::Value>,
    prefix: &str,
    result: &mut HashMap<String, String>,
) {
    for (key, value) in data {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            serde_yaml::Value::String(s) => {
                result.insert(full_key, s.clone());
            }
            serde_yaml::Value::Number(n) => {
                result.insert(full_key, n.to_string());
            }
            serde_yaml::Value::Bool(b) => {
                result.insert(full_key, b.to_string());
            }
            serde_yaml::Value::Mapping(map) => {
                let nested: HashMap<String, serde_yaml::Value> = map
                    .iter()
                    .filter_map(|(k, v)| Some((k.as_str()?.to_string(), v.clone())))
                    .collect();
                flatten_translations(&nested, &full_key, result);
            }
            _ => {}
        }
    }
}
