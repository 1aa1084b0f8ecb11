use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::component::Component;
use crate::error::{ConfigError, ConfigResult};

/// A parsed graphics config: optional theme-token overrides plus the ordered
/// component list.
///
/// Decoding is where the permissive-by-default policy lives:
/// - entries with an unrecognized `type` are dropped (forward compatibility),
/// - entries of a recognized type whose `content` does not match the schema
///   are rejected with [`ConfigError::InvalidContent`] naming the entry index.
///
/// Past this boundary every component is well-typed and rendering is total.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphicsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Map<String, Value>>,
    pub components: Vec<Component>,
}

impl GraphicsConfig {
    /// Parse a config from JSON text.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Parse a config from an already-decoded JSON value.
    pub fn from_value(root: Value) -> ConfigResult<Self> {
        let mut obj = match root {
            Value::Object(obj) => obj,
            _ => return Err(ConfigError::NotAnObject),
        };

        let theme = match obj.remove("theme") {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => Some(map),
            Some(_) => return Err(ConfigError::ThemeNotAnObject),
        };

        let mut components = Vec::new();
        match obj.remove("components") {
            None | Some(Value::Null) => {}
            Some(Value::Array(entries)) => {
                for (index, entry) in entries.into_iter().enumerate() {
                    if let Some(component) = decode_entry(index, entry)? {
                        components.push(component);
                    }
                }
            }
            Some(_) => return Err(ConfigError::ComponentsNotAnArray),
        }

        Ok(GraphicsConfig { theme, components })
    }
}

impl<'de> Deserialize<'de> for GraphicsConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        GraphicsConfig::from_value(value).map_err(serde::de::Error::custom)
    }
}

/// Decode one `{type, content}` entry. Returns `None` for unrecognized types.
fn decode_entry(index: usize, entry: Value) -> ConfigResult<Option<Component>> {
    let mut obj = match entry {
        Value::Object(obj) => obj,
        _ => return Err(ConfigError::EntryNotAnObject { index }),
    };

    let kind = match obj.remove("type") {
        Some(Value::String(kind)) => kind,
        _ => return Err(ConfigError::MissingType { index }),
    };

    let content = obj
        .remove("content")
        .unwrap_or_else(|| Value::Object(Map::new()));

    match decode_content(&kind, content) {
        Some(Ok(component)) => Ok(Some(component)),
        Some(Err(err)) => Err(ConfigError::InvalidContent {
            index,
            kind,
            reason: err.to_string(),
        }),
        None => {
            log::debug!("skipping unrecognized component type '{kind}' at index {index}");
            Ok(None)
        }
    }
}

fn decode_content(kind: &str, content: Value) -> Option<Result<Component, serde_json::Error>> {
    use serde_json::from_value;

    let component = match kind {
        "badge" => from_value(content).map(Component::Badge),
        "headline" => from_value(content).map(Component::Headline),
        "quote_card" => from_value(content).map(Component::QuoteCard),
        "metric_card" => from_value(content).map(Component::MetricCard),
        "cta_card" => from_value(content).map(Component::CtaCard),
        "infographic_card" => from_value(content).map(Component::InfographicCard),
        "logo_card" => from_value(content).map(Component::LogoCard),
        "event_poster" => from_value(content).map(Component::EventPoster),
        "subtitle" => from_value(content).map(Component::Subtitle),
        "positioned_logo" => from_value(content).map(Component::PositionedLogo),
        "background_svg" => from_value(content).map(Component::BackgroundSvg),
        "process_flow" => from_value(content).map(Component::ProcessFlow),
        "bar_chart" => from_value(content).map(Component::BarChart),
        "timeline" => from_value(content).map(Component::Timeline),
        "comparison" => from_value(content).map(Component::Comparison),
        "feature_grid" => from_value(content).map(Component::FeatureGrid),
        "stats_dashboard" => from_value(content).map(Component::StatsDashboard),
        "progress_bar" => from_value(content).map(Component::ProgressBar),
        _ => return None,
    };
    Some(component)
}
