//! Core record, line-ending and outcome types.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

use crate::settings::OpenPositionSettings;

// ── Log Record ────────────────────────────────────────────────

/// Accepted spellings per field, first match wins.
const REQUEST_ID_KEYS: &[&str] = &["RequestId", "RequestGuId", "requestId", "requestGuId"];
const USER_DATA_KEYS: &[&str] = &["UserData", "userData"];
const LOGIC_LOG_KEYS: &[&str] = &["LogicLog", "logicLog"];
const LATENCY_TICKS_KEYS: &[&str] = &["LatencyTicks", "latencyTicks"];
const SETTINGS_KEYS: &[&str] = &[
    "Settings",
    "OpenPositionSettings",
    "settings",
    "openPositionSettings",
];

/// One settings-resolution log document.
///
/// Only `logic_log` is rendered. The other fields are carried through so
/// realistic files parse: scalars of any type become strings, and
/// `settings` stays an opaque JSON value so any nesting the upstream
/// service adds is accepted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LogRecord {
    #[serde(rename = "RequestId")]
    pub request_id: Option<String>,

    #[serde(rename = "UserData")]
    pub user_data: Option<String>,

    /// Human-readable trace lines, in emission order. `null` entries are
    /// kept as empty lines.
    #[serde(rename = "LogicLog")]
    pub logic_log: Vec<String>,

    #[serde(rename = "LatencyTicks")]
    pub latency_ticks: Vec<String>,

    #[serde(rename = "Settings", skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
}

impl LogRecord {
    /// Best-effort typed view of `settings`.
    ///
    /// Returns `None` when there are no settings or when their shape does not
    /// match the typed model. The raw value is left untouched either way.
    pub fn open_position_settings(&self) -> Option<OpenPositionSettings> {
        let value = self.settings.as_ref()?;
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }
}

impl<'de> Deserialize<'de> for LogRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields: Map<String, Value> = Map::deserialize(deserializer)?;

        let logic_log: Vec<String> = match take_first(&mut fields, LOGIC_LOG_KEYS) {
            None => Vec::new(),
            Some(Value::Array(items)) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| match item {
                    Value::Array(_) | Value::Object(_) => Err(D::Error::custom(format!(
                        "LogicLog[{i}]: expected a string, found {}",
                        kind(&item)
                    ))),
                    other => Ok(scalar_text(other).unwrap_or_default()),
                })
                .collect::<Result<_, _>>()?,
            Some(other) => {
                return Err(D::Error::custom(format!(
                    "LogicLog: expected an array of strings, found {}",
                    kind(&other)
                )));
            }
        };

        // Not rendered: anything that is not a list counts as no ticks.
        let latency_ticks = match take_first(&mut fields, LATENCY_TICKS_KEYS) {
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| scalar_text(item).unwrap_or_default())
                .collect(),
            _ => Vec::new(),
        };

        Ok(Self {
            request_id: take_first(&mut fields, REQUEST_ID_KEYS).and_then(scalar_text),
            user_data: take_first(&mut fields, USER_DATA_KEYS).and_then(scalar_text),
            logic_log,
            latency_ticks,
            settings: take_first(&mut fields, SETTINGS_KEYS),
        })
    }
}

/// Remove the first non-null value among `keys`. Other spellings are left
/// in the map and ignored.
fn take_first(fields: &mut Map<String, Value>, keys: &[&str]) -> Option<Value> {
    keys.iter()
        .find(|key| fields.get(**key).is_some_and(|v| !v.is_null()))
        .and_then(|key| fields.remove(*key))
}

/// Text form of a passthrough value: strings as-is, anything else as JSON.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ── Line Ending ───────────────────────────────────────────────

/// Line-ending convention used for the blank-line separator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\r\n` on Windows, `\n` elsewhere.
    #[default]
    Native,
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Native if cfg!(windows) => "\r\n",
            Self::Native | Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }

    /// Separator placed between two log entries: one blank line.
    pub fn separator(&self) -> String {
        self.as_str().repeat(2)
    }
}

impl std::str::FromStr for LineEnding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "native" => Ok(Self::Native),
            "lf" => Ok(Self::Lf),
            "crlf" => Ok(Self::CrLf),
            other => Err(format!(
                "unknown line ending: {other} (expected native, lf or crlf)"
            )),
        }
    }
}

// ── Report Outcome ────────────────────────────────────────────

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Number of `LogicLog` entries written.
    pub entries: usize,
    /// Size of the written report in bytes.
    pub bytes: usize,
}
