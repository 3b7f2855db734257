use std::fmt;

use crate::foundation::error::{FarmError, FarmResult};

/// A job as described by the submitter: metadata plus an ordered list of layers.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobData {
    pub name: String,
    pub shot: String,
    pub show: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility: Option<String>,
    /// Job-wide core cap; `None` or `0` leaves the job unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cores: Option<u32>,
    pub layers: Vec<LayerData>, // submission order
}

/// One schedulable unit of work: a render-engine invocation split into chunks by the farm.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerData {
    pub name: String,
    pub cmd: LayerCommand,
    #[serde(default = "default_layer_range")]
    pub layer_range: String, // "N-M" or a single frame/token
    #[serde(default = "default_chunk")]
    pub chunk: u32,
    #[serde(default)]
    pub cores: f64, // only read when override_cores is set
    #[serde(default)]
    pub override_cores: bool,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub limits: Vec<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_depend_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub depend_type: Option<DependType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_mb: Option<u32>,
}

fn default_layer_range() -> String {
    "1".to_string()
}

fn default_chunk() -> u32 {
    1
}

/// Engine-specific command parameters, tagged by layer type.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "layerType")]
pub enum LayerCommand {
    /// Engine described by a config template plus ordered flag/value pairs.
    #[serde(alias = "DYNAMIC")]
    Dynamic(DynamicParams),
    #[serde(alias = "MAYA")]
    Maya(MayaParams),
    #[serde(alias = "NUKE")]
    Nuke(NukeParams),
    #[serde(alias = "BLENDER")]
    Blender(BlenderParams),
    /// A fully user-authored command line.
    #[serde(alias = "SHELL")]
    Shell(ShellParams),
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicParams {
    /// Key into `SubmitConfig::render_cmds`.
    pub engine: String,
    #[serde(default)]
    pub args: Vec<DynamicArg>,
}

/// A `(flag, is_path, is_mandatory) -> value` entry of a config-driven command.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicArg {
    #[serde(default)]
    pub flag: String,
    #[serde(default)]
    pub is_path: bool,
    #[serde(default)]
    pub is_mandatory: bool,
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub value: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MayaParams {
    pub maya_file: Option<String>,
    pub camera: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NukeParams {
    pub nuke_file: Option<String>,
    pub write_nodes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlenderParams {
    pub blender_file: Option<String>,
    pub blender_executable: Option<String>,
    pub output_path: Option<String>,
    pub output_format: Option<String>,
    pub use_compositing: bool,
    pub scene: Option<String>,
}

impl Default for BlenderParams {
    fn default() -> Self {
        Self {
            blender_file: None,
            blender_executable: None,
            output_path: None,
            output_format: None,
            use_compositing: true,
            scene: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShellParams {
    pub command_text_box: Option<String>,
}

/// Discriminant of [`LayerCommand`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerType {
    Dynamic,
    Maya,
    Nuke,
    Blender,
    Shell,
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Dynamic => "Dynamic",
            Self::Maya => "Maya",
            Self::Nuke => "Nuke",
            Self::Blender => "Blender",
            Self::Shell => "Shell",
        };
        f.write_str(s)
    }
}

impl LayerCommand {
    pub fn layer_type(&self) -> LayerType {
        match self {
            Self::Dynamic(_) => LayerType::Dynamic,
            Self::Maya(_) => LayerType::Maya,
            Self::Nuke(_) => LayerType::Nuke,
            Self::Blender(_) => LayerType::Blender,
            Self::Shell(_) => LayerType::Shell,
        }
    }
}

/// How a layer depends on the layer submitted right before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DependType {
    /// Every task waits for every task of the previous layer.
    Layer,
    /// Each frame waits for the matching frame of the previous layer.
    Frame,
}

impl DependType {
    /// `"Layer"` selects a layer dependency, any other non-empty token a frame dependency.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "" => None,
            "Layer" => Some(Self::Layer),
            _ => Some(Self::Frame),
        }
    }
}

fn deserialize_depend_type<'de, D>(de: D) -> Result<Option<DependType>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error as _;

    // Checkbox-style forms send booleans or 0/1; a set box means a frame dependency.
    let v: Option<serde_json::Value> = serde::Deserialize::deserialize(de)?;
    match v {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(token)) => Ok(DependType::from_token(&token)),
        Some(serde_json::Value::Bool(set)) => Ok(set.then_some(DependType::Frame)),
        Some(serde_json::Value::Number(n)) => {
            Ok((n.as_f64() != Some(0.0)).then_some(DependType::Frame))
        }
        Some(other) => Err(D::Error::custom(format!(
            "expected a dependency token, got {other}"
        ))),
    }
}

// Form fields arrive as strings, numbers or booleans; commands only ever need the text.
fn deserialize_scalar<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error as _;

    let v: Option<serde_json::Value> = serde::Deserialize::deserialize(de)?;
    match v {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(serde_json::Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a scalar argument value, got {other}"
        ))),
    }
}

impl LayerData {
    /// A single-frame, single-chunk layer with no services, limits or dependency.
    pub fn new(name: impl Into<String>, cmd: LayerCommand) -> Self {
        Self {
            name: name.into(),
            cmd,
            layer_range: default_layer_range(),
            chunk: default_chunk(),
            cores: 0.0,
            override_cores: false,
            services: vec![],
            limits: vec![],
            depend_type: None,
            memory_mb: None,
        }
    }

    pub fn layer_type(&self) -> LayerType {
        self.cmd.layer_type()
    }

    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.layer_range = range.into();
        self
    }

    pub fn with_chunk(mut self, chunk: u32) -> Self {
        self.chunk = chunk;
        self
    }

    /// Forces an explicit core count instead of letting the service decide.
    pub fn with_cores(mut self, cores: f64) -> Self {
        self.cores = cores;
        self.override_cores = true;
        self
    }

    pub fn with_services<I, S>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.services = services.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_limits<I, S>(mut self, limits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.limits = limits.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_depend(mut self, depend: DependType) -> Self {
        self.depend_type = Some(depend);
        self
    }

    pub fn with_memory_mb(mut self, memory_mb: u32) -> Self {
        self.memory_mb = Some(memory_mb);
        self
    }
}

impl JobData {
    /// Structural checks on the description itself.
    ///
    /// Command inputs (missing scene files and so on) are left to the command builders.
    pub fn validate(&self) -> FarmResult<()> {
        if self.name.trim().is_empty() {
            return Err(FarmError::validation("job name must be non-empty"));
        }
        if self.layers.is_empty() {
            return Err(FarmError::validation(format!(
                "job '{}' has no layers",
                self.name
            )));
        }

        let mut seen = std::collections::BTreeSet::new();
        for layer in &self.layers {
            if layer.name.trim().is_empty() {
                return Err(FarmError::validation(format!(
                    "job '{}' has a layer with an empty name",
                    self.name
                )));
            }
            if !seen.insert(layer.name.as_str()) {
                return Err(FarmError::validation(format!(
                    "layer name '{}' is used more than once",
                    layer.name
                )));
            }
            if layer.chunk == 0 {
                return Err(FarmError::validation(format!(
                    "layer '{}' chunk must be > 0",
                    layer.name
                )));
            }
            if layer.layer_range.trim().is_empty() {
                return Err(FarmError::validation(format!(
                    "layer '{}' has an empty frame range",
                    layer.name
                )));
            }
            if layer.override_cores && !layer.cores.is_finite() {
                return Err(FarmError::validation(format!(
                    "layer '{}' has a non-finite core count",
                    layer.name
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/model.rs"]
mod tests;
