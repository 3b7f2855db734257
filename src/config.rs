use std::{
    collections::{BTreeMap, BTreeSet},
    fs::File,
    io::BufReader,
    path::Path,
};

use crate::{
    foundation::error::{FarmError, FarmResult},
    services::ServiceRegistry,
};

/// Everything command building and layer resolution read from the environment.
///
/// Passed explicitly to the assemblers; there is no process-wide configuration.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitConfig {
    /// Base command templates for config-driven engines, keyed by engine name.
    pub render_cmds: BTreeMap<String, RenderCmdTemplate>,
    /// Fallback executables for the named engines.
    pub executables: Executables,
    /// Farm service profiles, keyed by service name.
    pub services: BTreeMap<String, ServiceProfile>,
}

/// A base command line for a config-driven engine.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderCmdTemplate {
    pub command: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Executables {
    pub maya: String,
    pub nuke: String,
    pub blender: String,
}

impl Default for Executables {
    fn default() -> Self {
        Self {
            maya: "Render".to_string(),
            nuke: "nuke".to_string(),
            blender: "blender".to_string(),
        }
    }
}

/// Farm-side capability profile a layer can opt into instead of explicit resources.
///
/// Core counts for service-driven layers are left to the farm's own profile.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ServiceProfile {
    pub threadable: bool,
}

impl SubmitConfig {
    pub fn from_json_file(path: &Path) -> FarmResult<Self> {
        use anyhow::Context as _;

        let f = File::open(path)
            .with_context(|| format!("open submit config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            FarmError::config(format!("parse submit config '{}': {e}", path.display()))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> FarmResult<()> {
        for (engine, template) in &self.render_cmds {
            if engine.trim().is_empty() {
                return Err(FarmError::config("render command key must be non-empty"));
            }
            if template.command.trim().is_empty() {
                return Err(FarmError::config(format!(
                    "render command template for '{engine}' is empty"
                )));
            }
        }

        for (name, exe) in [
            ("maya", &self.executables.maya),
            ("nuke", &self.executables.nuke),
            ("blender", &self.executables.blender),
        ] {
            if exe.trim().is_empty() {
                return Err(FarmError::config(format!(
                    "default {name} executable must be non-empty"
                )));
            }
        }

        if let Some(name) = self.services.keys().find(|name| name.trim().is_empty()) {
            return Err(FarmError::config(format!(
                "service name '{name}' must be non-empty"
            )));
        }

        Ok(())
    }

    pub fn with_render_cmd(
        mut self,
        engine: impl Into<String>,
        command: impl Into<String>,
    ) -> Self {
        self.render_cmds.insert(
            engine.into(),
            RenderCmdTemplate {
                command: command.into(),
            },
        );
        self
    }

    pub fn with_service(mut self, name: impl Into<String>, threadable: bool) -> Self {
        self.services.insert(
            name.into(),
            ServiceProfile { threadable },
        );
        self
    }
}

impl ServiceRegistry for SubmitConfig {
    fn service_names(&self) -> BTreeSet<String> {
        self.services.keys().cloned().collect()
    }

    fn service_threadable(&self, name: &str) -> Option<bool> {
        self.services.get(name).map(|p| p.threadable)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
