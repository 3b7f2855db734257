use crate::{
    command::RenderCommand,
    foundation::error::FarmResult,
    model::{DependType, LayerData},
    services::ServiceRegistry,
};

/// A scheduler-ready layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub name: String,
    pub command: Vec<String>, // executed verbatim, no further shell interpretation
    pub chunk: u32,
    /// Explicit core reservation; `None` lets the service profile decide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cores: Option<f64>,
    pub range: String,
    pub threadable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub limits: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_mb: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depend: Option<LayerDepend>,
}

/// Dependency edge onto the previously submitted layer.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerDepend {
    pub on_layer: String,
    pub kind: DependKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DependKind {
    /// Every task of the layer waits for every task of `on_layer`.
    All,
    /// Each frame waits for the same frame of `on_layer`.
    FrameByFrame,
}

impl Layer {
    /// Makes every task of this layer wait for all of `other`.
    pub fn depend_all(&mut self, other: &Layer) {
        self.depend = Some(LayerDepend {
            on_layer: other.name.clone(),
            kind: DependKind::All,
        });
    }

    /// Makes each frame of this layer wait for the matching frame of `other`.
    pub fn depend_on(&mut self, other: &Layer) {
        self.depend = Some(LayerDepend {
            on_layer: other.name.clone(),
            kind: DependKind::FrameByFrame,
        });
    }
}

/// Whether a single task of `layer` may use more than one core.
///
/// An explicit core override wins: 2+ cores, or 0/negative ("as many as the host has"), is
/// threadable. Otherwise the first service decides when it is registered. Otherwise not.
pub fn resolve_threadable(layer: &LayerData, registry: &dyn ServiceRegistry) -> bool {
    if layer.override_cores {
        return layer.cores >= 2.0 || layer.cores <= 0.0;
    }

    match layer.services.first() {
        Some(service) if registry.service_names().contains(service) => {
            registry.service_threadable(service).unwrap_or(false)
        }
        _ => false,
    }
}

/// Turns `layer` and its built `command` into a scheduler-ready [`Layer`].
///
/// When the layer asks for a dependency and there is a `previous` layer, the new layer is
/// wired to it. A dependency request on the first layer is ignored.
pub fn build_layer(
    layer: &LayerData,
    command: RenderCommand,
    previous: Option<&Layer>,
    registry: &dyn ServiceRegistry,
) -> FarmResult<Layer> {
    let threadable = resolve_threadable(layer, registry);
    let cores = layer.override_cores.then_some(layer.cores);

    let mut out = Layer {
        name: layer.name.clone(),
        command: command.into_tokens()?,
        chunk: layer.chunk,
        cores,
        range: layer.layer_range.clone(),
        threadable,
        service: layer.services.first().cloned(),
        limits: layer.limits.clone(),
        memory_mb: layer.memory_mb,
        depend: None,
    };

    match (layer.depend_type, previous) {
        (Some(DependType::Layer), Some(prev)) => out.depend_all(prev),
        (Some(DependType::Frame), Some(prev)) => out.depend_on(prev),
        (Some(_), None) => {
            tracing::debug!(layer = %layer.name, "no previous layer to depend on");
        }
        (None, _) => {}
    }

    tracing::debug!(
        layer = %out.name,
        threadable = out.threadable,
        cores = ?out.cores,
        service = ?out.service,
        "assembled layer"
    );
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/layer.rs"]
mod tests;
