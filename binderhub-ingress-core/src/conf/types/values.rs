use crate::conf::types::{IngressApiVersion, RenderConfig};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// TLS provisioner whose presence turns on the ACME annotation and TLS block.
pub const KUBE_LEGO: &str = "kube-lego";

/// Chart values consumed by the ingress template.
///
/// Field names follow the chart's camelCase convention, so the same values file
/// can be shared with the rest of the deployment pipeline.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartValues {
    pub release_name: Option<String>,
    pub ingress: IngressValues,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IngressValues {
    pub enabled: bool,
    pub host: String,
    #[serde(deserialize_with = "scalar_map")]
    pub annotations: BTreeMap<String, String>,
    pub api_version: IngressApiVersion,
    pub https: HttpsValues,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpsValues {
    pub enabled: bool,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Default for HttpsValues {
    fn default() -> Self {
        Self {
            enabled: false,
            kind: KUBE_LEGO.to_owned(),
        }
    }
}

impl ChartValues {
    /// Flatten the values into the record the renderer consumes.
    ///
    /// A release name passed explicitly wins over `releaseName` in the values.
    pub fn into_render_config(self, release_name: Option<String>) -> RenderConfig {
        let ingress = self.ingress;
        RenderConfig {
            ingress_enabled: ingress.enabled,
            https_enabled: ingress.https.enabled,
            https_type: ingress.https.kind,
            annotations: ingress.annotations,
            host: ingress.host,
            release_name: release_name.or(self.release_name).unwrap_or_default(),
            api_version: ingress.api_version,
        }
    }
}

/// Annotation values are strings on the cluster side, but values files often
/// carry bare `true` or numbers. Accept any scalar and keep its text form.
fn scalar_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, serde_yaml::Value>> = Option::deserialize(deserializer)?;

    raw.unwrap_or_default()
        .into_iter()
        .map(|(key, value)| {
            let text = match value {
                serde_yaml::Value::String(s) => s,
                serde_yaml::Value::Bool(b) => b.to_string(),
                serde_yaml::Value::Number(n) => n.to_string(),
                serde_yaml::Value::Null => String::new(),
                _ => {
                    return Err(<D::Error as de::Error>::custom(format!(
                        "annotation '{key}' must be a scalar value"
                    )));
                }
            };
            Ok((key, text))
        })
        .collect()
}
