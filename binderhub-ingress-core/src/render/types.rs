use crate::conf::IngressApiVersion;
use crate::render::{BACKEND_PORT, BACKEND_SERVICE, ROOT_PATH};
use serde::Serialize;
use std::collections::BTreeMap;

pub const INGRESS_KIND: &str = "Ingress";

/// An Ingress manifest, shaped like the cluster API object.
///
/// Optional blocks serialize to nothing at all when absent, rather than to
/// `null` or an empty collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingress {
    pub api_version: IngressApiVersion,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: IngressSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectMeta {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngressSpec {
    pub rules: Vec<IngressRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<Vec<IngressTls>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngressRule {
    pub host: String,
    pub http: HttpIngressRuleValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpIngressRuleValue {
    pub paths: Vec<HttpIngressPath>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpIngressPath {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_type: Option<String>,
    pub backend: IngressBackend,
}

impl HttpIngressPath {
    /// `/` routed to the binder service, in the shape `api_version` expects.
    pub fn root(api_version: IngressApiVersion) -> Self {
        match api_version {
            IngressApiVersion::ExtensionsV1beta1 => Self {
                path: ROOT_PATH.to_owned(),
                path_type: None,
                backend: IngressBackend::Legacy {
                    service_name: BACKEND_SERVICE.to_owned(),
                    service_port: BACKEND_PORT,
                },
            },
            IngressApiVersion::NetworkingV1 => Self {
                path: ROOT_PATH.to_owned(),
                path_type: Some("Prefix".to_owned()),
                backend: IngressBackend::Service {
                    service: IngressServiceBackend {
                        name: BACKEND_SERVICE.to_owned(),
                        port: ServiceBackendPort {
                            number: BACKEND_PORT,
                        },
                    },
                },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum IngressBackend {
    /// `extensions/v1beta1` backend.
    Legacy {
        #[serde(rename = "serviceName")]
        service_name: String,
        #[serde(rename = "servicePort")]
        service_port: u16,
    },
    /// `networking.k8s.io/v1` backend.
    Service { service: IngressServiceBackend },
}

impl IngressBackend {
    pub fn service_name(&self) -> &str {
        match self {
            Self::Legacy { service_name, .. } => service_name,
            Self::Service { service } => &service.name,
        }
    }

    pub fn service_port(&self) -> u16 {
        match self {
            Self::Legacy { service_port, .. } => *service_port,
            Self::Service { service } => service.port.number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngressServiceBackend {
    pub name: String,
    pub port: ServiceBackendPort,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceBackendPort {
    pub number: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngressTls {
    pub secret_name: String,
    pub hosts: Vec<String>,
}
