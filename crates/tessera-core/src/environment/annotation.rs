use serde::{Deserialize, Serialize};

use crate::environment::env_type::EnvType;

/// An environment annotation attached to a class, field or method.
///
/// The repeating container form is not a variant of its own: readers unpack
/// it with [`AnnotationOccurrence::unpack_interfaces`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum AnnotationOccurrence {
    /// The declaration only exists on `env`
    EnvironmentOnly { env: EnvType },
    /// The class implements `interface` only on `env`. Class level only.
    EnvironmentInterface { env: EnvType, interface: String },
}

impl AnnotationOccurrence {
    pub fn environment_only(env: EnvType) -> Self {
        AnnotationOccurrence::EnvironmentOnly { env }
    }

    pub fn environment_interface(env: EnvType, interface: impl Into<String>) -> Self {
        AnnotationOccurrence::EnvironmentInterface { env, interface: interface.into() }
    }

    /// Flattens a container annotation holding several interface declarations
    pub fn unpack_interfaces<I, S>(entries: I) -> Vec<Self>
    where
        I: IntoIterator<Item = (EnvType, S)>,
        S: Into<String>,
    {
        entries
            .into_iter()
            .map(|(env, interface)| Self::environment_interface(env, interface))
            .collect()
    }

    /// Environment token declared by the annotation
    pub fn env(&self) -> EnvType {
        match self {
            AnnotationOccurrence::EnvironmentOnly { env } => *env,
            AnnotationOccurrence::EnvironmentInterface { env, .. } => *env,
        }
    }
}
