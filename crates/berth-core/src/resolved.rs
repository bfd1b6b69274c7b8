use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use berth_model::{EnvKey, ImageRef, SecretRef, Sizing, TaskEnv};

/// Everything the service provisioner needs to define the task's container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTask {
    pub image: ImageRef,
    pub sizing: Sizing,
    #[serde(default, skip_serializing_if = "TaskEnv::is_empty")]
    pub environment: TaskEnv,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub secrets: BTreeMap<EnvKey, SecretRef>,
}

