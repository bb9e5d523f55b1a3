use serde::{Deserialize, Serialize};

use crate::core::{DefinitionCatalog, attendance_dashboard_catalog};
use crate::error::{ChartError, ChartResult};

use super::BuilderPolicies;

pub const DASHBOARD_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Serializable dashboard setup: the chart catalog plus builder styling.
///
/// Hosts can persist and load dashboards in this format instead of inventing
/// their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub catalog: DefinitionCatalog,
    #[serde(default)]
    pub policies: BuilderPolicies,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: DashboardConfig,
}

impl DashboardConfig {
    #[must_use]
    pub fn new(catalog: DefinitionCatalog) -> Self {
        Self {
            catalog,
            policies: BuilderPolicies::default(),
        }
    }

    #[must_use]
    pub fn with_policies(mut self, policies: BuilderPolicies) -> Self {
        self.policies = policies;
        self
    }

    /// Built-in attendance dashboard with default styling.
    pub fn attendance() -> ChartResult<Self> {
        Ok(Self::new(attendance_dashboard_catalog()?))
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.policies.validate()
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = DashboardConfigJsonContractV1 {
            schema_version: DASHBOARD_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize dashboard config v1: {e}"))
        })
    }

    /// Accepts either a bare config or the versioned v1 envelope.
    ///
    /// Input is treated as an envelope only when it carries a top-level
    /// `schema_version` key; otherwise bare-config errors are reported as is.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse dashboard config json: {e}"))
        })?;

        let config = if value.get("schema_version").is_some() {
            let payload: DashboardConfigJsonContractV1 =
                serde_json::from_value(value).map_err(|e| {
                    ChartError::InvalidConfig(format!(
                        "failed to parse dashboard config envelope: {e}"
                    ))
                })?;
            if payload.schema_version != DASHBOARD_CONFIG_JSON_SCHEMA_V1 {
                return Err(ChartError::InvalidConfig(format!(
                    "unsupported dashboard config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_value::<DashboardConfig>(value).map_err(|e| {
                ChartError::InvalidConfig(format!("failed to parse dashboard config: {e}"))
            })?
        };

        config.validate()?;
        Ok(config)
    }
}
