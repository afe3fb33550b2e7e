//! EC2 instance model
//!
//! Domain view of a running or stopped compute instance, converted from the
//! AWS SDK shape at ingestion time. Platform normalization happens here, once,
//! so the matching engine never sees an empty platform string.

use crate::error::{Result, SimulatorError};
use aws_sdk_ec2::types::{Instance as AwsInstance, InstanceStateName};
use serde::{Deserialize, Serialize};

/// Platform assumed when EC2 reports none (the API leaves the field unset for
/// anything that is not Windows)
pub const DEFAULT_PLATFORM: &str = "Linux/UNIX";

/// Tag key holding the human-readable instance name
const NAME_TAG_KEY: &str = "Name";

/// Instance lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstanceState {
    /// Instance is pending
    Pending,
    /// Instance is running
    Running,
    /// Instance is shutting down
    ShuttingDown,
    /// Instance is terminated
    Terminated,
    /// Instance is stopping
    Stopping,
    /// Instance is stopped
    Stopped,
}

impl InstanceState {
    /// EC2 numeric state code, used for ordering in the report
    pub fn code(&self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Running => 16,
            Self::ShuttingDown => 32,
            Self::Terminated => 48,
            Self::Stopping => 64,
            Self::Stopped => 80,
        }
    }

    /// EC2 state name as the API spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::ShuttingDown => "shutting-down",
            Self::Terminated => "terminated",
            Self::Stopping => "stopping",
            Self::Stopped => "stopped",
        }
    }
}

/// Domain view of an EC2 instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ec2Instance {
    /// Instance ID
    pub id: String,

    /// Instance type (e.g. "t3.medium")
    pub instance_type: String,

    /// Platform classifier, normalized (never empty)
    pub platform: String,

    /// Current lifecycle state
    pub state: InstanceState,

    /// Tags (key unique per instance)
    pub tags: Vec<(String, String)>,
}

impl Ec2Instance {
    /// Create from AWS instance
    pub fn from_aws(instance: &AwsInstance) -> Result<Self> {
        let state_name = instance
            .state
            .as_ref()
            .and_then(|s| s.name.as_ref())
            .ok_or_else(|| SimulatorError::config("Missing instance state"))?;

        let state = match state_name {
            InstanceStateName::Pending => InstanceState::Pending,
            InstanceStateName::Running => InstanceState::Running,
            InstanceStateName::ShuttingDown => InstanceState::ShuttingDown,
            InstanceStateName::Terminated => InstanceState::Terminated,
            InstanceStateName::Stopping => InstanceState::Stopping,
            InstanceStateName::Stopped => InstanceState::Stopped,
            _ => InstanceState::Pending,
        };

        let platform = instance
            .platform
            .as_ref()
            .map(|p| p.as_str().to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_PLATFORM.to_string());

        let tags = instance
            .tags()
            .iter()
            .filter_map(|t| match (t.key(), t.value()) {
                (Some(k), Some(v)) => Some((k.to_string(), v.to_string())),
                _ => None,
            })
            .collect();

        Ok(Self {
            id: instance
                .instance_id
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
            instance_type: instance
                .instance_type
                .as_ref()
                .map(|t| t.as_str().to_string())
                .unwrap_or_else(|| "unknown".to_string()),
            platform,
            state,
            tags,
        })
    }

    /// Value of the "Name" tag, or "" if the instance has none
    pub fn name(&self) -> &str {
        self.tags
            .iter()
            .find(|(k, _)| k == NAME_TAG_KEY)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }
}
