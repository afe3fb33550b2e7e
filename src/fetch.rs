//! EC2 data retrieval
//!
//! Thin collaborator around DescribeInstances / DescribeReservedInstances.
//! Everything here is shape conversion; the matching logic never touches the
//! SDK types.

use crate::error::{Result, SimulatorError};
use crate::instance::Ec2Instance;
use crate::reservation::ReservedInstance;
use aws_config::BehaviorVersion;
use aws_sdk_ec2::{Client, types::Filter};
use aws_types::region::Region;
use tracing::{debug, warn};

/// Default AWS region
pub const DEFAULT_REGION: &str = "us-east-1";

/// Create EC2 client from environment
pub async fn create_ec2_client(region: Option<String>) -> Result<Client> {
    let region_str = region.unwrap_or_else(|| DEFAULT_REGION.to_string());
    debug!("Creating EC2 client for region: {}", region_str);

    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region_str))
        .load()
        .await;

    Ok(Client::new(&config))
}

/// Fetch all instances in the account, any lifecycle state
pub async fn fetch_instances(client: &Client) -> Result<Vec<Ec2Instance>> {
    debug!("Describing instances");

    let response = client
        .describe_instances()
        .send()
        .await
        .map_err(SimulatorError::from_ec2)?;

    let mut instances = Vec::new();
    for reservation in response.reservations() {
        for inst in reservation.instances() {
            match Ec2Instance::from_aws(inst) {
                Ok(instance) => instances.push(instance),
                Err(e) => warn!("Failed to parse instance: {}", e),
            }
        }
    }

    debug!("Fetched {} instances", instances.len());
    Ok(instances)
}

/// Fetch active reserved instances. Expired or retired reservations carry no
/// usable capacity and are filtered out server-side.
pub async fn fetch_reserved_instances(client: &Client) -> Result<Vec<ReservedInstance>> {
    debug!("Describing reserved instances");

    let response = client
        .describe_reserved_instances()
        .filters(Filter::builder().name("state").values("active").build())
        .send()
        .await
        .map_err(SimulatorError::from_ec2)?;

    let reservations: Vec<ReservedInstance> = response
        .reserved_instances()
        .iter()
        .map(ReservedInstance::from_aws)
        .collect();

    debug!("Fetched {} reserved instances", reservations.len());
    Ok(reservations)
}
