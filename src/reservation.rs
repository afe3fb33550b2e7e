//! Reserved instance model
//!
//! Domain view of a purchased capacity commitment, converted from the AWS SDK
//! shape. Only type, product description and the remaining count matter to the
//! matching engine; offering type and expiration are carried for the report.

use aws_sdk_ec2::types::ReservedInstances as AwsReservedInstances;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain view of a purchased reserved instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservedInstance {
    /// Instance type the reservation applies to
    pub instance_type: String,

    /// Product description (same domain as the instance platform)
    pub product_description: String,

    /// Units of capacity not yet consumed by a matched instance
    pub remaining_count: i32,

    /// Offering type (e.g. "No Upfront"), display only
    pub offering_type: String,

    /// When the reservation expires, display only
    pub expiration: Option<DateTime<Utc>>,
}

impl ReservedInstance {
    /// Create from AWS reserved instances entry
    pub fn from_aws(ri: &AwsReservedInstances) -> Self {
        let expiration = ri
            .end
            .as_ref()
            .and_then(|dt| DateTime::from_timestamp(dt.secs(), dt.subsec_nanos()));

        Self {
            instance_type: ri
                .instance_type
                .as_ref()
                .map(|t| t.as_str().to_string())
                .unwrap_or_else(|| "unknown".to_string()),
            product_description: ri
                .product_description
                .as_ref()
                .map(|p| p.as_str().to_string())
                .unwrap_or_default(),
            remaining_count: ri.instance_count.unwrap_or(0),
            offering_type: ri
                .offering_type
                .as_ref()
                .map(|o| o.as_str().to_string())
                .unwrap_or_default(),
            expiration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ec2::types::{
        InstanceType, OfferingTypeValues, RiProductDescription,
        ReservedInstances as AwsReservedInstances,
    };

    #[test]
    fn test_from_aws_carries_report_fields() {
        let aws = AwsReservedInstances::builder()
            .instance_type(InstanceType::C5Xlarge)
            .product_description(RiProductDescription::LinuxUnix)
            .instance_count(3)
            .offering_type(OfferingTypeValues::NoUpfront)
            .end(aws_sdk_ec2::primitives::DateTime::from_secs(1_767_225_600))
            .build();

        let ri = ReservedInstance::from_aws(&aws);
        assert_eq!(ri.instance_type, "c5.xlarge");
        assert_eq!(ri.product_description, "Linux/UNIX");
        assert_eq!(ri.remaining_count, 3);
        assert_eq!(ri.offering_type, "No Upfront");
        assert_eq!(
            ri.expiration.unwrap(),
            DateTime::from_timestamp(1_767_225_600, 0).unwrap()
        );
    }

    #[test]
    fn test_missing_count_treated_as_exhausted() {
        let aws = AwsReservedInstances::builder()
            .instance_type(InstanceType::T3Medium)
            .product_description(RiProductDescription::LinuxUnix)
            .build();

        let ri = ReservedInstance::from_aws(&aws);
        assert_eq!(ri.remaining_count, 0);
        assert!(ri.expiration.is_none());
    }
}
