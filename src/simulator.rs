//! Reserved instance coverage engine
//!
//! Matches running instances against purchased reservations with a greedy
//! first-fit scan: each instance takes one unit of capacity from the first
//! reservation whose type and product description fit, in reservation input
//! order. The scan is deliberately order-sensitive and makes no attempt to
//! find a globally optimal assignment; an earlier instance may consume a
//! reservation a later instance could also have used.
//!
//! The engine owns a working copy of the reservation counters for the run and
//! hands the post-allocation view back in [`SimulationResult`], so callers
//! always see which capacity was left on the table.

use crate::instance::{Ec2Instance, InstanceState};
use crate::reservation::ReservedInstance;
use tracing::debug;

/// One coverage run over a fetched set of instances and reservations
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    /// Instances to classify, in fetch order
    pub instances: Vec<Ec2Instance>,
    /// Reservations to draw capacity from, in fetch order
    pub reservations: Vec<ReservedInstance>,
}

/// Outcome of a coverage run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationResult {
    /// Instances covered by a reservation
    pub matched: Vec<Ec2Instance>,
    /// Instances billed on-demand
    pub unmatched: Vec<Ec2Instance>,
    /// Reservations with capacity left after allocation, input order,
    /// counts reflecting what this run consumed
    pub unused_reservations: Vec<ReservedInstance>,
}

impl Simulator {
    /// Run the allocation. Consumes the simulator; every input instance ends
    /// up in exactly one of `matched`/`unmatched`.
    pub fn simulate(self) -> SimulationResult {
        let Simulator {
            instances,
            mut reservations,
        } = self;

        let mut matched = Vec::new();
        let mut unmatched = Vec::new();

        for instance in instances {
            if claim_reservation(&instance, &mut reservations) {
                matched.push(instance);
            } else {
                unmatched.push(instance);
            }
        }

        let unused_reservations: Vec<ReservedInstance> = reservations
            .into_iter()
            .filter(|ri| ri.remaining_count != 0)
            .collect();

        debug!(
            matched = matched.len(),
            unmatched = unmatched.len(),
            unused = unused_reservations.len(),
            "simulation complete"
        );

        SimulationResult {
            matched,
            unmatched,
            unused_reservations,
        }
    }
}

/// Take one unit from the first reservation that fits the instance.
///
/// Only running instances are eligible. The product description comparison is
/// case-insensitive; the instance type comparison is exact.
fn claim_reservation(instance: &Ec2Instance, reservations: &mut [ReservedInstance]) -> bool {
    if instance.state != InstanceState::Running {
        return false;
    }
    for ri in reservations.iter_mut() {
        if ri.remaining_count == 0 {
            continue;
        }
        if instance.instance_type == ri.instance_type
            && instance.platform.eq_ignore_ascii_case(&ri.product_description)
        {
            ri.remaining_count -= 1;
            return true;
        }
    }
    false
}
