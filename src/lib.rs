//! # RI Coverage Simulator
//!
//! Reconciles an AWS account's EC2 instances against its purchased reserved
//! instance commitments and reports which running instances are covered,
//! which are billed on-demand, and which reservations sit unused.
//!
//! ## Architecture
//!
//! ```text
//! fetch (EC2 API)  →  simulator (greedy first-fit)  →  sort  →  report
//! ```
//!
//! The simulator and the sort are pure, synchronous computations over data
//! the fetch layer already pulled down. One CLI run is one reconciliation;
//! nothing persists between runs.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod fetch;
pub mod instance;
pub mod report;
pub mod reservation;
pub mod simulator;
pub mod sort;

// Error handling
pub use error::{Result, SimulatorError};

// Domain models
pub use instance::{DEFAULT_PLATFORM, Ec2Instance, InstanceState};
pub use reservation::ReservedInstance;

// Coverage engine
pub use simulator::{SimulationResult, Simulator};

// Presentation ordering
pub use sort::{LessFn, MultiSorter, display_order, order_by};

// EC2 collaborator
pub use fetch::{DEFAULT_REGION, create_ec2_client, fetch_instances, fetch_reserved_instances};

// Report rendering
pub use report::render_report;
