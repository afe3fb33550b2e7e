//! Multi-key instance ordering
//!
//! Sorts instances under a prioritized chain of less-than rules: the first
//! rule that tells a pair apart decides, and when everything up to the last
//! rule ties, the last rule decides outright. There is no fallback to the
//! original order, so ties under the whole chain come out in unspecified
//! order (the sort is unstable).

use crate::instance::{DEFAULT_PLATFORM, Ec2Instance};
use std::cmp::Ordering;

/// A strict less-than rule between two instances
pub type LessFn = Box<dyn Fn(&Ec2Instance, &Ec2Instance) -> bool>;

/// Chain of ordering rules, most significant first
pub struct MultiSorter {
    less: Vec<LessFn>,
}

/// Build a sorter from a rule chain
pub fn order_by(less: Vec<LessFn>) -> MultiSorter {
    MultiSorter { less }
}

impl MultiSorter {
    /// Sort instances in place. With an empty rule chain this is a no-op and
    /// the slice is left untouched.
    pub fn sort(&self, instances: &mut [Ec2Instance]) {
        if self.less.is_empty() {
            return;
        }
        instances.sort_unstable_by(|a, b| self.compare(a, b));
    }

    fn compare(&self, a: &Ec2Instance, b: &Ec2Instance) -> Ordering {
        let (last, rest) = self.less.split_last().expect("rule chain checked non-empty");
        for less in rest {
            if less(a, b) {
                return Ordering::Less;
            }
            if less(b, a) {
                return Ordering::Greater;
            }
            // tie, try the next rule
        }
        // every earlier rule tied, the last one decides
        if last(a, b) {
            Ordering::Less
        } else if last(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Canonical rule chain for the coverage report: state code, then platform
/// (the normalized default sorts first), then instance type, then name.
pub fn display_order() -> MultiSorter {
    order_by(vec![
        Box::new(|a, b| a.state.code() < b.state.code()),
        Box::new(|a, b| platform_key(&a.platform) < platform_key(&b.platform)),
        Box::new(|a, b| a.instance_type < b.instance_type),
        Box::new(|a, b| a.name() < b.name()),
    ])
}

/// Sort key placing the default platform ahead of everything else
fn platform_key(platform: &str) -> (bool, &str) {
    let is_default = platform.is_empty() || platform == DEFAULT_PLATFORM;
    (!is_default, platform)
}
