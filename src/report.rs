//! Coverage report rendering
//!
//! Fixed-width columnar output over three sections. The caller is expected to
//! have sorted the instance lists already (see [`crate::sort::display_order`]);
//! unused reservations stay in fetch order.

use crate::error::Result;
use crate::instance::Ec2Instance;
use crate::reservation::ReservedInstance;
use crate::simulator::SimulationResult;
use std::io::Write;

/// Write the three report sections to `out`
pub fn render_report(out: &mut impl Write, result: &SimulationResult) -> Result<()> {
    writeln!(out, "=== RI covered instances ===")?;
    for instance in &result.matched {
        write_instance_row(out, instance)?;
    }
    writeln!(out)?;

    writeln!(out, "=== RI *NOT* covered instances ===")?;
    for instance in &result.unmatched {
        write_instance_row(out, instance)?;
    }
    writeln!(out)?;

    writeln!(out, "=== Purchased but not applied RI ===")?;
    for ri in &result.unused_reservations {
        write_reservation_row(out, ri)?;
    }

    Ok(())
}

fn write_instance_row(out: &mut impl Write, instance: &Ec2Instance) -> Result<()> {
    writeln!(
        out,
        "{:<20} {:<12} {:<10} {:<20} {}",
        instance.id,
        instance.instance_type,
        instance.platform,
        instance.name(),
        instance.state.as_str()
    )?;
    Ok(())
}

fn write_reservation_row(out: &mut impl Write, ri: &ReservedInstance) -> Result<()> {
    let expiration = ri
        .expiration
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default();

    writeln!(
        out,
        "{:>20} {:<12} {:<10} {:<12} {:>3} {}",
        "", ri.instance_type, ri.product_description, ri.offering_type, ri.remaining_count,
        expiration
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::{DEFAULT_PLATFORM, InstanceState};
    use chrono::DateTime;

    fn render(result: &SimulationResult) -> String {
        let mut out = Vec::new();
        render_report(&mut out, result).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_result_still_prints_all_sections() {
        let text = render(&SimulationResult::default());
        assert!(text.contains("=== RI covered instances ==="));
        assert!(text.contains("=== RI *NOT* covered instances ==="));
        assert!(text.contains("=== Purchased but not applied RI ==="));
    }

    #[test]
    fn test_instance_row_columns() {
        let result = SimulationResult {
            matched: vec![Ec2Instance {
                id: "i-0abc".to_string(),
                instance_type: "t3.medium".to_string(),
                platform: DEFAULT_PLATFORM.to_string(),
                state: InstanceState::Running,
                tags: vec![("Name".to_string(), "web-01".to_string())],
            }],
            ..Default::default()
        };

        let text = render(&result);
        let row = text
            .lines()
            .nth(1)
            .expect("row under the covered section header");
        assert!(row.starts_with("i-0abc"));
        assert!(row.contains("t3.medium"));
        assert!(row.contains("Linux/UNIX"));
        assert!(row.contains("web-01"));
        assert!(row.trim_end().ends_with("running"));
        // id column is padded to 20
        assert_eq!(&row[20..21], " ");
    }

    #[test]
    fn test_reservation_row_shows_count_and_expiration() {
        let result = SimulationResult {
            unused_reservations: vec![ReservedInstance {
                instance_type: "c5.xlarge".to_string(),
                product_description: DEFAULT_PLATFORM.to_string(),
                remaining_count: 2,
                offering_type: "No Upfront".to_string(),
                expiration: DateTime::from_timestamp(1_767_225_600, 0),
            }],
            ..Default::default()
        };

        let text = render(&result);
        let row = text
            .lines()
            .last()
            .expect("row under the unused section header");
        assert!(row.contains("c5.xlarge"));
        assert!(row.contains("No Upfront"));
        assert!(row.contains("  2 "));
        assert!(row.contains("2026-01-01T00:00:00+00:00"));
    }
}
