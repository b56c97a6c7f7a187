// Copyright (c) 2024-2025  ll97calc developers

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

/*!
Compliance evaluation
=====================

Compares a building's annual emissions against its type's per-period
emission intensity limits and derives penalties.

A building type missing from the limits table gets all-zero limits: only a
zero-emissions building passes. That fallback is deliberate, not a defect.
*/

use crate::financial::OVERLAP_FACTOR;
use crate::ll97::{limits_for, PENALTY_RATE};
use crate::types::{
    BuildingInfo, ComplianceStatus, PeriodFlags, PeriodValues, RetrofitAnalysis,
};

/// Excess-based flags and penalties for an emissions total against allowed
/// per-period emissions. Penalty and flag always agree: penalty is zero
/// exactly when compliant.
pub(crate) fn period_penalties(emissions: f32, allowed: PeriodValues) -> (PeriodFlags, PeriodValues) {
    let excess = PeriodValues {
        y2024: (emissions - allowed.y2024).max(0.0),
        y2030: (emissions - allowed.y2030).max(0.0),
        y2035: (emissions - allowed.y2035).max(0.0),
    };
    let flags = PeriodFlags {
        y2024: excess.y2024 == 0.0,
        y2030: excess.y2030 == 0.0,
        y2035: excess.y2035 == 0.0,
    };
    (flags, excess * PENALTY_RATE)
}

/// Evaluate the building's compliance position for its current emissions.
///
/// Total function: a building type without tabulated limits is evaluated
/// against zero thresholds.
pub fn compliance_status(building: &BuildingInfo, current_emissions: f32) -> ComplianceStatus {
    let thresholds = limits_for(building.building_type).unwrap_or_default();
    let allowed = thresholds * building.square_footage;
    let (compliant, annual_penalty) = period_penalties(current_emissions, allowed);

    ComplianceStatus {
        current_emissions,
        emissions_intensity: current_emissions / building.square_footage,
        thresholds,
        compliant,
        annual_penalty,
    }
}

/// Re-evaluate compliance after the combined effect of the selected measures.
///
/// The combined reduction collapses each measure's range to its midpoint,
/// sums them and applies the multi-measure overlap discount; the new
/// emissions total is floored at zero. Thresholds are copied unchanged from
/// the pre-retrofit status.
pub fn post_retrofit_compliance(
    building: &BuildingInfo,
    current: &ComplianceStatus,
    analyses: &[RetrofitAnalysis],
) -> ComplianceStatus {
    let overlap = if analyses.len() > 1 { OVERLAP_FACTOR } else { 1.0 };
    let total_reduction: f32 = analyses
        .iter()
        .map(|a| a.annual_emissions_reduction.midpoint())
        .sum::<f32>()
        * overlap;

    let new_emissions = (current.current_emissions - total_reduction).max(0.0);
    let allowed = current.thresholds * building.square_footage;
    let (compliant, annual_penalty) = period_penalties(new_emissions, allowed);

    ComplianceStatus {
        current_emissions: new_emissions,
        emissions_intensity: new_emissions / building.square_footage,
        thresholds: current.thresholds,
        compliant,
        annual_penalty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BuildingType, Range};
    use pretty_assertions::assert_eq;

    fn office(square_footage: f32) -> BuildingInfo {
        BuildingInfo {
            address: "1 Main St, New York, NY".into(),
            square_footage,
            building_type: BuildingType::Office,
            year_built: 1985,
            number_of_units: None,
            number_of_floors: None,
        }
    }

    fn analysis_with_reduction(low: f32, high: f32) -> RetrofitAnalysis {
        RetrofitAnalysis {
            retrofit_id: "led-retrofit".into(),
            retrofit_name: "LED Lighting Retrofit".into(),
            estimated_cost: Range::default(),
            annual_energy_savings: Range::default(),
            annual_emissions_reduction: Range { low, high },
            payback_period: Range::default(),
            penalty_avoidance: PeriodValues::default(),
        }
    }

    #[test]
    fn intensity_is_the_exact_quotient() {
        let status = compliance_status(&office(100_000.0), 553.5);
        assert!((status.emissions_intensity - 0.005_535).abs() < 1e-7);
    }

    #[test]
    fn office_compliant_2024_but_not_2030() {
        let status = compliance_status(&office(100_000.0), 553.5);
        assert!(status.compliant.y2024);
        assert_eq!(status.annual_penalty.y2024, 0.0);
        assert!(!status.compliant.y2030);
        // excess 100.5 tCO2e at 268 $/t
        assert!((status.annual_penalty.y2030 - 26_934.0).abs() < 1.0);
        assert!(!status.compliant.y2035);
        assert!((status.annual_penalty.y2035 - 68_474.0).abs() < 1.0);
    }

    #[test]
    fn penalty_and_flag_never_disagree() {
        for &emissions in &[0.0, 100.0, 553.5, 5000.0] {
            let status = compliance_status(&office(100_000.0), emissions);
            assert_eq!(status.compliant.y2024, status.annual_penalty.y2024 == 0.0);
            assert_eq!(status.compliant.y2030, status.annual_penalty.y2030 == 0.0);
            assert_eq!(status.compliant.y2035, status.annual_penalty.y2035 == 0.0);
        }
    }

    #[test]
    fn zero_thresholds_fail_any_positive_emissions() {
        // The degenerate path for a building type absent from the limits table
        let (flags, penalties) = period_penalties(100.0, PeriodValues::default());
        assert!(!flags.y2024 && !flags.y2030 && !flags.y2035);
        assert_eq!(penalties.y2024, 100.0 * PENALTY_RATE);

        let (flags, penalties) = period_penalties(0.0, PeriodValues::default());
        assert!(flags.y2024 && flags.y2030 && flags.y2035);
        assert_eq!(penalties, PeriodValues::default());
    }

    #[test]
    fn post_retrofit_applies_midpoints_and_overlap() {
        let building = office(100_000.0);
        let current = compliance_status(&building, 553.5);

        // Single measure: no overlap discount, midpoint 50
        let one = [analysis_with_reduction(40.0, 60.0)];
        let post = post_retrofit_compliance(&building, &current, &one);
        assert!((post.current_emissions - 503.5).abs() < 1e-2);
        assert_eq!(post.thresholds, current.thresholds);

        // Two measures: midpoints 50 + 100, discounted by 0.85
        let two = [
            analysis_with_reduction(40.0, 60.0),
            analysis_with_reduction(80.0, 120.0),
        ];
        let post = post_retrofit_compliance(&building, &current, &two);
        assert!((post.current_emissions - (553.5 - 150.0 * 0.85)).abs() < 1e-2);
    }

    #[test]
    fn post_retrofit_emissions_floor_at_zero() {
        let building = office(100_000.0);
        let current = compliance_status(&building, 100.0);
        let huge = [analysis_with_reduction(500.0, 700.0)];
        let post = post_retrofit_compliance(&building, &current, &huge);
        assert_eq!(post.current_emissions, 0.0);
        assert!(post.compliant.y2035);
    }
}
