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
Per-measure retrofit analysis
=============================

Projects cost, savings, emissions reduction and payback for each selected
measure from its catalog ratios and the building's current totals.
*/

use crate::compliance::period_penalties;
use crate::error::{Ll97Error, Result};
use crate::ll97::find_retrofit;
use crate::types::{BuildingInfo, ComplianceStatus, RetrofitAnalysis};

/// Analyze each selected measure, preserving selection order.
///
/// Savings percentages map directly onto dollar bounds (low percent, low
/// dollars); only the payback quotient crosses bounds, via
/// `Range::div_conservative`. Penalty avoidance collapses the emissions
/// reduction to its midpoint before the per-period comparison.
///
/// # Errors
///
/// Fails with `UnknownRetrofit` when an id is absent from the catalog. Ids
/// should only ever originate from the catalog, so the failure is fatal for
/// the run and is never translated into a user-facing validation message.
pub fn analyze_retrofits(
    building: &BuildingInfo,
    current_energy_cost: f32,
    current: &ComplianceStatus,
    selected: &[String],
) -> Result<Vec<RetrofitAnalysis>> {
    let allowed = current.thresholds * building.square_footage;

    selected
        .iter()
        .map(|id| {
            let retrofit =
                find_retrofit(id).ok_or_else(|| Ll97Error::UnknownRetrofit(id.clone()))?;

            let estimated_cost = retrofit.cost_per_sqft * building.square_footage;
            let annual_energy_savings =
                retrofit.energy_savings_percent * (current_energy_cost / 100.0);
            let annual_emissions_reduction =
                retrofit.emissions_reduction_percent * (current.current_emissions / 100.0);
            let payback_period = estimated_cost.div_conservative(annual_energy_savings);

            // Point-estimate collapse: one midpoint reduction, then the same
            // per-period penalty logic as the compliance evaluation
            let new_emissions =
                current.current_emissions - annual_emissions_reduction.midpoint();
            let (_, new_penalty) = period_penalties(new_emissions, allowed);
            let penalty_avoidance = current.annual_penalty - new_penalty;

            Ok(RetrofitAnalysis {
                retrofit_id: id.clone(),
                retrofit_name: retrofit.name.to_string(),
                estimated_cost,
                annual_energy_savings,
                annual_emissions_reduction,
                payback_period,
                penalty_avoidance,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::compliance_status;
    use crate::types::BuildingType;
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

    #[test]
    fn projects_catalog_ratios_onto_building_totals() {
        let building = office(100_000.0);
        let current = compliance_status(&building, 553.5);
        let selected = vec!["led-retrofit".to_string()];

        let analyses = analyze_retrofits(&building, 295_000.0, &current, &selected).unwrap();
        assert_eq!(analyses.len(), 1);
        let led = &analyses[0];

        // 1.00-3.00 $/sqft over 100k sqft
        assert_eq!(led.estimated_cost.low, 100_000.0);
        assert_eq!(led.estimated_cost.high, 300_000.0);
        // 8-15% of 295k $/yr
        assert!((led.annual_energy_savings.low - 23_600.0).abs() < 1.0);
        assert!((led.annual_energy_savings.high - 44_250.0).abs() < 1.0);
        // 6-12% of 553.5 tCO2e
        assert!((led.annual_emissions_reduction.low - 33.21).abs() < 0.01);
        assert!((led.annual_emissions_reduction.high - 66.42).abs() < 0.01);
        // cross-bounded payback: cheap/high savings to expensive/low savings
        assert!((led.payback_period.low - 100_000.0 / 44_250.0).abs() < 1e-3);
        assert!((led.payback_period.high - 300_000.0 / 23_600.0).abs() < 1e-3);
        assert!(led.payback_period.low <= led.payback_period.high);
    }

    #[test]
    fn penalty_avoidance_uses_the_midpoint_reduction() {
        let building = office(100_000.0);
        let current = compliance_status(&building, 553.5);
        let selected = vec!["led-retrofit".to_string()];

        let analyses = analyze_retrofits(&building, 295_000.0, &current, &selected).unwrap();
        let led = &analyses[0];

        // Midpoint reduction 49.815 -> new emissions 503.685, still over the
        // 2030 allowance of 453: avoidance = 49.815 * 268
        assert!((led.penalty_avoidance.y2030 - 49.815 * 268.0).abs() < 1.0);
        // Already compliant in 2024, nothing to avoid
        assert_eq!(led.penalty_avoidance.y2024, 0.0);
    }

    #[test]
    fn selection_order_is_preserved() {
        let building = office(50_000.0);
        let current = compliance_status(&building, 400.0);
        let selected = vec![
            "rooftop-solar".to_string(),
            "air-sealing".to_string(),
            "hvac-upgrade".to_string(),
        ];

        let analyses = analyze_retrofits(&building, 150_000.0, &current, &selected).unwrap();
        let ids: Vec<_> = analyses.iter().map(|a| a.retrofit_id.as_str()).collect();
        assert_eq!(ids, vec!["rooftop-solar", "air-sealing", "hvac-upgrade"]);
    }

    #[test]
    fn unknown_id_is_fatal() {
        let building = office(50_000.0);
        let current = compliance_status(&building, 400.0);
        let selected = vec!["led-retrofit".to_string(), "fusion-reactor".to_string()];

        let err = analyze_retrofits(&building, 150_000.0, &current, &selected).unwrap_err();
        match err {
            Ll97Error::UnknownRetrofit(id) => assert_eq!(id, "fusion-reactor"),
            other => panic!("unexpected error: {}", other),
        }
    }
}
