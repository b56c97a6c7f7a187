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
Portfolio financial aggregation
===============================

Combines per-measure projections into portfolio totals.

Two modeling choices here must stay as they are unless the financial model
is redesigned end to end (see DESIGN.md):

- the summary's penalty avoidance mirrors the pre-retrofit penalties rather
  than being recomputed from the combined reduction;
- total annual savings blend periods asymmetrically: 2024 penalty avoidance
  into the low bound, 2030 into the high bound.
*/

use crate::types::{ComplianceStatus, FinancialSummary, PeriodValues, Range, RetrofitAnalysis};

/// Discount applied to summed savings when combining more than one measure.
///
/// Savings from simultaneous measures do not simply add; this models the
/// diminishing marginal returns of the combination.
pub const OVERLAP_FACTOR: f32 = 0.85;

/// Net position over a horizon, pairing low savings with high cost and high
/// savings with low cost
fn horizon_net(savings: Range, cost: Range, years: f32) -> Range {
    Range {
        low: savings.low * years - cost.high,
        high: savings.high * years - cost.low,
    }
}

/// Aggregate the selected measures into one financial summary.
///
/// Costs sum elementwise; energy savings sum first and are overlap-discounted
/// second. Simple payback uses the conservative cross-bounded division.
pub fn financial_summary(
    analyses: &[RetrofitAnalysis],
    current: &ComplianceStatus,
) -> FinancialSummary {
    let total_retrofit_cost = analyses
        .iter()
        .fold(Range::default(), |acc, a| acc + a.estimated_cost);

    let overlap = if analyses.len() > 1 { OVERLAP_FACTOR } else { 1.0 };
    let annual_energy_cost_savings = analyses
        .iter()
        .fold(Range::default(), |acc, a| acc + a.annual_energy_savings)
        * overlap;

    // Mirrors the pre-retrofit penalties (clamped at zero), not the combined
    // post-retrofit position
    let annual_penalty_avoidance = PeriodValues {
        y2024: current.annual_penalty.y2024.max(0.0),
        y2030: current.annual_penalty.y2030.max(0.0),
        y2035: current.annual_penalty.y2035.max(0.0),
    };

    let total_annual_savings = Range {
        low: annual_energy_cost_savings.low + annual_penalty_avoidance.y2024,
        high: annual_energy_cost_savings.high + annual_penalty_avoidance.y2030,
    };

    let simple_payback = total_retrofit_cost.div_conservative(total_annual_savings);

    FinancialSummary {
        total_retrofit_cost,
        annual_energy_cost_savings,
        annual_penalty_avoidance,
        total_annual_savings,
        simple_payback,
        ten_year_net_savings: horizon_net(total_annual_savings, total_retrofit_cost, 10.0),
        twenty_year_net_savings: horizon_net(total_annual_savings, total_retrofit_cost, 20.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn status_with_penalties(y2024: f32, y2030: f32, y2035: f32) -> ComplianceStatus {
        ComplianceStatus {
            current_emissions: 553.5,
            emissions_intensity: 0.005_535,
            thresholds: PeriodValues::new(0.008_46, 0.004_53, 0.002_98),
            compliant: Default::default(),
            annual_penalty: PeriodValues::new(y2024, y2030, y2035),
        }
    }

    fn analysis(cost: (f32, f32), savings: (f32, f32)) -> RetrofitAnalysis {
        RetrofitAnalysis {
            retrofit_id: "led-retrofit".into(),
            retrofit_name: "LED Lighting Retrofit".into(),
            estimated_cost: cost.into(),
            annual_energy_savings: savings.into(),
            annual_emissions_reduction: Range::default(),
            payback_period: Range::default(),
            penalty_avoidance: PeriodValues::default(),
        }
    }

    #[test]
    fn empty_selection_yields_zero_ranges() {
        let summary = financial_summary(&[], &status_with_penalties(0.0, 26_934.0, 68_474.0));
        assert_eq!(summary.total_retrofit_cost, Range::default());
        assert_eq!(summary.annual_energy_cost_savings, Range::default());
        // Penalty avoidance still mirrors the current penalties
        assert_eq!(summary.annual_penalty_avoidance.y2030, 26_934.0);
        assert_eq!(summary.total_annual_savings.low, 0.0);
        assert_eq!(summary.total_annual_savings.high, 26_934.0);
    }

    #[test]
    fn single_measure_gets_no_overlap_discount() {
        let analyses = [analysis((100_000.0, 300_000.0), (20_000.0, 40_000.0))];
        let summary = financial_summary(&analyses, &status_with_penalties(0.0, 0.0, 0.0));
        assert_eq!(
            summary.annual_energy_cost_savings,
            Range {
                low: 20_000.0,
                high: 40_000.0
            }
        );
    }

    #[test]
    fn multiple_measures_are_overlap_discounted_after_summation() {
        let analyses = [
            analysis((100_000.0, 300_000.0), (20_000.0, 40_000.0)),
            analysis((50_000.0, 100_000.0), (10_000.0, 20_000.0)),
        ];
        let summary = financial_summary(&analyses, &status_with_penalties(0.0, 0.0, 0.0));
        assert_eq!(
            summary.total_retrofit_cost,
            Range {
                low: 150_000.0,
                high: 400_000.0
            }
        );
        assert!((summary.annual_energy_cost_savings.low - 30_000.0 * 0.85).abs() < 1e-2);
        assert!((summary.annual_energy_cost_savings.high - 60_000.0 * 0.85).abs() < 1e-2);
    }

    #[test]
    fn savings_blend_periods_asymmetrically() {
        let analyses = [analysis((100_000.0, 300_000.0), (20_000.0, 40_000.0))];
        let summary = financial_summary(&analyses, &status_with_penalties(1_000.0, 5_000.0, 9_000.0));
        assert_eq!(summary.total_annual_savings.low, 21_000.0);
        assert_eq!(summary.total_annual_savings.high, 45_000.0);
    }

    #[test]
    fn payback_and_horizons_are_conservatively_paired() {
        let analyses = [analysis((100_000.0, 300_000.0), (20_000.0, 40_000.0))];
        let summary = financial_summary(&analyses, &status_with_penalties(0.0, 0.0, 0.0));

        assert!((summary.simple_payback.low - 100_000.0 / 40_000.0).abs() < 1e-3);
        assert!((summary.simple_payback.high - 300_000.0 / 20_000.0).abs() < 1e-3);

        assert_eq!(
            summary.ten_year_net_savings,
            Range {
                low: 20_000.0 * 10.0 - 300_000.0,
                high: 40_000.0 * 10.0 - 100_000.0
            }
        );
        assert_eq!(
            summary.twenty_year_net_savings,
            Range {
                low: 20_000.0 * 20.0 - 300_000.0,
                high: 40_000.0 * 20.0 - 100_000.0
            }
        );
    }
}
