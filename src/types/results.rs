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
Analysis result types
=====================

Result records produced by the calculation pipeline. All of them are freshly
constructed by the pipeline, never mutated afterwards, and consumed read-only
by the presentation side (plain report, JSON export).
*/

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::types::building::{BuildingInfo, EnergyUsage};
use crate::types::common::Suitability;
use crate::types::range::Range;

// -------------------- PeriodValues

/// One value per LL97 compliance period (2024-2029, 2030-2034, 2035+).
///
/// Used for emission limits, allowed emissions, penalties and penalty
/// avoidance amounts.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PeriodValues {
    /// Value for the 2024-2029 period
    pub y2024: f32,
    /// Value for the 2030-2034 period
    pub y2030: f32,
    /// Value for the 2035+ period
    pub y2035: f32,
}

impl PeriodValues {
    /// Build a triple from its period values
    pub fn new(y2024: f32, y2030: f32, y2035: f32) -> Self {
        Self {
            y2024,
            y2030,
            y2035,
        }
    }
}

impl fmt::Display for PeriodValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ 2024: {:.2}, 2030: {:.2}, 2035: {:.2} }}",
            self.y2024, self.y2030, self.y2035
        )
    }
}

impl Add for PeriodValues {
    type Output = PeriodValues;

    fn add(self, other: PeriodValues) -> PeriodValues {
        PeriodValues {
            y2024: self.y2024 + other.y2024,
            y2030: self.y2030 + other.y2030,
            y2035: self.y2035 + other.y2035,
        }
    }
}

impl AddAssign for PeriodValues {
    fn add_assign(&mut self, other: PeriodValues) {
        *self = *self + other;
    }
}

impl Sub for PeriodValues {
    type Output = PeriodValues;

    fn sub(self, other: PeriodValues) -> PeriodValues {
        PeriodValues {
            y2024: self.y2024 - other.y2024,
            y2030: self.y2030 - other.y2030,
            y2035: self.y2035 - other.y2035,
        }
    }
}

impl Mul<f32> for PeriodValues {
    type Output = PeriodValues;

    fn mul(self, rhs: f32) -> PeriodValues {
        PeriodValues {
            y2024: self.y2024 * rhs,
            y2030: self.y2030 * rhs,
            y2035: self.y2035 * rhs,
        }
    }
}

// -------------------- ComplianceStatus

/// Per-period compliance flags
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PeriodFlags {
    /// Compliant during 2024-2029
    pub y2024: bool,
    /// Compliant during 2030-2034
    pub y2030: bool,
    /// Compliant during 2035+
    pub y2035: bool,
}

/// Emissions position of a building against the LL97 limits.
///
/// Computed twice per analysis run: once for the current building and once
/// after the combined effect of the selected retrofit measures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceStatus {
    /// Total annual emissions [tCO2e/yr]
    pub current_emissions: f32,
    /// Emissions per floor area [tCO2e/sqft/yr]
    pub emissions_intensity: f32,
    /// Emission intensity limits for the building type [tCO2e/sqft/yr]
    pub thresholds: PeriodValues,
    /// Whether emissions stay within the allowed total, per period
    pub compliant: PeriodFlags,
    /// Annual penalty owed per period [$/yr]
    pub annual_penalty: PeriodValues,
}

// -------------------- RetrofitAnalysis

/// Projected effect of one selected retrofit measure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrofitAnalysis {
    /// Catalog id of the measure
    pub retrofit_id: String,
    /// Catalog display name
    pub retrofit_name: String,
    /// Installed cost [$]
    pub estimated_cost: Range,
    /// Annual energy cost savings [$/yr]
    pub annual_energy_savings: Range,
    /// Annual emissions reduction [tCO2e/yr]
    pub annual_emissions_reduction: Range,
    /// Simple payback [yr], cross-bounded (best plausible to worst plausible)
    pub payback_period: Range,
    /// Penalty avoided per period, from the midpoint emissions reduction [$/yr]
    pub penalty_avoidance: PeriodValues,
}

// -------------------- FinancialSummary

/// Portfolio-level financial picture for the selected measures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Combined installed cost [$]
    pub total_retrofit_cost: Range,
    /// Combined annual energy cost savings, overlap-discounted [$/yr]
    pub annual_energy_cost_savings: Range,
    /// Penalty avoidance per period [$/yr].
    ///
    /// Mirrors the pre-retrofit penalties rather than recomputing from the
    /// combined reduction; see DESIGN.md before changing this.
    pub annual_penalty_avoidance: PeriodValues,
    /// Energy savings plus penalty avoidance [$/yr]
    pub total_annual_savings: Range,
    /// Simple payback [yr], cross-bounded
    pub simple_payback: Range,
    /// Net position after ten years [$]
    pub ten_year_net_savings: Range,
    /// Net position after twenty years [$]
    pub twenty_year_net_savings: Range,
}

// -------------------- LoanRecommendation

/// A financing product proposed for the project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRecommendation {
    /// Product name
    pub loan_type: String,
    /// What the product is
    pub description: String,
    /// Typical terms offered
    pub typical_terms: String,
    /// Fit for this project
    pub suitability: Suitability,
    /// Why it was proposed, in rule order
    pub reasons: Vec<String>,
}

// -------------------- AnalysisResults

/// Terminal result record of a full analysis run.
///
/// Echoes the inputs and carries every derived result. Built once by the
/// orchestrator and handed to presentation read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    /// Building characteristics as analyzed
    pub building_info: BuildingInfo,
    /// Annual energy consumption as analyzed
    pub energy_usage: EnergyUsage,
    /// Selected measure ids, in selection order
    pub selected_retrofits: Vec<String>,
    /// Compliance position before retrofits
    pub compliance_status: ComplianceStatus,
    /// Per-measure projections, in selection order
    pub retrofit_analysis: Vec<RetrofitAnalysis>,
    /// Aggregate financial picture
    pub financial_summary: FinancialSummary,
    /// Financing recommendations, in rule order
    pub loan_recommendations: Vec<LoanRecommendation>,
    /// Compliance position after the combined retrofit effect
    pub post_retrofit_compliance: ComplianceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn period_values_ops() {
        let a = PeriodValues::new(1.0, 2.0, 3.0);
        let b = PeriodValues::new(0.5, 0.5, 0.5);
        assert_eq!(PeriodValues::new(1.5, 2.5, 3.5), a + b);
        assert_eq!(PeriodValues::new(0.5, 1.5, 2.5), a - b);
        assert_eq!(PeriodValues::new(2.0, 4.0, 6.0), a * 2.0);
    }

    #[test]
    fn period_values_display() {
        assert_eq!(
            format!("{}", PeriodValues::new(1.0, 2.0, 3.0)),
            "{ 2024: 1.00, 2030: 2.00, 2035: 3.00 }"
        );
    }
}
