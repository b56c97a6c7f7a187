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
Analysis orchestration
======================

Sequences the calculation stages into one immutable result record. Data
flows strictly forward; no stage mutates another's output.
*/

use crate::compliance;
use crate::emissions;
use crate::error::Result;
use crate::financial;
use crate::loans;
use crate::retrofits;
use crate::types::{AnalysisResults, BuildingInfo, EnergyUsage};

/// Run the full analysis pipeline over validated inputs.
///
/// The caller guarantees a populated `BuildingInfo` with positive floor
/// area, defaulted-to-zero usage fields, and a de-duplicated selection of
/// catalog ids; the pipeline itself performs no input validation.
///
/// # Errors
///
/// Propagates `UnknownRetrofit` from the per-measure analysis untranslated;
/// no partial results are returned.
pub fn run_full_analysis(
    building: &BuildingInfo,
    usage: &EnergyUsage,
    selected: &[String],
) -> Result<AnalysisResults> {
    let current_emissions = emissions::calculate_emissions(usage);
    let current_energy_cost = emissions::calculate_energy_costs(usage);

    let compliance_status = compliance::compliance_status(building, current_emissions);
    let retrofit_analysis =
        retrofits::analyze_retrofits(building, current_energy_cost, &compliance_status, selected)?;
    let financial_summary = financial::financial_summary(&retrofit_analysis, &compliance_status);
    let loan_recommendations = loans::loan_recommendations(&financial_summary, selected);
    let post_retrofit_compliance =
        compliance::post_retrofit_compliance(building, &compliance_status, &retrofit_analysis);

    Ok(AnalysisResults {
        building_info: building.clone(),
        energy_usage: usage.clone(),
        selected_retrofits: selected.to_vec(),
        compliance_status,
        retrofit_analysis,
        financial_summary,
        loan_recommendations,
        post_retrofit_compliance,
    })
}
