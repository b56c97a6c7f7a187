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
Plain-text report
=================

Compact plain rendering of an analysis run for terminal output, plus the
number formatting helpers shared with it. Rounding happens only here.
*/

use itertools::Itertools;

use crate::types::{AnalysisResults, ComplianceStatus, Range};

/// Render a value in a compact plain-text form
pub trait AsPlain {
    /// Get the plain-text form
    fn to_plain(&self) -> String;
}

// ==================== Formatting helpers

/// Group an unsigned integer digit string with thousands separators
fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(bytes.len() + bytes.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

/// Format a number with thousands separators and a fixed decimal count
pub fn format_number(value: f32, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.find('.') {
        Some(pos) => (&formatted[..pos], &formatted[pos..]),
        None => (formatted.as_str(), ""),
    };
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, group_thousands(int_part), frac_part)
}

/// Format a dollar amount rounded to whole dollars
pub fn format_currency(value: f32) -> String {
    if value < 0.0 {
        format!("-${}", format_number(-value, 0))
    } else {
        format!("${}", format_number(value, 0))
    }
}

/// Format a range with a per-bound formatter, as "low - high"
pub fn format_range<F: Fn(f32) -> String>(range: Range, fmt: F) -> String {
    format!("{} - {}", fmt(range.low), fmt(range.high))
}

// ==================== Report rendering

fn compliance_lines(status: &ComplianceStatus) -> String {
    let period = |label: &str, limit: f32, compliant: bool, penalty: f32| {
        format!(
            "{}: limit {:.5} tCO2e/sqft, {}, penalty {}/yr",
            label,
            limit,
            if compliant { "COMPLIANT" } else { "OVER LIMIT" },
            format_currency(penalty)
        )
    };
    [
        format!(
            "Annual emissions [tCO2e/yr]: {}",
            format_number(status.current_emissions, 1)
        ),
        format!(
            "Emissions intensity [tCO2e/sqft/yr]: {:.6}",
            status.emissions_intensity
        ),
        period(
            "2024-2029",
            status.thresholds.y2024,
            status.compliant.y2024,
            status.annual_penalty.y2024,
        ),
        period(
            "2030-2034",
            status.thresholds.y2030,
            status.compliant.y2030,
            status.annual_penalty.y2030,
        ),
        period(
            "2035+    ",
            status.thresholds.y2035,
            status.compliant.y2035,
            status.annual_penalty.y2035,
        ),
    ]
    .iter()
    .join("\n")
}

impl AsPlain for AnalysisResults {
    fn to_plain(&self) -> String {
        let mut out = String::new();

        let b = &self.building_info;
        out.push_str("** Building\n");
        out.push_str(&format!(
            "{}\n{}, {} sqft, built {}\n",
            b.address,
            b.building_type.label(),
            format_number(b.square_footage, 0),
            b.year_built
        ));

        out.push_str("\n** Current LL97 position\n");
        out.push_str(&compliance_lines(&self.compliance_status));
        out.push('\n');

        out.push_str("\n** Selected measures\n");
        if self.retrofit_analysis.is_empty() {
            out.push_str("(no measures selected)\n");
        } else {
            let measures = self
                .retrofit_analysis
                .iter()
                .map(|a| {
                    format!(
                        "{}\n  cost {}, saves {}/yr, payback {} yr",
                        a.retrofit_name,
                        format_range(a.estimated_cost, format_currency),
                        format_range(a.annual_energy_savings, format_currency),
                        format_range(a.payback_period, |v| format_number(v, 1)),
                    )
                })
                .join("\n");
            out.push_str(&measures);
            out.push('\n');

            let f = &self.financial_summary;
            out.push_str("\n** Financial summary\n");
            out.push_str(&format!(
                "Total retrofit cost: {}\n",
                format_range(f.total_retrofit_cost, format_currency)
            ));
            out.push_str(&format!(
                "Annual energy savings: {}/yr\n",
                format_range(f.annual_energy_cost_savings, format_currency)
            ));
            out.push_str(&format!(
                "Penalty avoidance (2024/2030/2035): {} / {} / {} per yr\n",
                format_currency(f.annual_penalty_avoidance.y2024),
                format_currency(f.annual_penalty_avoidance.y2030),
                format_currency(f.annual_penalty_avoidance.y2035)
            ));
            out.push_str(&format!(
                "Total annual savings: {}/yr\n",
                format_range(f.total_annual_savings, format_currency)
            ));
            out.push_str(&format!(
                "Simple payback: {} yr\n",
                format_range(f.simple_payback, |v| format_number(v, 1))
            ));
            out.push_str(&format!(
                "Net savings: 10-year {}, 20-year {}\n",
                format_range(f.ten_year_net_savings, format_currency),
                format_range(f.twenty_year_net_savings, format_currency)
            ));
        }

        out.push_str("\n** Financing options\n");
        let loans = self
            .loan_recommendations
            .iter()
            .map(|l| {
                let reasons = l.reasons.iter().map(|r| format!("  - {}", r)).join("\n");
                format!(
                    "{} ({})\n  {}\n  Terms: {}\n{}",
                    l.loan_type, l.suitability, l.description, l.typical_terms, reasons
                )
            })
            .join("\n");
        out.push_str(&loans);
        out.push('\n');

        out.push_str("\n** Post-retrofit LL97 position\n");
        out.push_str(&compliance_lines(&self.post_retrofit_compliance));
        out.push('\n');

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(950.4), "$950");
        assert_eq!(format_currency(26_934.0), "$26,934");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
        assert_eq!(format_currency(-26_934.0), "-$26,934");
    }

    #[test]
    fn numbers() {
        assert_eq!(format_number(553.5, 1), "553.5");
        assert_eq!(format_number(100_000.0, 0), "100,000");
        assert_eq!(format_number(-1_500.25, 2), "-1,500.25");
    }

    #[test]
    fn ranges() {
        assert_eq!(
            format_range(Range { low: 100_000.0, high: 300_000.0 }, format_currency),
            "$100,000 - $300,000"
        );
    }
}
