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
Financing recommendations
=========================

A small ordered list of independent predicate-to-record rules over the
project's average cost, average payback and selected measure categories.
Rules never exclude each other and output keeps rule-declaration order;
there is no ranking by suitability.
*/

use crate::types::{FinancialSummary, LoanRecommendation, Suitability};

/// Measure ids counted as electrification / clean energy for financing rules
pub const ELECTRIFICATION_IDS: [&str; 4] = [
    "heat-pump-space",
    "heat-pump-water",
    "induction-cooking",
    "rooftop-solar",
];

/// Project cost above which assessment-style financing is proposed [$]
const PACE_COST_FLOOR: f32 = 50_000.0;
/// Project cost above which staged construction financing is proposed [$]
const CONSTRUCTION_COST_FLOOR: f32 = 500_000.0;
/// Payback at or under which a green loan is an excellent fit [yr]
const GREEN_LOAN_PAYBACK_CEILING: f32 = 10.0;

/// Propose financing products for the analyzed project.
///
/// Evaluates the five rules in declaration order against the summary's
/// average cost and payback and the selected measure ids; emits zero or more
/// recommendations.
pub fn loan_recommendations(
    summary: &FinancialSummary,
    selected: &[String],
) -> Vec<LoanRecommendation> {
    let mut recommendations = Vec::new();

    let avg_cost = summary.total_retrofit_cost.midpoint();
    let avg_payback = summary.simple_payback.midpoint();
    let has_electrification = selected
        .iter()
        .any(|id| ELECTRIFICATION_IDS.contains(&id.as_str()));
    let has_solar = selected.iter().any(|id| id == "rooftop-solar");

    // C-PACE: property-tax-assessment financing for mid-size and larger projects
    if avg_cost > PACE_COST_FLOOR {
        recommendations.push(LoanRecommendation {
            loan_type: "C-PACE Financing".into(),
            description: "Commercial Property Assessed Clean Energy financing funds energy \
                          improvements through a property tax assessment."
                .into(),
            typical_terms: "15-25 year terms, fixed rates typically 5-8%, transfers with \
                            property sale"
                .into(),
            suitability: if has_electrification {
                Suitability::Excellent
            } else {
                Suitability::Good
            },
            reasons: vec![
                "Long repayment terms match the life of improvements".into(),
                "Payments may be passed through to tenants".into(),
                "No upfront capital required".into(),
                if has_electrification {
                    "Clean energy projects often qualify for favorable rates".into()
                } else {
                    "Energy efficiency projects qualify".into()
                },
            ],
        });
    }

    // General-purpose green loan, always proposed
    recommendations.push(LoanRecommendation {
        loan_type: "Green Building Energy Loan".into(),
        description: "A dedicated financing product for building energy improvements and \
                      LL97 compliance projects."
            .into(),
        typical_terms: "5-15 year terms, competitive fixed rates, flexible payment structures"
            .into(),
        suitability: if avg_payback <= GREEN_LOAN_PAYBACK_CEILING {
            Suitability::Excellent
        } else {
            Suitability::Good
        },
        reasons: vec![
            "Designed specifically for building retrofits".into(),
            "Competitive rates for qualifying projects".into(),
            if avg_payback <= GREEN_LOAN_PAYBACK_CEILING {
                "Strong payback period supports favorable terms".into()
            } else {
                "Project savings support debt service".into()
            },
            "Local lenders with expertise in NYC building regulations".into(),
        ],
    });

    // Solar-specific financing when rooftop solar is selected
    if has_solar {
        recommendations.push(LoanRecommendation {
            loan_type: "Solar Financing / PPA".into(),
            description: "Specialized solar financing including Power Purchase Agreements \
                          (PPA) or solar loans."
                .into(),
            typical_terms: "PPAs: 15-25 years, no upfront cost; Loans: 5-15 years, rates vary"
                .into(),
            suitability: Suitability::Excellent,
            reasons: vec![
                "Solar-specific financing may offer better terms".into(),
                "Federal ITC and state incentives can reduce net cost".into(),
                "PPAs transfer performance risk to the installer".into(),
                "May qualify for additional green building incentives".into(),
            ],
        });
    }

    // State programs, always proposed
    recommendations.push(LoanRecommendation {
        loan_type: "NYSERDA Financing Programs".into(),
        description: "New York State Energy Research and Development Authority offers \
                      various financing and incentive programs."
            .into(),
        typical_terms: "Varies by program; may include low-interest loans, on-bill \
                        financing, or incentives"
            .into(),
        suitability: if has_electrification {
            Suitability::Excellent
        } else {
            Suitability::Good
        },
        reasons: vec![
            "State-backed programs often offer below-market rates".into(),
            "May be combined with other financing".into(),
            if has_electrification {
                "Electrification projects may qualify for additional incentives".into()
            } else {
                "Energy efficiency incentives available".into()
            },
            "Technical assistance often included".into(),
        ],
    });

    // Staged construction financing for comprehensive projects
    if avg_cost > CONSTRUCTION_COST_FLOOR {
        recommendations.push(LoanRecommendation {
            loan_type: "Construction / Renovation Loan".into(),
            description: "For comprehensive retrofit projects, a construction loan provides \
                          staged financing during the improvement phase."
                .into(),
            typical_terms: "12-36 month construction period, then converts to permanent \
                            financing"
                .into(),
            suitability: Suitability::Good,
            reasons: vec![
                "Appropriate for large-scale comprehensive retrofits".into(),
                "Draw schedule matches project milestones".into(),
                "Can refinance into a permanent loan upon completion".into(),
                "May incorporate energy savings into underwriting".into(),
            ],
        });
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PeriodValues, Range};
    use pretty_assertions::assert_eq;

    fn summary(cost: (f32, f32), payback: (f32, f32)) -> FinancialSummary {
        FinancialSummary {
            total_retrofit_cost: cost.into(),
            annual_energy_cost_savings: Range::default(),
            annual_penalty_avoidance: PeriodValues::default(),
            total_annual_savings: Range::default(),
            simple_payback: payback.into(),
            ten_year_net_savings: Range::default(),
            twenty_year_net_savings: Range::default(),
        }
    }

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn small_project_gets_the_two_unconditional_offers() {
        let recs = loan_recommendations(&summary((10_000.0, 20_000.0), (3.0, 5.0)), &ids(&[]));
        let types: Vec<_> = recs.iter().map(|r| r.loan_type.as_str()).collect();
        assert_eq!(
            types,
            vec!["Green Building Energy Loan", "NYSERDA Financing Programs"]
        );
    }

    #[test]
    fn large_project_triggers_pace_and_construction() {
        let recs = loan_recommendations(
            &summary((800_000.0, 1_600_000.0), (8.0, 20.0)),
            &ids(&["hvac-upgrade"]),
        );
        let types: Vec<_> = recs.iter().map(|r| r.loan_type.as_str()).collect();
        assert_eq!(
            types,
            vec![
                "C-PACE Financing",
                "Green Building Energy Loan",
                "NYSERDA Financing Programs",
                "Construction / Renovation Loan"
            ]
        );
        // No electrification in the selection
        assert_eq!(recs[0].suitability, Suitability::Good);
    }

    #[test]
    fn electrification_upgrades_pace_and_nyserda() {
        let recs = loan_recommendations(
            &summary((200_000.0, 400_000.0), (6.0, 9.0)),
            &ids(&["heat-pump-space", "led-retrofit"]),
        );
        let pace = recs.iter().find(|r| r.loan_type == "C-PACE Financing").unwrap();
        assert_eq!(pace.suitability, Suitability::Excellent);
        assert!(pace
            .reasons
            .iter()
            .any(|r| r.contains("Clean energy projects")));
        let nyserda = recs
            .iter()
            .find(|r| r.loan_type == "NYSERDA Financing Programs")
            .unwrap();
        assert_eq!(nyserda.suitability, Suitability::Excellent);
    }

    #[test]
    fn solar_selection_adds_the_solar_offer() {
        let recs = loan_recommendations(
            &summary((200_000.0, 400_000.0), (6.0, 9.0)),
            &ids(&["rooftop-solar"]),
        );
        let solar = recs.iter().find(|r| r.loan_type == "Solar Financing / PPA").unwrap();
        assert_eq!(solar.suitability, Suitability::Excellent);
        // Solar also counts as clean energy for the other rules
        let pace = recs.iter().find(|r| r.loan_type == "C-PACE Financing").unwrap();
        assert_eq!(pace.suitability, Suitability::Excellent);
    }

    #[test]
    fn payback_drives_green_loan_suitability() {
        let fast = loan_recommendations(&summary((10_000.0, 20_000.0), (3.0, 5.0)), &ids(&[]));
        let green = fast
            .iter()
            .find(|r| r.loan_type == "Green Building Energy Loan")
            .unwrap();
        assert_eq!(green.suitability, Suitability::Excellent);

        let slow = loan_recommendations(&summary((10_000.0, 20_000.0), (12.0, 30.0)), &ids(&[]));
        let green = slow
            .iter()
            .find(|r| r.loan_type == "Green Building Energy Loan")
            .unwrap();
        assert_eq!(green.suitability, Suitability::Good);
    }
}
