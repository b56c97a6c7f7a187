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
ll97calc
========

This crate provides a library and binary that estimate a building's
compliance position under **NYC Local Law 97** carbon emission limits,
project the effect of selected retrofit measures, and derive a financial and
financing picture for the retrofit project.

The analysis is a single-shot, synchronous, side-effect-free transformation:
(building characteristics, annual energy consumption, selected measures) in,
one immutable [`AnalysisResults`](types::AnalysisResults) record out.
Regulatory limits, emission factors, cost rates and the measure catalog are
static reference data under [`ll97`].

Derived monetary and physical quantities are carried as
[`Range`](types::Range) intervals rather than point estimates; quotients of
ranges use a conservative cross-bounded division so intervals keep reading
best plausible to worst plausible.

# Example

```rust
use ll97calc::run_full_analysis;
use ll97calc::types::{BuildingInfo, BuildingType, EnergyUsage};

let building = BuildingInfo {
    address: "1 Main St, New York, NY".into(),
    square_footage: 100_000.0,
    building_type: BuildingType::Office,
    year_built: 1985,
    number_of_units: None,
    number_of_floors: Some(12),
};
let usage = EnergyUsage {
    electricity_kwh: 1_000_000.0,
    natural_gas_therms: 50_000.0,
    ..Default::default()
};
let selected = vec!["led-retrofit".to_string(), "rooftop-solar".to_string()];

let results = run_full_analysis(&building, &usage, &selected).unwrap();

// Within the 2024 allowance but over the stricter 2030 limit
assert!(results.compliance_status.compliant.y2024);
assert!(!results.compliance_status.compliant.y2030);
assert_eq!(results.retrofit_analysis.len(), 2);
```
*/

#![deny(missing_docs)]

mod analysis;
mod compliance;
mod emissions;
mod financial;
mod loans;
mod retrofits;

pub mod error;
pub mod ll97;
pub mod report;
pub mod types;

pub use analysis::*;
pub use compliance::*;
pub use emissions::*;
pub use financial::*;
pub use loans::*;
pub use retrofits::*;

/// Version number of the library
pub static VERSION: &str = env!("CARGO_PKG_VERSION");
