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
LL97 reference data
===================

Static regulatory and market tables (emission limits, emission factors,
energy cost rates, typical energy use intensities) and the retrofit measure
catalog. The calculation pipeline consumes these as pure lookup data.
*/

mod catalog;
mod data;

pub use catalog::*;
pub use data::*;

use crate::types::{BuildingInfo, EnergyUsage};

// 1 kWh = 3.412 kBtu, 1 therm = 100 kBtu
const KBTU_PER_KWH: f32 = 3.412;
const KBTU_PER_THERM: f32 = 100.0;

/// Estimate annual consumption from the building type's median EUI.
///
/// Assumes a typical fuel mix of 60% electricity, 30% natural gas and 10%
/// unmodeled other fuels; values are rounded to whole units. Intended as a
/// stand-in when no utility data is available.
pub fn estimate_usage(building: &BuildingInfo) -> EnergyUsage {
    let median_eui = typical_eui_for(building.building_type)
        .map(|eui| eui.median)
        .unwrap_or(0.0);
    let total_kbtu = median_eui * building.square_footage;

    EnergyUsage {
        electricity_kwh: (total_kbtu * 0.6 / KBTU_PER_KWH).round(),
        natural_gas_therms: (total_kbtu * 0.3 / KBTU_PER_THERM).round(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn estimates_follow_the_fuel_mix() {
        // Office median EUI 90 kBtu/sqft over 100k sqft -> 9,000,000 kBtu
        let usage = estimate_usage(&office(100_000.0));
        assert_eq!(usage.natural_gas_therms, 27_000.0);
        // 9e6 * 0.6 / 3.412 = 1,582,649.47...
        assert!((usage.electricity_kwh - 1_582_649.0).abs() <= 1.0);
        assert_eq!(usage.fuel_oil_gallons, 0.0);
        assert_eq!(usage.steam_mlbs, 0.0);
        assert!(usage.has_consumption());
    }
}
