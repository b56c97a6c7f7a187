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
Emissions and energy cost calculation
=====================================

Converts annual per-fuel consumption into total emissions and total energy
cost with fixed factors. No rounding happens here; presentation rounds.
*/

use crate::ll97::{EMISSION_FACTORS, ENERGY_COST_RATES};
use crate::types::EnergyUsage;

/// Total annual emissions [tCO2e/yr] across the five fuel channels.
///
/// Zero or absent channels contribute zero; district oil uses the no. 2
/// grade factor.
pub fn calculate_emissions(usage: &EnergyUsage) -> f32 {
    usage.electricity_kwh * EMISSION_FACTORS.electricity
        + usage.natural_gas_therms * EMISSION_FACTORS.natural_gas
        + usage.fuel_oil_gallons * EMISSION_FACTORS.fuel_oil2
        + usage.steam_mlbs * EMISSION_FACTORS.steam
        + usage.district_chilled_water_ton_hrs * EMISSION_FACTORS.chilled_water
}

/// Total annual energy cost [$/yr] across the five fuel channels
pub fn calculate_energy_costs(usage: &EnergyUsage) -> f32 {
    usage.electricity_kwh * ENERGY_COST_RATES.electricity
        + usage.natural_gas_therms * ENERGY_COST_RATES.natural_gas
        + usage.fuel_oil_gallons * ENERGY_COST_RATES.fuel_oil
        + usage.steam_mlbs * ENERGY_COST_RATES.steam
        + usage.district_chilled_water_ton_hrs * ENERGY_COST_RATES.chilled_water
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn zero_usage_yields_zero() {
        let usage = EnergyUsage::default();
        assert_eq!(calculate_emissions(&usage), 0.0);
        assert_eq!(calculate_energy_costs(&usage), 0.0);
    }

    #[test]
    fn emissions_sum_the_fuel_channels() {
        let usage = EnergyUsage {
            electricity_kwh: 1_000_000.0,
            natural_gas_therms: 50_000.0,
            ..Default::default()
        };
        // 1,000,000 * 0.000288 + 50,000 * 0.00531 = 288 + 265.5
        assert!((calculate_emissions(&usage) - 553.5).abs() < 1e-2);
    }

    #[test]
    fn costs_sum_the_fuel_channels() {
        let usage = EnergyUsage {
            electricity_kwh: 10_000.0,
            natural_gas_therms: 1_000.0,
            fuel_oil_gallons: 100.0,
            steam_mlbs: 10.0,
            district_chilled_water_ton_hrs: 100.0,
        };
        // 2200 + 1500 + 350 + 350 + 15
        assert!((calculate_energy_costs(&usage) - 4415.0).abs() < 1e-2);
    }
}
