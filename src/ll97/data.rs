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

/*! # Regulatory and market reference data

LL97 emission intensity limits, fuel emission factors, energy cost rates and
typical energy use intensities. Approximate published values; constant
through an analysis run.
*/

use crate::types::{BuildingType, PeriodValues};

/// Penalty charged per tonne of emissions over the allowed total [$/tCO2e/yr]
pub const PENALTY_RATE: f32 = 268.0;

// -------------------- Emission factors

/// Emission factors per fuel channel [tCO2e per delivered unit]
pub struct EmissionFactors {
    /// Grid electricity [tCO2e/kWh], NYC grid
    pub electricity: f32,
    /// Natural gas [tCO2e/therm]
    pub natural_gas: f32,
    /// Fuel oil no. 2 [tCO2e/gal]
    pub fuel_oil2: f32,
    /// Fuel oil no. 4 [tCO2e/gal]
    pub fuel_oil4: f32,
    /// District steam [tCO2e/MLb]
    pub steam: f32,
    /// District chilled water [tCO2e/ton-h]
    pub chilled_water: f32,
}

/// Emission factors used by the emissions calculator
pub const EMISSION_FACTORS: EmissionFactors = EmissionFactors {
    electricity: 0.000_288,
    natural_gas: 0.005_31,
    fuel_oil2: 0.010_18,
    fuel_oil4: 0.010_98,
    steam: 0.044_93,
    chilled_water: 0.000_185,
};

// -------------------- Energy cost rates

/// Market energy rates per fuel channel [$ per delivered unit], NYC approximate
pub struct EnergyCostRates {
    /// Grid electricity [$/kWh]
    pub electricity: f32,
    /// Natural gas [$/therm]
    pub natural_gas: f32,
    /// Fuel oil [$/gal]
    pub fuel_oil: f32,
    /// District steam [$/MLb]
    pub steam: f32,
    /// District chilled water [$/ton-h]
    pub chilled_water: f32,
}

/// Cost rates used by the energy cost calculator
pub const ENERGY_COST_RATES: EnergyCostRates = EnergyCostRates {
    electricity: 0.22,
    natural_gas: 1.50,
    fuel_oil: 3.50,
    steam: 35.0,
    chilled_water: 0.15,
};

// -------------------- Emission intensity limits

/// LL97 emission intensity limits per building type [tCO2e/sqft/yr],
/// one value per compliance period
pub const EMISSION_LIMITS: [(BuildingType, PeriodValues); 8] = [
    (
        BuildingType::Multifamily,
        PeriodValues {
            y2024: 0.006_75,
            y2030: 0.004_07,
            y2035: 0.002_68,
        },
    ),
    (
        BuildingType::Office,
        PeriodValues {
            y2024: 0.008_46,
            y2030: 0.004_53,
            y2035: 0.002_98,
        },
    ),
    (
        BuildingType::Retail,
        PeriodValues {
            y2024: 0.011_81,
            y2030: 0.005_74,
            y2035: 0.003_78,
        },
    ),
    (
        BuildingType::Hotel,
        PeriodValues {
            y2024: 0.009_51,
            y2030: 0.005_26,
            y2035: 0.003_47,
        },
    ),
    (
        BuildingType::Healthcare,
        PeriodValues {
            y2024: 0.023_81,
            y2030: 0.012_76,
            y2035: 0.008_41,
        },
    ),
    (
        BuildingType::Education,
        PeriodValues {
            y2024: 0.007_58,
            y2030: 0.004_07,
            y2035: 0.002_68,
        },
    ),
    (
        BuildingType::Warehouse,
        PeriodValues {
            y2024: 0.004_11,
            y2030: 0.002_20,
            y2035: 0.001_45,
        },
    ),
    // Mixed-use carries an average of the common building types
    (
        BuildingType::MixedUse,
        PeriodValues {
            y2024: 0.007_58,
            y2030: 0.004_30,
            y2035: 0.002_83,
        },
    ),
];

/// Emission intensity limits for a building type, if tabulated.
///
/// A missing entry is not an error: the compliance evaluator treats it as
/// all-zero limits, which only a zero-emissions building satisfies.
pub fn limits_for(building_type: BuildingType) -> Option<PeriodValues> {
    EMISSION_LIMITS
        .iter()
        .find(|(bt, _)| *bt == building_type)
        .map(|(_, limits)| *limits)
}

// -------------------- Typical energy use intensity

/// Typical site energy use intensity for a building type [kBtu/sqft/yr]
pub struct TypicalEui {
    /// Median of the stock
    pub median: f32,
    /// Low end of the common range
    pub low: f32,
    /// High end of the common range
    pub high: f32,
}

/// Typical EUI per building type, for estimating consumption when none is given
pub const TYPICAL_EUI: [(BuildingType, TypicalEui); 8] = [
    (
        BuildingType::Multifamily,
        TypicalEui {
            median: 85.0,
            low: 50.0,
            high: 150.0,
        },
    ),
    (
        BuildingType::Office,
        TypicalEui {
            median: 90.0,
            low: 60.0,
            high: 140.0,
        },
    ),
    (
        BuildingType::Retail,
        TypicalEui {
            median: 75.0,
            low: 40.0,
            high: 130.0,
        },
    ),
    (
        BuildingType::Hotel,
        TypicalEui {
            median: 110.0,
            low: 70.0,
            high: 180.0,
        },
    ),
    (
        BuildingType::Healthcare,
        TypicalEui {
            median: 200.0,
            low: 120.0,
            high: 350.0,
        },
    ),
    (
        BuildingType::Education,
        TypicalEui {
            median: 85.0,
            low: 50.0,
            high: 140.0,
        },
    ),
    (
        BuildingType::Warehouse,
        TypicalEui {
            median: 35.0,
            low: 15.0,
            high: 70.0,
        },
    ),
    (
        BuildingType::MixedUse,
        TypicalEui {
            median: 90.0,
            low: 55.0,
            high: 150.0,
        },
    ),
];

/// Typical EUI entry for a building type, if tabulated
pub fn typical_eui_for(building_type: BuildingType) -> Option<&'static TypicalEui> {
    TYPICAL_EUI
        .iter()
        .find(|(bt, _)| *bt == building_type)
        .map(|(_, eui)| eui)
}
