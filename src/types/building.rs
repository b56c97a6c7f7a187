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
Input records
=============

Building characteristics, annual energy consumption and the project file
format consumed by the CLI.

The pipeline assumes pre-validated input (positive floor area, some energy
consumption); enforcing that is the caller's job.
*/

use serde::{Deserialize, Serialize};

use crate::types::common::BuildingType;

// -------------------- BuildingInfo

/// Characteristics of the analyzed building. Immutable once analysis runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingInfo {
    /// Street address
    pub address: String,
    /// Gross floor area [sqft], must be positive
    pub square_footage: f32,
    /// Occupancy type
    pub building_type: BuildingType,
    /// Year of construction (1800 < year <= current year)
    pub year_built: i32,
    /// Residential unit count, where applicable
    #[serde(default)]
    pub number_of_units: Option<u32>,
    /// Above-grade floor count
    #[serde(default)]
    pub number_of_floors: Option<u32>,
}

// -------------------- EnergyUsage

/// Annual energy consumption per fuel channel. Absent channels are zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnergyUsage {
    /// Grid electricity [kWh/yr]
    #[serde(default)]
    pub electricity_kwh: f32,
    /// Natural gas [therms/yr]
    #[serde(default)]
    pub natural_gas_therms: f32,
    /// Fuel oil no. 2 [gal/yr]
    #[serde(default)]
    pub fuel_oil_gallons: f32,
    /// District steam [MLb/yr]
    #[serde(default)]
    pub steam_mlbs: f32,
    /// District chilled water [ton-h/yr]
    #[serde(default)]
    pub district_chilled_water_ton_hrs: f32,
}

impl EnergyUsage {
    /// Whether any of the electricity/gas/oil/steam channels is positive.
    ///
    /// A meaningful analysis needs at least one of them; chilled water alone
    /// does not qualify.
    pub fn has_consumption(&self) -> bool {
        self.electricity_kwh > 0.0
            || self.natural_gas_therms > 0.0
            || self.fuel_oil_gallons > 0.0
            || self.steam_mlbs > 0.0
    }
}

// -------------------- Project

/// A saved analysis project: building, consumption and selected measures.
///
/// This is the JSON document the CLI reads; the selection may also be
/// extended from the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Building characteristics
    pub building_info: BuildingInfo,
    /// Annual energy consumption; defaults to all-zero
    #[serde(default)]
    pub energy_usage: EnergyUsage,
    /// Selected retrofit measure ids, in selection order
    #[serde(default)]
    pub selected_retrofits: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn usage_defaults_to_zero() {
        let usage = EnergyUsage::default();
        assert_eq!(usage.electricity_kwh, 0.0);
        assert!(!usage.has_consumption());
    }

    #[test]
    fn chilled_water_alone_is_not_consumption() {
        let usage = EnergyUsage {
            district_chilled_water_ton_hrs: 1000.0,
            ..Default::default()
        };
        assert!(!usage.has_consumption());
        let usage = EnergyUsage {
            steam_mlbs: 10.0,
            ..usage
        };
        assert!(usage.has_consumption());
    }

    #[test]
    fn project_from_minimal_json() {
        let project: Project = serde_json::from_str(
            r#"{
                "building_info": {
                    "address": "1 Main St, New York, NY",
                    "square_footage": 50000,
                    "building_type": "office",
                    "year_built": 1970
                }
            }"#,
        )
        .unwrap();
        assert_eq!(project.building_info.building_type, BuildingType::Office);
        assert_eq!(project.building_info.number_of_units, None);
        assert_eq!(project.energy_usage, EnergyUsage::default());
        assert!(project.selected_retrofits.is_empty());
    }
}
