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
Closed domain enumerations
==========================

Building types, retrofit categories and financing suitability grades.

These enumerations are closed and small. Type-specific behavior (emission
limits, typical energy use, applicable measures) is expressed as data-keyed
lookups over them, never as per-type subtypes.
*/

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

// -------------------- BuildingType

/// Covered building occupancy type under LL97
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum BuildingType {
    /// Multifamily residential
    #[strum(serialize = "multifamily")]
    Multifamily,
    /// Office
    #[strum(serialize = "office")]
    Office,
    /// Retail
    #[strum(serialize = "retail")]
    Retail,
    /// Hotel
    #[strum(serialize = "hotel")]
    Hotel,
    /// Healthcare (hospitals, clinics, outpatient)
    #[strum(serialize = "healthcare")]
    Healthcare,
    /// Education (schools, universities)
    #[strum(serialize = "education")]
    Education,
    /// Warehouse and storage
    #[strum(serialize = "warehouse")]
    Warehouse,
    /// Mixed-use
    #[strum(serialize = "mixed-use")]
    MixedUse,
}

impl BuildingType {
    /// All covered building types
    pub const ALL: [BuildingType; 8] = [
        BuildingType::Multifamily,
        BuildingType::Office,
        BuildingType::Retail,
        BuildingType::Hotel,
        BuildingType::Healthcare,
        BuildingType::Education,
        BuildingType::Warehouse,
        BuildingType::MixedUse,
    ];

    /// Human-readable label for reports
    pub fn label(self) -> &'static str {
        match self {
            BuildingType::Multifamily => "Multifamily Residential",
            BuildingType::Office => "Office",
            BuildingType::Retail => "Retail",
            BuildingType::Hotel => "Hotel",
            BuildingType::Healthcare => "Healthcare",
            BuildingType::Education => "Education",
            BuildingType::Warehouse => "Warehouse / Storage",
            BuildingType::MixedUse => "Mixed-Use",
        }
    }
}

// -------------------- RetrofitCategory

/// Category of a retrofit measure in the catalog
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum RetrofitCategory {
    /// Building envelope (sealing, insulation)
    #[strum(serialize = "envelope")]
    Envelope,
    /// Heating, ventilation and air conditioning
    #[strum(serialize = "hvac")]
    Hvac,
    /// Fossil-to-electric conversion measures
    #[strum(serialize = "electrification")]
    Electrification,
    /// On-site solar generation
    #[strum(serialize = "solar")]
    Solar,
    /// Lighting systems
    #[strum(serialize = "lighting")]
    Lighting,
    /// Glazing and fenestration
    #[strum(serialize = "windows")]
    Windows,
    /// Automation and controls
    #[strum(serialize = "controls")]
    Controls,
    /// Domestic water systems
    #[strum(serialize = "water")]
    Water,
}

// -------------------- Suitability

/// How well a financing product fits the analyzed project
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Suitability {
    /// Strong match for the project profile
    #[strum(serialize = "excellent")]
    Excellent,
    /// Workable match
    #[strum(serialize = "good")]
    Good,
    /// Usable but with reservations
    #[strum(serialize = "fair")]
    Fair,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn building_type_roundtrip() {
        assert_eq!(format!("{}", BuildingType::MixedUse), "mixed-use");
        assert_eq!(
            "mixed-use".parse::<BuildingType>().unwrap(),
            BuildingType::MixedUse
        );
        for bt in &BuildingType::ALL {
            assert_eq!(format!("{}", bt).parse::<BuildingType>().unwrap(), *bt);
        }
    }

    #[test]
    fn suitability_display() {
        assert_eq!(format!("{}", Suitability::Excellent), "excellent");
        assert_eq!(format!("{}", Suitability::Fair), "fair");
    }
}
