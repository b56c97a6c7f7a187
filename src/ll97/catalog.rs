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

/*! # Retrofit measure catalog

Static catalog of retrofit measures with cost, savings and applicability
ratios. Cost is per square foot of gross floor area; savings and reduction
percentages apply to the building's current energy cost and emissions.
*/

use crate::types::{BuildingType, Range, RetrofitCategory};

// -------------------- Applicability

/// Building types a measure applies to
pub enum Applicability {
    /// Applicable to every building type
    All,
    /// Applicable only to the listed building types
    Only(&'static [BuildingType]),
}

impl Applicability {
    /// Whether the measure applies to the given building type
    pub fn includes(&self, building_type: BuildingType) -> bool {
        match self {
            Applicability::All => true,
            Applicability::Only(types) => types.contains(&building_type),
        }
    }
}

// -------------------- RetrofitOption

/// One catalog entry describing a retrofit measure
pub struct RetrofitOption {
    /// Unique measure id
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Measure category
    pub category: RetrofitCategory,
    /// One-line description
    pub description: &'static str,
    /// Installed cost per floor area [$/sqft]
    pub cost_per_sqft: Range,
    /// Share of current annual energy cost saved [%]
    pub energy_savings_percent: Range,
    /// Share of current annual emissions removed [%]
    pub emissions_reduction_percent: Range,
    /// Typical simple payback [yr]
    pub payback_years: Range,
    /// Building types the measure applies to
    pub applicability: Applicability,
    /// Display icon
    pub icon: &'static str,
}

/// The retrofit measure catalog
pub static RETROFIT_CATALOG: [RetrofitOption; 13] = [
    RetrofitOption {
        id: "air-sealing",
        name: "Air Sealing & Weatherization",
        category: RetrofitCategory::Envelope,
        description: "Seal envelope leaks and weatherize doors, vents and penetrations",
        cost_per_sqft: Range { low: 0.50, high: 2.00 },
        energy_savings_percent: Range { low: 5.0, high: 15.0 },
        emissions_reduction_percent: Range { low: 4.0, high: 12.0 },
        payback_years: Range { low: 2.0, high: 5.0 },
        applicability: Applicability::All,
        icon: "🌬️",
    },
    RetrofitOption {
        id: "insulation-upgrade",
        name: "Roof & Wall Insulation",
        category: RetrofitCategory::Envelope,
        description: "Add or upgrade roof and exterior wall insulation",
        cost_per_sqft: Range { low: 2.00, high: 6.00 },
        energy_savings_percent: Range { low: 10.0, high: 25.0 },
        emissions_reduction_percent: Range { low: 8.0, high: 20.0 },
        payback_years: Range { low: 5.0, high: 12.0 },
        applicability: Applicability::All,
        icon: "🧱",
    },
    RetrofitOption {
        id: "window-replacement",
        name: "High-Performance Windows",
        category: RetrofitCategory::Windows,
        description: "Replace single-pane glazing with high-performance windows",
        cost_per_sqft: Range { low: 15.00, high: 40.00 },
        energy_savings_percent: Range { low: 5.0, high: 15.0 },
        emissions_reduction_percent: Range { low: 5.0, high: 12.0 },
        payback_years: Range { low: 15.0, high: 30.0 },
        applicability: Applicability::All,
        icon: "🪟",
    },
    RetrofitOption {
        id: "hvac-upgrade",
        name: "High-Efficiency HVAC Replacement",
        category: RetrofitCategory::Hvac,
        description: "Replace heating and cooling plant with high-efficiency equipment",
        cost_per_sqft: Range { low: 8.00, high: 20.00 },
        energy_savings_percent: Range { low: 15.0, high: 30.0 },
        emissions_reduction_percent: Range { low: 12.0, high: 25.0 },
        payback_years: Range { low: 7.0, high: 15.0 },
        applicability: Applicability::All,
        icon: "❄️",
    },
    RetrofitOption {
        id: "smart-thermostats",
        name: "Smart Thermostats & Zone Controls",
        category: RetrofitCategory::Controls,
        description: "Install connected thermostats with schedule and zone control",
        cost_per_sqft: Range { low: 0.25, high: 1.00 },
        energy_savings_percent: Range { low: 5.0, high: 12.0 },
        emissions_reduction_percent: Range { low: 4.0, high: 10.0 },
        payback_years: Range { low: 1.0, high: 3.0 },
        applicability: Applicability::All,
        icon: "🌡️",
    },
    RetrofitOption {
        id: "bms-upgrade",
        name: "Building Management System Upgrade",
        category: RetrofitCategory::Controls,
        description: "Modernize the building management system and optimize sequences",
        cost_per_sqft: Range { low: 1.00, high: 3.50 },
        energy_savings_percent: Range { low: 8.0, high: 20.0 },
        emissions_reduction_percent: Range { low: 6.0, high: 15.0 },
        payback_years: Range { low: 3.0, high: 7.0 },
        applicability: Applicability::Only(&[
            BuildingType::Office,
            BuildingType::Retail,
            BuildingType::Hotel,
            BuildingType::Healthcare,
            BuildingType::Education,
            BuildingType::MixedUse,
        ]),
        icon: "🖥️",
    },
    RetrofitOption {
        id: "led-retrofit",
        name: "LED Lighting Retrofit",
        category: RetrofitCategory::Lighting,
        description: "Convert interior and exterior lighting to LED",
        cost_per_sqft: Range { low: 1.00, high: 3.00 },
        energy_savings_percent: Range { low: 8.0, high: 15.0 },
        emissions_reduction_percent: Range { low: 6.0, high: 12.0 },
        payback_years: Range { low: 2.0, high: 5.0 },
        applicability: Applicability::All,
        icon: "💡",
    },
    RetrofitOption {
        id: "lighting-controls",
        name: "Occupancy & Daylight Lighting Controls",
        category: RetrofitCategory::Controls,
        description: "Add occupancy sensors and daylight dimming to lighting circuits",
        cost_per_sqft: Range { low: 0.50, high: 2.00 },
        energy_savings_percent: Range { low: 4.0, high: 10.0 },
        emissions_reduction_percent: Range { low: 3.0, high: 8.0 },
        payback_years: Range { low: 2.0, high: 4.0 },
        applicability: Applicability::All,
        icon: "🎛️",
    },
    RetrofitOption {
        id: "heat-pump-space",
        name: "Heat Pump Space Heating & Cooling",
        category: RetrofitCategory::Electrification,
        description: "Electrify space conditioning with air- or water-source heat pumps",
        cost_per_sqft: Range { low: 10.00, high: 30.00 },
        energy_savings_percent: Range { low: 20.0, high: 40.0 },
        emissions_reduction_percent: Range { low: 30.0, high: 60.0 },
        payback_years: Range { low: 8.0, high: 18.0 },
        applicability: Applicability::All,
        icon: "⚡",
    },
    RetrofitOption {
        id: "heat-pump-water",
        name: "Heat Pump Water Heating",
        category: RetrofitCategory::Electrification,
        description: "Replace fossil-fired domestic hot water with heat pump water heaters",
        cost_per_sqft: Range { low: 2.00, high: 6.00 },
        energy_savings_percent: Range { low: 8.0, high: 15.0 },
        emissions_reduction_percent: Range { low: 10.0, high: 20.0 },
        payback_years: Range { low: 6.0, high: 12.0 },
        applicability: Applicability::All,
        icon: "🚿",
    },
    RetrofitOption {
        id: "induction-cooking",
        name: "Induction Cooking Conversion",
        category: RetrofitCategory::Electrification,
        description: "Replace gas ranges with induction cooking equipment",
        cost_per_sqft: Range { low: 1.00, high: 4.00 },
        energy_savings_percent: Range { low: 2.0, high: 5.0 },
        emissions_reduction_percent: Range { low: 4.0, high: 10.0 },
        payback_years: Range { low: 10.0, high: 20.0 },
        applicability: Applicability::Only(&[
            BuildingType::Multifamily,
            BuildingType::Hotel,
            BuildingType::Healthcare,
            BuildingType::Education,
        ]),
        icon: "🍳",
    },
    RetrofitOption {
        id: "rooftop-solar",
        name: "Rooftop Solar PV",
        category: RetrofitCategory::Solar,
        description: "Install photovoltaic generation on available roof area",
        cost_per_sqft: Range { low: 4.00, high: 10.00 },
        energy_savings_percent: Range { low: 10.0, high: 25.0 },
        emissions_reduction_percent: Range { low: 15.0, high: 30.0 },
        payback_years: Range { low: 6.0, high: 12.0 },
        applicability: Applicability::All,
        icon: "☀️",
    },
    RetrofitOption {
        id: "low-flow-fixtures",
        name: "Low-Flow Water Fixtures",
        category: RetrofitCategory::Water,
        description: "Install low-flow fixtures to cut hot water demand",
        cost_per_sqft: Range { low: 0.30, high: 1.00 },
        energy_savings_percent: Range { low: 3.0, high: 8.0 },
        emissions_reduction_percent: Range { low: 2.0, high: 6.0 },
        payback_years: Range { low: 1.0, high: 3.0 },
        applicability: Applicability::All,
        icon: "🚰",
    },
];

/// Catalog entry for a measure id
pub fn find_retrofit(id: &str) -> Option<&'static RetrofitOption> {
    RETROFIT_CATALOG.iter().find(|r| r.id == id)
}

/// Catalog entries applicable to a building type, in catalog order
pub fn retrofits_for(building_type: BuildingType) -> Vec<&'static RetrofitOption> {
    RETROFIT_CATALOG
        .iter()
        .filter(|r| r.applicability.includes(building_type))
        .collect()
}
