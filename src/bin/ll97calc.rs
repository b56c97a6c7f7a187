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

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::process::exit;

use clap::{App, AppSettings, Arg};
use failure::{Error, ResultExt};

use ll97calc::report::{format_range, AsPlain};
use ll97calc::types::{BuildingType, Project};
use ll97calc::*;

// Helper functions ---------------------------------------------------------

fn readfile(path: &Path) -> Result<String, Error> {
    let mut f = File::open(path).context(format!("File {} not found", path.display()))?;
    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .context("Error reading file")?;
    Ok(contents)
}

fn writefile(path: &Path, content: &[u8]) {
    let mut file = match File::create(&path) {
        Err(err) => panic!("ERROR: could not write to \"{}\": {}", path.display(), err),
        Ok(file) => file,
    };
    if let Err(err) = file.write_all(content) {
        panic!("Could not write to {}: {}", path.display(), err)
    }
}

/// Load a project file or bail out with a data error
fn get_project(path_str: &str) -> Project {
    let path = Path::new(path_str);
    let contents = match readfile(path) {
        Ok(contents) => {
            println!("Project file: \"{}\"", path.display());
            contents
        }
        Err(_) => {
            eprintln!("ERROR: could not read project file {}", path.display());
            exit(exitcode::IOERR);
        }
    };
    match serde_json::from_str(&contents) {
        Ok(project) => project,
        Err(err) => {
            eprintln!(
                "ERROR: bad project file format \"{}\" ({})",
                path_str, err
            );
            exit(exitcode::DATAERR);
        }
    }
}

/// Check the preconditions the analysis pipeline assumes
fn validate_project(project: &Project, estimate: bool) {
    let building = &project.building_info;
    if building.square_footage <= 0.0 {
        eprintln!(
            "ERROR: square footage must be positive and is {:.0}",
            building.square_footage
        );
        exit(exitcode::DATAERR);
    }
    if building.year_built <= 1800 || building.year_built > 2100 {
        eprintln!(
            "ERROR: implausible year built: {}",
            building.year_built
        );
        exit(exitcode::DATAERR);
    }
    if !project.energy_usage.has_consumption() && !estimate {
        eprintln!(
            "ERROR: no annual energy consumption given. Fill in the energy_usage \
             section or pass --estimate to use typical values for the building type"
        );
        exit(exitcode::DATAERR);
    }
    for id in &project.selected_retrofits {
        match ll97::find_retrofit(id) {
            None => {
                eprintln!("ERROR: unknown retrofit measure id \"{}\"", id);
                exit(exitcode::DATAERR);
            }
            Some(retrofit) => {
                if !retrofit.applicability.includes(building.building_type) {
                    println!(
                        "WARNING: measure \"{}\" is not typical for {} buildings",
                        id,
                        building.building_type.label()
                    );
                }
            }
        }
    }
}

/// Merge CLI-selected measures into the project selection, keeping first
/// occurrence order (the pipeline expects a de-duplicated selection)
fn merge_selection(project_ids: &[String], cli_ids: Option<clap::Values<'_>>) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    let cli_ids: Vec<String> = cli_ids
        .map(|v| v.map(|s| s.to_string()).collect())
        .unwrap_or_default();
    for id in project_ids.iter().cloned().chain(cli_ids) {
        if !merged.contains(&id) {
            merged.push(id);
        }
    }
    merged
}

/// List the measure catalog, optionally narrowed to a building type
fn print_catalog(building_type: Option<BuildingType>) {
    let entries = match building_type {
        Some(bt) => {
            println!("** Measures applicable to {} buildings", bt.label());
            ll97::retrofits_for(bt)
        }
        None => {
            println!("** Measure catalog");
            ll97::RETROFIT_CATALOG.iter().collect()
        }
    };
    for r in entries {
        println!("{} {} [{}] ({})", r.icon, r.name, r.category, r.id);
        println!(
            "    cost {}/sqft, saves {}% of energy cost, payback {} yr",
            format_range(r.cost_per_sqft, |v| format!("${:.2}", v)),
            format_range(r.energy_savings_percent, |v| format!("{:.0}", v)),
            format_range(r.payback_years, |v| format!("{:.0}", v)),
        );
    }
}

// Main ---------------------------------------------------------------------

fn main() {
    let matches = App::new("ll97calc")
        .bin_name("ll97calc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("LL97 carbon compliance and retrofit financial analysis")
        .setting(AppSettings::NextLineHelp)
        .arg(
            Arg::with_name("project")
                .short("p")
                .long("project")
                .value_name("PROJECT")
                .help("JSON project file with building, energy usage and selected measures")
                .required_unless("catalog")
                .takes_value(true)
                .display_order(1),
        )
        .arg(
            Arg::with_name("retrofit")
                .short("r")
                .long("retrofit")
                .value_name("MEASURE_ID")
                .help("Add a measure to the selection (repeatable)")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .display_order(2),
        )
        .arg(
            Arg::with_name("estimate")
                .short("e")
                .long("estimate")
                .help("Estimate energy usage from the building type when none is given")
                .display_order(3),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .value_name("OUTPUT_JSON")
                .help("Write the full results record as JSON to a file")
                .takes_value(true)
                .display_order(4),
        )
        .arg(
            Arg::with_name("catalog")
                .short("C")
                .long("catalog")
                .help("List the retrofit measure catalog and exit")
                .display_order(5),
        )
        .arg(
            Arg::with_name("building_type")
                .short("t")
                .long("building-type")
                .value_name("BUILDING_TYPE")
                .possible_values(&[
                    "multifamily",
                    "office",
                    "retail",
                    "hotel",
                    "healthcare",
                    "education",
                    "warehouse",
                    "mixed-use",
                ])
                .help("Narrow the catalog listing to one building type\n")
                .takes_value(true)
                .display_order(6),
        )
        .arg(
            Arg::with_name("v")
                .short("v")
                .multiple(true)
                .help("Sets the level of verbosity"),
        )
        .get_matches();

    let verbosity = matches.occurrences_of("v");

    // Catalog listing mode -------------------------------------------------
    if matches.is_present("catalog") {
        let building_type = matches
            .value_of("building_type")
            .map(|v| v.parse::<BuildingType>().unwrap());
        print_catalog(building_type);
        exit(exitcode::OK);
    }

    // Project input --------------------------------------------------------
    println!("** Input data");
    let mut project = get_project(matches.value_of("project").unwrap());

    project.selected_retrofits =
        merge_selection(&project.selected_retrofits, matches.values_of("retrofit"));

    if verbosity > 1 {
        println!("Parsed project: ----------");
        println!("{:#?}", project);
        println!("--------------------------");
    }

    let estimate = matches.is_present("estimate");
    validate_project(&project, estimate);

    if estimate && !project.energy_usage.has_consumption() {
        project.energy_usage = ll97::estimate_usage(&project.building_info);
        println!(
            "Energy usage estimated from typical {} consumption",
            project.building_info.building_type.label()
        );
    }

    // Analysis -------------------------------------------------------------
    let results = run_full_analysis(
        &project.building_info,
        &project.energy_usage,
        &project.selected_retrofits,
    )
    .unwrap_or_else(|error| {
        eprintln!("ERROR: analysis failed ({})", error);
        exit(exitcode::DATAERR);
    });

    // Output ---------------------------------------------------------------
    if let Some(json_path) = matches.value_of_os("json") {
        let path = Path::new(json_path);
        if verbosity > 0 {
            println!("Results in JSON format: {:?}", path.display());
        }
        let json = serde_json::to_string_pretty(&results).unwrap_or_else(|error| {
            eprintln!("ERROR: could not convert results to JSON ({})", error);
            exit(exitcode::DATAERR);
        });
        writefile(path, json.as_bytes());
    }

    println!("\n** Analysis report");
    println!("{}", results.to_plain());
}
