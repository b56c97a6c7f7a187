#[test]
fn office_tower_compliance_report() {
    assert_cli::Assert::main_binary()
        .with_args(&["-p", "test_data/office_tower.json"])
        .stdout()
        .contains("Annual emissions [tCO2e/yr]: 553.5")
        .stdout()
        .contains("2024-2029: limit 0.00846 tCO2e/sqft, COMPLIANT, penalty $0/yr")
        .stdout()
        .contains("penalty $26,934/yr")
        .stdout()
        .contains("penalty $68,474/yr")
        .stdout()
        .contains("(no measures selected)")
        .unwrap();
}

#[test]
fn office_retrofit_report() {
    assert_cli::Assert::main_binary()
        .with_args(&["-p", "test_data/office_retrofit.json"])
        .stdout()
        .contains("LED Lighting Retrofit")
        .stdout()
        .contains("Rooftop Solar PV")
        .stdout()
        .contains("C-PACE Financing")
        .stdout()
        .contains("Solar Financing / PPA")
        .stdout()
        .contains("Construction / Renovation Loan")
        .stdout()
        .contains("** Post-retrofit LL97 position")
        .unwrap();
}

#[test]
fn measures_added_from_the_command_line() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-p",
            "test_data/office_tower.json",
            "-r",
            "led-retrofit",
            "-r",
            "air-sealing",
        ])
        .stdout()
        .contains("LED Lighting Retrofit")
        .stdout()
        .contains("Air Sealing & Weatherization")
        .unwrap();
}

#[test]
fn catalog_listing_respects_applicability() {
    assert_cli::Assert::main_binary()
        .with_args(&["-C", "-t", "warehouse"])
        .stdout()
        .contains("Measures applicable to Warehouse / Storage buildings")
        .stdout()
        .contains("LED Lighting Retrofit")
        .stdout()
        .doesnt_contain("Induction Cooking Conversion")
        .unwrap();
}

#[test]
fn usage_estimated_from_building_type() {
    assert_cli::Assert::main_binary()
        .with_args(&["-p", "test_data/office_shell.json", "-e"])
        .stdout()
        .contains("Energy usage estimated from typical Office consumption")
        .stdout()
        .contains("** Current LL97 position")
        .unwrap();
}

#[test]
fn missing_usage_without_estimate_is_an_error() {
    assert_cli::Assert::main_binary()
        .with_args(&["-p", "test_data/office_shell.json"])
        .fails()
        .and()
        .stderr()
        .contains("no annual energy consumption given")
        .unwrap();
}

#[test]
fn unknown_measure_id_is_an_error() {
    assert_cli::Assert::main_binary()
        .with_args(&["-p", "test_data/office_tower.json", "-r", "fusion-reactor"])
        .fails()
        .and()
        .stderr()
        .contains("unknown retrofit measure id \"fusion-reactor\"")
        .unwrap();
}
