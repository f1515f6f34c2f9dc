mod common;
use common::{frl, setup_store, store_with_data, temp_out};
use predicates::prelude::*;
use std::env;
use std::fs;

fn write_csv_fixture(name: &str, content: &str) -> String {
    let mut path = env::temp_dir();
    path.push(format!("{}_fixture.csv", name));
    fs::write(&path, content).expect("write fixture");
    path.to_string_lossy().to_string()
}

#[test]
fn import_replaces_the_whole_store() {
    let store = setup_store("import_replaces");
    store_with_data(&store);

    let fixture = write_csv_fixture(
        "import_replaces",
        "Equipamento;Modelo;Unidade;KM/h Trabalhadas;Combustivel Consumido;Km/l / L/h\n\
         Escavadeira;CAT;Obra Leste;12,5;30;\n",
    );

    frl()
        .args(["--store", &store, "import", "--file", &fixture])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 entries"));

    frl()
        .args(["--store", &store, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Escavadeira"))
        .stdout(predicate::str::contains("Trator 01").not())
        .stdout(predicate::str::contains("1 entries."));
}

#[test]
fn import_missing_file_fails_and_leaves_store_unchanged() {
    let store = setup_store("import_missing");
    store_with_data(&store);

    frl()
        .args(["--store", &store, "import", "--file", "/no/such/file.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read"));

    frl()
        .args(["--store", &store, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 entries."));
}

#[test]
fn export_csv_writes_canonical_header() {
    let store = setup_store("export_csv");
    store_with_data(&store);

    let out = temp_out("export_csv", "csv");
    frl()
        .args(["--store", &store, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with(
        "Equipamento;Modelo;Unidade;KM/h Trabalhadas;Combustivel Consumido;Km/l / L/h"
    ));
    assert!(content.contains("Trator 01;Valtra;Fazenda Norte;10;5;"));
}

#[test]
fn export_json_honors_range_filter() {
    let store = setup_store("export_json_range");
    store_with_data(&store);

    let out = temp_out("export_json_range", "json");
    frl()
        .args([
            "--store",
            &store,
            "export",
            "--format",
            "json",
            "--file",
            &out,
            "--range",
            "2025-09-01:2025-09-10",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("Trator 01"));
    assert!(!content.contains("Colheitadeira 02"));
}

#[test]
fn export_relative_path_is_rejected() {
    let store = setup_store("export_relative");
    store_with_data(&store);

    frl()
        .args([
            "--store", &store, "export", "--format", "csv", "--file", "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be absolute"));
}

#[test]
fn export_empty_range_warns_and_writes_nothing() {
    let store = setup_store("export_empty_range");
    store_with_data(&store);

    let out = temp_out("export_empty_range", "csv");
    frl()
        .args([
            "--store", &store, "export", "--format", "csv", "--file", &out, "--range", "2024",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn import_then_export_round_trips_values() {
    let store = setup_store("import_export_roundtrip");

    let fixture = write_csv_fixture(
        "import_export_roundtrip",
        "Equipamento;Modelo;Unidade;KM/h Trabalhadas;Combustivel Consumido;Km/l / L/h\n\
         Trator;Valtra;Norte;10;5,5;2\n",
    );

    frl()
        .args(["--store", &store, "import", "--file", &fixture])
        .assert()
        .success();

    let out = temp_out("import_export_roundtrip", "csv");
    frl()
        .args(["--store", &store, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Trator;Valtra;Norte;10;5,5;2"));
}
