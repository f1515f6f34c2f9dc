use frotalog::core::codec::{from_csv, parse_decimal, to_csv};
use frotalog::models::record::UsageRecord;

fn rec(
    equipment: &str,
    model: &str,
    unit: &str,
    hours: f64,
    fuel: f64,
    efficiency: Option<f64>,
) -> UsageRecord {
    UsageRecord::new(
        equipment.to_string(),
        model.to_string(),
        unit.to_string(),
        0.0,
        hours,
        fuel,
        efficiency,
        None,
    )
}

#[test]
fn encode_uses_canonical_header_and_semicolons() {
    let rows = vec![rec("Trator 01", "Valtra", "Norte", 10.0, 5.5, Some(2.5))];
    let csv = to_csv(&rows).expect("encode");

    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("Equipamento;Modelo;Unidade;KM/h Trabalhadas;Combustivel Consumido;Km/l / L/h")
    );
    assert_eq!(lines.next(), Some("Trator 01;Valtra;Norte;10;5,5;2,5"));
}

#[test]
fn unset_efficiency_encodes_as_empty_field() {
    let rows = vec![rec("A", "B", "C", 1.0, 2.0, None)];
    let csv = to_csv(&rows).expect("encode");
    assert!(csv.lines().nth(1).unwrap().ends_with(";2;"));
}

#[test]
fn round_trip_preserves_values_but_mints_new_ids() {
    let rows = vec![
        rec("Trator 01", "Valtra", "Norte", 10.0, 5.0, Some(2.0)),
        rec("Colheitadeira", "Case", "Sul", 0.0, 3.5, None),
    ];
    let decoded = from_csv(&to_csv(&rows).expect("encode"));

    assert_eq!(decoded.len(), 2);
    for (orig, back) in rows.iter().zip(&decoded) {
        assert_eq!(back.equipment, orig.equipment);
        assert_eq!(back.model, orig.model);
        assert_eq!(back.unit, orig.unit);
        assert_eq!(back.hours_worked, orig.hours_worked);
        assert_eq!(back.fuel_used, orig.fuel_used);
        assert_eq!(back.efficiency, orig.efficiency);
        assert_ne!(back.id, orig.id);
    }
}

#[test]
fn decode_maps_reordered_headers_by_name() {
    let text = "Combustivel;Modelo;Equipamento\n7,5;Case;Colheitadeira\n";
    let decoded = from_csv(text);

    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].equipment, "Colheitadeira");
    assert_eq!(decoded[0].model, "Case");
    assert_eq!(decoded[0].fuel_used, 7.5);
    assert_eq!(decoded[0].hours_worked, 0.0);
    assert_eq!(decoded[0].efficiency, None);
}

#[test]
fn decode_recognizes_accented_header_spellings() {
    let text = "Equipamento;Modelo;Unidade;Horas Trabalhadas;Combustível Consumido;Km/l\nT1;M1;U1;8;4;2\n";
    let decoded = from_csv(text);

    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].hours_worked, 8.0);
    assert_eq!(decoded[0].fuel_used, 4.0);
    assert_eq!(decoded[0].efficiency, Some(2.0));
}

#[test]
fn unrecognizable_six_column_header_falls_back_to_positions() {
    let text = "c1;c2;c3;c4;c5;c6\nT1;M1;U1;8;4;2\n";
    let decoded = from_csv(text);

    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].equipment, "T1");
    assert_eq!(decoded[0].model, "M1");
    assert_eq!(decoded[0].unit, "U1");
    assert_eq!(decoded[0].hours_worked, 8.0);
    assert_eq!(decoded[0].fuel_used, 4.0);
    assert_eq!(decoded[0].efficiency, Some(2.0));
}

#[test]
fn decode_detects_comma_and_tab_delimiters() {
    let comma = "Equipamento,Modelo,Unidade\nT1,M1,U1\n";
    let decoded = from_csv(comma);
    assert_eq!(decoded[0].model, "M1");

    let tab = "Equipamento\tModelo\tUnidade\nT1\tM1\tU1\n";
    let decoded = from_csv(tab);
    assert_eq!(decoded[0].unit, "U1");
}

#[test]
fn fewer_than_two_lines_yields_no_records() {
    assert!(from_csv("").is_empty());
    assert!(from_csv("Equipamento;Modelo;Unidade\n").is_empty());
    assert!(from_csv("\n\n  \n").is_empty());
}

#[test]
fn malformed_cells_degrade_to_zero() {
    let text = "Equipamento;Modelo;Unidade;Trabalhadas;Combustivel;Km/l\nT1;M1;U1;abc;;xyz\n";
    let decoded = from_csv(text);

    assert_eq!(decoded[0].hours_worked, 0.0);
    assert_eq!(decoded[0].fuel_used, 0.0);
    // Present but unparsable is a measured zero, not "unset".
    assert_eq!(decoded[0].efficiency, Some(0.0));
}

#[test]
fn short_rows_default_missing_columns_to_empty() {
    let text = "Equipamento;Modelo;Unidade;Trabalhadas;Combustivel;Km/l\nT1;M1\n";
    let decoded = from_csv(text);

    assert_eq!(decoded[0].equipment, "T1");
    assert_eq!(decoded[0].model, "M1");
    assert_eq!(decoded[0].unit, "");
    assert_eq!(decoded[0].hours_worked, 0.0);
}

#[test]
fn parse_decimal_handles_locale_formats() {
    assert_eq!(parse_decimal("1.234,56"), 1234.56);
    assert_eq!(parse_decimal("10"), 10.0);
    assert_eq!(parse_decimal("2,5"), 2.5);
    assert_eq!(parse_decimal(""), 0.0);
    assert_eq!(parse_decimal("   "), 0.0);
    assert_eq!(parse_decimal("abc"), 0.0);
}
