mod common;
use common::filled_store;
use emchecklist::core::field::{FieldPath, parse_assignment};
use emchecklist::core::store::FormStore;
use emchecklist::errors::AppError;
use emchecklist::models::catalog;
use emchecklist::models::entry::{PrimaryWaterField, Shift};
use emchecklist::models::reading::{Group, Measure};

fn assert_rows_match_catalog(form: &FormStore) {
    let readings = &form.entry().readings;
    assert_eq!(readings.len(), catalog::location_count());
    for (row, location) in readings.iter().zip(catalog::locations()) {
        assert_eq!(row.id, location.id);
        assert_eq!(row.location, location.name);
    }
}

#[test]
fn test_fresh_store_follows_catalog() {
    let form = FormStore::new();
    assert_rows_match_catalog(&form);
    assert!(form.entry().date.is_empty());
    assert!(form.entry().shift.is_none());
    assert!(!form.is_complete());
    assert_eq!(form.missing_fields().len(), FormStore::required_field_count());
}

#[test]
fn test_edits_never_change_row_order() {
    let mut form = FormStore::new();
    let ids: Vec<&str> = catalog::locations().map(|l| l.id).collect();

    for (i, id) in ids.iter().enumerate().rev() {
        form.set_reading(id, Group::Group2, Measure::Lux, format!("{}", i * 10))
            .unwrap();
        form.set_remark(id, "checked").unwrap();
        assert_rows_match_catalog(&form);
    }

    form.set_primary_water(PrimaryWaterField::Mcf04Supply, "6.1");
    form.set_date("2025-09-02");
    form.set_shift(Some(Shift::B));
    assert_rows_match_catalog(&form);

    let last = ids.len() - 1;
    assert_eq!(form.entry().readings[last].group2.lux, format!("{}", last * 10));
}

#[test]
fn test_set_touches_only_one_field() {
    let mut form = FormStore::new();
    let before = form.entry().clone();

    form.set_reading("gf-ups", Group::Group1, Measure::Rh, "45").unwrap();

    let after = form.entry();
    let pos = catalog::position_of("gf-ups").unwrap();
    for (i, (a, b)) in before.readings.iter().zip(&after.readings).enumerate() {
        if i == pos {
            assert_eq!(b.group1.rh, "45");
            assert_eq!(b.group1.temp, a.group1.temp);
            assert_eq!(b.group2, a.group2);
            assert_eq!(b.remark, a.remark);
        } else {
            assert_eq!(a, b);
        }
    }
    assert_eq!(before.primary_water, after.primary_water);
}

#[test]
fn test_unknown_location_is_rejected() {
    let mut form = FormStore::new();
    let before = form.clone();

    let err = form
        .set_reading("nowhere", Group::Group1, Measure::Temp, "20")
        .unwrap_err();
    assert!(matches!(err, AppError::UnknownLocation(ref id) if id == "nowhere"));
    assert!(form.set_remark("nowhere", "x").is_err());
    assert_eq!(form, before);
}

#[test]
fn test_filled_store_is_complete() {
    let form = filled_store();
    assert!(form.is_complete());
    assert!(form.missing_fields().is_empty());
}

#[test]
fn test_clearing_any_required_field_makes_it_incomplete() {
    let filled = filled_store();

    let mut required: Vec<FieldPath> = PrimaryWaterField::ALL
        .into_iter()
        .map(FieldPath::PrimaryWater)
        .collect();
    for location in catalog::locations() {
        for group in Group::ALL {
            for measure in Measure::ALL {
                required.push(FieldPath::reading(location.id, group, measure));
            }
        }
    }
    assert_eq!(required.len(), FormStore::required_field_count());

    for field in &required {
        let mut form = filled.clone();
        form.set(field, "").unwrap();
        assert!(!form.is_complete(), "clearing {field} should break completeness");
        assert_eq!(form.missing_fields(), vec![field.clone()]);
    }
}

#[test]
fn test_remarks_and_header_are_not_required() {
    let mut form = filled_store();
    form.set_date("");
    form.set_shift(None);
    form.set_remark("l1-battery", "").unwrap();
    assert!(form.is_complete());
}

#[test]
fn test_whitespace_counts_as_empty() {
    let mut form = filled_store();
    form.set_reading("r-generator", Group::Group1, Measure::Noise, "   ")
        .unwrap();
    assert!(!form.is_complete());
}

#[test]
fn test_field_paths_parse_and_display() {
    let cases = [
        "date",
        "shift",
        "primary.cws1",
        "primary.mcf04",
        "gf-ups.g1.temp",
        "l2-ahu.g2.lux",
        "b-pump-room.remark",
    ];
    for raw in cases {
        let field: FieldPath = raw.parse().unwrap();
        assert_eq!(field.to_string(), raw);
    }

    let long: FieldPath = "gf-ups.group2.RH".parse().unwrap();
    assert_eq!(long, FieldPath::reading("gf-ups", Group::Group2, Measure::Rh));
}

#[test]
fn test_invalid_field_paths() {
    assert!(matches!(
        "primary.boiler".parse::<FieldPath>(),
        Err(AppError::InvalidField(_))
    ));
    assert!(matches!(
        "gf-ups.g3.temp".parse::<FieldPath>(),
        Err(AppError::InvalidField(_))
    ));
    assert!(matches!(
        "attic.g1.temp".parse::<FieldPath>(),
        Err(AppError::UnknownLocation(_))
    ));
    assert!(parse_assignment("gf-ups.g1.temp").is_err());
}

#[test]
fn test_set_validates_date_and_shift() {
    let mut form = FormStore::new();

    assert!(matches!(
        form.set(&FieldPath::Date, "01/09/2025"),
        Err(AppError::InvalidDate(_))
    ));
    assert!(matches!(
        form.set(&FieldPath::Shift, "D"),
        Err(AppError::InvalidShift(_))
    ));

    form.set(&FieldPath::Date, "2025-09-03").unwrap();
    form.set(&FieldPath::Shift, "c").unwrap();
    assert_eq!(form.entry().date, "2025-09-03");
    assert_eq!(form.entry().shift, Some(Shift::C));
    assert_eq!(form.get(&FieldPath::Shift).unwrap(), "C");
}

#[test]
fn test_assignment_value_may_be_empty() {
    let (field, value) = parse_assignment("gf-lobby.remark=").unwrap();
    assert_eq!(field.to_string(), "gf-lobby.remark");
    assert!(value.is_empty());

    let (_, value) = parse_assignment("gf-lobby.remark= light flickering ").unwrap();
    assert_eq!(value, "light flickering");
}
