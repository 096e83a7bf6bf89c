mod common;
use common::{filled_store, temp_out};
use emchecklist::export::{ReportSettings, render_checklist, write_checklist};
use emchecklist::models::catalog;
use emchecklist::models::entry::ChecklistEntry;
use std::fs;
use std::path::Path;

fn find(haystack: &[u8], needle: &str, from: usize) -> Option<usize> {
    let needle = needle.as_bytes();
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}

fn shown(text: &str) -> String {
    format!("({text})")
}

#[test]
fn test_empty_entry_lists_every_location_in_level_order() {
    let entry = ChecklistEntry::fresh();
    let pdf = render_checklist(&entry, &ReportSettings::default());

    assert!(pdf.starts_with(b"%PDF-"));

    let mut cursor = 0;
    for level in catalog::levels() {
        cursor = find(&pdf, &shown(level.name), cursor)
            .unwrap_or_else(|| panic!("level {} missing or out of order", level.name));
        for location in level.locations {
            cursor = find(&pdf, &shown(location.name), cursor)
                .unwrap_or_else(|| panic!("location {} missing or out of order", location.name));
        }
    }
}

#[test]
fn test_rows_are_numbered_across_levels() {
    let pdf = render_checklist(&ChecklistEntry::fresh(), &ReportSettings::default());
    let last = catalog::location_count().to_string();
    assert!(find(&pdf, &shown(&last), 0).is_some());
}

#[test]
fn test_rendering_is_deterministic() {
    let form = filled_store();
    let settings = ReportSettings::default();
    let a = render_checklist(form.entry(), &settings);
    let b = render_checklist(form.entry(), &settings);
    assert_eq!(a, b);
}

#[test]
fn test_header_and_values_are_printed() {
    let mut form = filled_store();
    form.set_remark("l1-data-hall-1", "CRAC 2 alarm").unwrap();
    let settings = ReportSettings {
        title: "Plant Checklist".to_string(),
        ..ReportSettings::default()
    };

    let pdf = render_checklist(form.entry(), &settings);

    for text in [
        "Plant Checklist",
        "Date: 2025-09-01",
        "Shift: A",
        "CHW Supply 1",
        "MCF-04 Supply",
        "7.5",
        "42",
        "CRAC 2 alarm",
        "Check 1",
        "Check 2",
        "Remarks",
        "Signature of Technician",
    ] {
        assert!(find(&pdf, &shown(text), 0).is_some(), "missing {text}");
    }
}

#[test]
fn test_long_table_continues_on_next_page() {
    let pdf = render_checklist(&ChecklistEntry::fresh(), &ReportSettings::default());
    assert!(find(&pdf, &shown("Page 1"), 0).is_some());
    assert!(find(&pdf, &shown("Page 2"), 0).is_some());
    assert!(find(&pdf, "continued", 0).is_some());
}

#[test]
fn test_degree_sign_uses_win_ansi() {
    let pdf = render_checklist(&ChecklistEntry::fresh(), &ReportSettings::default());
    assert!(find(&pdf, "WinAnsiEncoding", 0).is_some());
    // "Temp °C" with the degree sign as the single WinAnsi byte 0xB0,
    // written either as a hex string or as a literal string
    let lower = pdf.to_ascii_lowercase();
    let raw: &[u8] = b"(Temp \xb0C)";
    assert!(
        find(&lower, "<54656d7020b043>", 0).is_some()
            || find(&pdf, "(Temp \\260C)", 0).is_some()
            || pdf.windows(raw.len()).any(|w| w == raw)
    );
}

#[test]
fn test_short_readings_render_remaining_rows_blank() {
    let mut entry = filled_store().entry().clone();
    entry.readings.truncate(3);

    let pdf = render_checklist(&entry, &ReportSettings::default());

    // every location still listed, in catalog order
    let mut cursor = 0;
    for location in catalog::locations() {
        cursor = find(&pdf, &shown(location.name), cursor)
            .unwrap_or_else(|| panic!("location {} missing or out of order", location.name));
    }
}

#[test]
fn test_reordered_readings_stay_under_their_level() {
    let mut entry = filled_store().entry().clone();
    entry.readings.reverse();
    let last = entry.readings[0].id.clone();
    let pos = entry
        .readings
        .iter()
        .position(|r| r.id == "b-pump-room")
        .unwrap();
    entry.readings[pos].remark = "seal leak".to_string();

    let pdf = render_checklist(&entry, &ReportSettings::default());

    let basement = find(&pdf, &shown("Basement"), 0).unwrap();
    let pump_room = find(&pdf, &shown("Pump Room"), basement).unwrap();
    let remark = find(&pdf, &shown("seal leak"), pump_room).unwrap();
    let ground = find(&pdf, &shown("Ground Floor"), 0).unwrap();
    assert!(remark < ground, "remark printed outside the Basement rows");

    let roof = find(&pdf, &shown("Roof"), 0).unwrap();
    let last_name = catalog::find_by_id(&last).unwrap().name;
    let last_at = find(&pdf, &shown(last_name), 0).unwrap();
    assert!(last_at > roof, "{last_name} printed before the Roof header");
}

#[test]
fn test_text_outside_latin1_prints_question_mark() {
    let mut form = filled_store();
    form.set_remark("gf-lobby", "Fan Ω check").unwrap();

    let pdf = render_checklist(form.entry(), &ReportSettings::default());

    assert!(find(&pdf, &shown("Fan ? check"), 0).is_some());
}

#[test]
fn test_write_checklist_creates_file() {
    let out = temp_out("report_write_checklist", "pdf");
    write_checklist(
        filled_store().entry(),
        &ReportSettings::default(),
        Path::new(&out),
    )
    .unwrap();

    let bytes = fs::read(&out).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(bytes.ends_with(b"%%EOF") || bytes.ends_with(b"%%EOF\n"));
}
