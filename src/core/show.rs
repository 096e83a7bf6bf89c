//! Console rendering of the working draft.

use crate::core::store::FormStore;
use crate::models::catalog;
use crate::models::entry::PrimaryWaterField;
use crate::utils::colors::{RESET, color_for_completion, colorize_optional};
use crate::utils::table::{Column, Table};

pub fn render_entry(form: &FormStore) -> String {
    let entry = form.entry();
    let mut out = String::new();

    let shift = entry.shift.map(|s| s.code()).unwrap_or("");
    out.push_str(&format!(
        "Date: {}   Shift: {}\n\n",
        colorize_optional(&entry.date),
        colorize_optional(shift)
    ));

    out.push_str("PRIMARY WATER TEMPERATURE\n");
    let mut pw = Table::new(
        PrimaryWaterField::ALL
            .iter()
            .map(|f| Column::new(f.label(), 8))
            .collect(),
    );
    pw.add_row(
        PrimaryWaterField::ALL
            .iter()
            .map(|f| colorize_optional(entry.primary_water.get(*f)))
            .collect(),
    );
    out.push_str(&pw.render());
    out.push('\n');

    let mut index = 0;
    for level in catalog::levels() {
        out.push_str(&format!("== {} ==\n", level.name));

        let mut table = Table::new(vec![
            Column::new("#", 3),
            Column::new("Id", 18),
            Column::new("Location", 22),
            Column::new("G1 temp", 7),
            Column::new("G1 rh", 5),
            Column::new("G1 noise", 5),
            Column::new("G1 lux", 5),
            Column::new("G2 temp", 7),
            Column::new("G2 rh", 5),
            Column::new("G2 noise", 5),
            Column::new("G2 lux", 5),
            Column::new("Remark", 10),
        ]);

        for location in level.locations {
            index += 1;
            let Ok(row) = form.reading_for(location.id) else {
                continue;
            };

            let mut cells = vec![
                index.to_string(),
                location.id.to_string(),
                row.location.clone(),
            ];
            cells.extend(
                row.group1
                    .values()
                    .into_iter()
                    .chain(row.group2.values())
                    .map(colorize_optional),
            );
            cells.push(row.remark.clone());
            table.add_row(cells);
        }

        out.push_str(&table.render());
        out.push('\n');
    }

    let missing = form.missing_fields().len();
    let complete = missing == 0;
    let color = color_for_completion(complete);
    if complete {
        out.push_str(&format!("{color}Status: complete{RESET}\n"));
    } else {
        out.push_str(&format!(
            "{color}Status: incomplete ({missing} of {} required fields empty){RESET}\n",
            FormStore::required_field_count()
        ));
    }

    out
}
