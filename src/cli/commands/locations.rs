use crate::errors::AppResult;
use crate::models::catalog;
use crate::ui::messages::header;
use crate::utils::table::{Column, Table};

pub fn handle() -> AppResult<()> {
    let mut index = 0;
    for level in catalog::levels() {
        header(level.name);

        let mut table = Table::new(vec![
            Column::new("#", 3),
            Column::new("Id", 18),
            Column::new("Location", 22),
        ]);
        for location in level.locations {
            index += 1;
            table.add_row(vec![
                index.to_string(),
                location.id.to_string(),
                location.name.to_string(),
            ]);
        }
        println!("{}", table.render());
    }
    Ok(())
}
