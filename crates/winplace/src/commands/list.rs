use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use winplace_windows::Win32Desktop;

pub fn execute() {
    winplace_windows::dpi::enable_dpi_awareness();

    let records = match winplace_core::enumerate(&Win32Desktop) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: failed to enumerate windows: {e}");
            std::process::exit(1);
        }
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("HWND"),
            Cell::new("Title"),
            Cell::new("State"),
            Cell::new("Rect"),
            Cell::new("Width").set_alignment(CellAlignment::Right),
            Cell::new("Height").set_alignment(CellAlignment::Right),
        ]);

    for record in &records {
        let rect = record.rect();
        table.add_row(vec![
            Cell::new(record.handle()),
            Cell::new(record.title()),
            Cell::new(record.placement().show_state),
            Cell::new(rect),
            Cell::new(rect.width()).set_alignment(CellAlignment::Right),
            Cell::new(rect.height()).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{table}");
    println!("\n{} windows found", records.len());
}
