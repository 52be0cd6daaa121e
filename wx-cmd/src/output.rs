//! Printing the screen model.

use std::fmt::Write as _;
use wx_admin::table::LocationTable;
use wx_admin::{FormBinder, MemoryForm, Screen};

/// Human readable dump of what the widget would show.
pub fn format_screen(screen: &Screen, config_form: &MemoryForm, add_form: &MemoryForm) -> String {
    let mut out = String::new();

    if screen.error_panel.visible {
        for message in &screen.error_panel.messages {
            let _ = writeln!(out, "error: {}", message);
        }
    }
    for (field, message) in config_form.field_errors().iter().chain(add_form.field_errors().iter()) {
        let _ = writeln!(out, "invalid {}: {}", field, message);
    }

    if let Some(service) = &screen.services.selected {
        let _ = writeln!(out, "service: {}", service);
    }
    if !screen.add_location_enabled {
        let _ = writeln!(out, "add location disabled until the configuration is applied");
    }
    let settings = config_form.serialize();
    if !settings.is_empty() {
        let _ = writeln!(out, "configuration:");
        for (name, value) in &settings {
            let _ = writeln!(out, "  {} = {}", name, value);
        }
    }

    if screen.result.visible {
        format_result(&mut out, screen);
    } else {
        format_table(&mut out, &screen.locations);
    }
    out
}

fn format_table(out: &mut String, table: &LocationTable) {
    let _ = writeln!(out, "row\t{}", table.headers.join("\t"));
    for row in &table.rows {
        let _ = writeln!(out, "{}\t{}", row.id, row.cells.join("\t"));
    }
}

fn format_result(out: &mut String, screen: &Screen) {
    let result = &screen.result;
    if !result.name.is_empty() {
        let _ = writeln!(out, "{}", result.name);
    }
    for (title, rows) in [("station", &result.station), ("current", &result.current)] {
        if rows.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{}:", title);
        for row in rows {
            let _ = writeln!(out, "  {}: {}", row.field, row.value);
        }
    }
    if !result.forecast_rows.is_empty() {
        let _ = writeln!(out, "forecast:");
        let _ = writeln!(out, "  {}", result.forecast_headers.join("\t"));
        for row in &result.forecast_rows {
            let _ = writeln!(out, "  {}", row.join("\t"));
        }
    }
    for icon in &result.icons {
        let _ = writeln!(out, "icon {}: {}", icon.field, icon.value);
    }
}

/// The location table as CSV, header row first.
pub fn table_csv(table: &LocationTable) -> anyhow::Result<String> {
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(Vec::new());
    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(&row.cells)?;
    }
    let bytes = wtr.into_inner().map_err(|e| anyhow::anyhow!("Failed to flush CSV: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wx_admin::FormSurface;

    fn table() -> LocationTable {
        let mut table = LocationTable::default();
        table.render(
            &["Path".to_string(), "Zip".to_string()],
            &[
                vec!["#a, b".to_string(), "27601".to_string(), "t0".to_string()],
                vec!["#c".to_string(), "27605".to_string(), "t1".to_string()],
            ],
        );
        table
    }

    #[test]
    fn csv_quotes_cells_and_keeps_last_update_header() {
        let csv = table_csv(&table()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Path,Zip,Last Update");
        assert_eq!(lines[1], "\"#a, b\",27601,t0");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn screen_lists_errors_then_table() {
        let mut screen = Screen::default();
        screen.locations = table();
        screen.error_panel.show(vec!["Entry already exists".to_string()]);
        let mut config = MemoryForm::permissive();
        config.set_value("zip", "abc");
        config.set_field_error("zip", Some("Invalid zip"));

        let text = format_screen(&screen, &config, &MemoryForm::new());
        assert!(text.starts_with("error: Entry already exists\ninvalid zip: Invalid zip\n"));
        assert!(text.contains("  zip = abc\n"));
        assert!(text.contains("row\tPath\tZip\tLast Update\n"));
        assert!(text.contains("1\t#c\t27605\tt1\n"));
    }
}
