//! Result detail panel renderer.

use wx_protocol::{join_units, FieldValue, ForecastCell, ResultDetail};

/// A `(field, value)` line of a two-column detail table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub field: String,
    pub value: String,
}

/// Weather data shown for one location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultPanel {
    pub visible: bool,
    pub name: String,
    pub station: Vec<DetailRow>,
    pub current: Vec<DetailRow>,
    pub forecast_headers: Vec<String>,
    pub forecast_rows: Vec<Vec<String>>,
    pub icons: Vec<DetailRow>,
}

impl ResultPanel {
    /// Clear every section, populate it from `detail` and show the panel.
    ///
    /// Sections absent from `detail` end up empty; nothing from an earlier
    /// render survives.
    pub fn render(&mut self, detail: &ResultDetail) {
        self.clear();

        self.name = detail.name.clone().unwrap_or_default();
        // station values never carry a unit
        self.station = detail
            .station
            .iter()
            .map(|entry| DetailRow {
                field: entry.field.clone(),
                value: entry.value.clone(),
            })
            .collect();
        self.current = detail.current.iter().map(with_units).collect();
        self.forecast_headers = detail.forecast_headers.clone();
        self.forecast_rows = detail
            .forecast
            .iter()
            .map(|row| row.iter().map(ForecastCell::display).collect())
            .collect();
        self.icons = detail
            .icon
            .iter()
            .map(|entry| DetailRow {
                field: entry.field.clone(),
                value: entry.value.clone(),
            })
            .collect();
        self.visible = true;
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.station.clear();
        self.current.clear();
        self.forecast_headers.clear();
        self.forecast_rows.clear();
        self.icons.clear();
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

fn with_units(entry: &FieldValue) -> DetailRow {
    DetailRow {
        field: entry.field.clone(),
        value: join_units(&entry.value, entry.units.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(field: &str, value: &str) -> DetailRow {
        DetailRow {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn current_conditions_get_unit_suffix_station_does_not() {
        let detail = ResultDetail {
            name: Some("Home".into()),
            station: vec![FieldValue::new("Elevation", "300").with_units("ft")],
            current: vec![FieldValue::new("Temp", "72").with_units("F")],
            ..ResultDetail::default()
        };
        let mut panel = ResultPanel::default();
        panel.render(&detail);
        assert!(panel.visible);
        assert_eq!(panel.name, "Home");
        assert_eq!(panel.station, vec![row("Elevation", "300")]);
        assert_eq!(panel.current, vec![row("Temp", "72 F")]);
    }

    #[test]
    fn forecast_renders_headers_and_value_unit_cells() {
        let detail = ResultDetail {
            forecast_headers: vec!["Field".into(), "Day 0 Value".into()],
            forecast: vec![vec![
                ForecastCell::Text("High".into()),
                ForecastCell::Measured {
                    value: "80".into(),
                    units: Some("F".into()),
                },
            ]],
            icon: vec![FieldValue::new("Current", "sunny")],
            ..ResultDetail::default()
        };
        let mut panel = ResultPanel::default();
        panel.render(&detail);
        assert_eq!(panel.forecast_headers, vec!["Field", "Day 0 Value"]);
        assert_eq!(panel.forecast_rows, vec![vec!["High".to_string(), "80 F".to_string()]]);
        assert_eq!(panel.icons, vec![row("Current", "sunny")]);
    }

    #[test]
    fn second_render_replaces_everything() {
        let mut panel = ResultPanel::default();
        panel.render(&ResultDetail {
            name: Some("Office".into()),
            station: vec![FieldValue::new("Id", "KRDU")],
            forecast_headers: vec!["Field".into()],
            forecast: vec![vec![ForecastCell::Text("Low".into())]],
            icon: vec![FieldValue::new("Forecast", "rain")],
            ..ResultDetail::default()
        });
        panel.render(&ResultDetail {
            name: Some("Home".into()),
            current: vec![FieldValue::new("Temp", "72").with_units("F")],
            ..ResultDetail::default()
        });
        assert_eq!(panel.name, "Home");
        assert!(panel.station.is_empty());
        assert!(panel.forecast_headers.is_empty());
        assert!(panel.forecast_rows.is_empty());
        assert!(panel.icons.is_empty());
        assert_eq!(panel.current, vec![row("Temp", "72 F")]);
    }

    #[test]
    fn hidden_by_default() {
        assert!(!ResultPanel::default().visible);
    }
}
