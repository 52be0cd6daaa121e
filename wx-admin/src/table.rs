//! Location table and service selector renderers.

use wx_protocol::{ServiceOption, LAST_UPDATE_HEADER};

/// One rendered location row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRow {
    /// 0-based position in the last render; sent as `rownum`.
    pub id: usize,
    pub cells: Vec<String>,
}

/// The location table as last rendered.
///
/// Row ids are positions, so they are only meaningful against this exact
/// render. Every render replaces the table wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationTable {
    pub headers: Vec<String>,
    pub rows: Vec<LocationRow>,
    pub selected: Option<usize>,
}

impl Default for LocationTable {
    fn default() -> Self {
        Self {
            headers: vec![LAST_UPDATE_HEADER.to_string()],
            rows: Vec::new(),
            selected: None,
        }
    }
}

impl LocationTable {
    /// Clear the table, then write one header per label followed by the
    /// trailing "Last Update" column, then one row per record in order.
    pub fn render(&mut self, headers: &[String], rows: &[Vec<String>]) {
        self.headers.clear();
        self.rows.clear();
        self.selected = None;

        self.headers.extend(headers.iter().cloned());
        self.headers.push(LAST_UPDATE_HEADER.to_string());
        self.rows.extend(rows.iter().enumerate().map(|(id, cells)| LocationRow {
            id,
            cells: cells.clone(),
        }));
        log::debug!("rendered location table with {} rows", self.rows.len());
    }

    pub fn row(&self, id: usize) -> Option<&LocationRow> {
        self.rows.get(id)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Mark one row selected, unselecting its siblings.
    pub fn select(&mut self, id: usize) {
        if id < self.rows.len() {
            self.selected = Some(id);
        }
    }
}

/// The weather service drop-down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceSelector {
    pub options: Vec<ServiceOption>,
    pub selected: Option<String>,
}

impl ServiceSelector {
    /// Replace the offered services. A selection that is still offered is kept.
    pub fn populate(&mut self, options: Vec<ServiceOption>) {
        if let Some(key) = &self.selected {
            if !options.iter().any(|o| &o.key == key) {
                self.selected = None;
            }
        }
        self.options = options;
    }

    /// Select the option with `key`; unknown keys change nothing.
    pub fn select(&mut self, key: &str) {
        if self.options.iter().any(|o| o.key == key) {
            self.selected = Some(key.to_string());
        }
    }
}
