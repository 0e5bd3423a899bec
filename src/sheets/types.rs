use google_sheets4::api::Spreadsheet;
use serde::Serialize;

/// Edit URL for a spreadsheet. Built locally; the id is embedded as-is.
pub fn edit_url(spreadsheet_id: &str) -> String {
    format!("https://docs.google.com/spreadsheets/d/{}/edit", spreadsheet_id)
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreatedSpreadsheet {
    pub spreadsheet_id: String,
    pub url: String,
}

/// Zero-based, half-open cell bounds on a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub start_row: i32,
    pub end_row: i32,
    pub start_column: i32,
    pub end_column: i32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SpreadsheetInfo {
    pub title: String,
    pub sheets: Vec<SheetInfo>,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SheetInfo {
    pub title: String,
    pub sheet_id: i32,
    pub row_count: i32,
    pub column_count: i32,
}

impl SpreadsheetInfo {
    /// Flatten spreadsheet metadata into a summary, keeping sheet order.
    ///
    /// Fields the service leaves out come through as empty strings or zero.
    pub fn from_spreadsheet(spreadsheet_id: &str, spreadsheet: Spreadsheet) -> Self {
        let title = spreadsheet
            .properties
            .and_then(|props| props.title)
            .unwrap_or_default();

        let sheets = spreadsheet
            .sheets
            .unwrap_or_default()
            .into_iter()
            .filter_map(|sheet| sheet.properties)
            .map(|props| {
                let grid = props.grid_properties.unwrap_or_default();
                SheetInfo {
                    title: props.title.unwrap_or_default(),
                    sheet_id: props.sheet_id.unwrap_or_default(),
                    row_count: grid.row_count.unwrap_or_default(),
                    column_count: grid.column_count.unwrap_or_default(),
                }
            })
            .collect();

        Self {
            title,
            sheets,
            url: edit_url(spreadsheet_id),
        }
    }

    pub fn sheet(&self, title: &str) -> Option<&SheetInfo> {
        self.sheets.iter().find(|sheet| sheet.title == title)
    }
}


#[cfg(test)]
mod tests {
    use super::test_helpers::{mock_sheet, mock_spreadsheet};
    use super::*;

    #[test]
    fn test_edit_url() {
        assert_eq!(
            edit_url("abc123"),
            "https://docs.google.com/spreadsheets/d/abc123/edit"
        );
        assert_eq!(
            edit_url("id with/odd chars?"),
            "https://docs.google.com/spreadsheets/d/id with/odd chars?/edit"
        );
    }

    #[test]
    fn test_info_preserves_sheet_order() {
        let spreadsheet = mock_spreadsheet(
            "Report",
            vec![
                mock_sheet("Zeta", 42, 100, 5),
                mock_sheet("Alpha", 0, 1000, 26),
                mock_sheet("Mid", 7, 10, 2),
            ],
        );

        let info = SpreadsheetInfo::from_spreadsheet("sheet-id", spreadsheet);

        assert_eq!(info.title, "Report");
        assert_eq!(info.url, edit_url("sheet-id"));
        assert_eq!(
            info.sheets,
            vec![
                SheetInfo {
                    title: "Zeta".to_string(),
                    sheet_id: 42,
                    row_count: 100,
                    column_count: 5,
                },
                SheetInfo {
                    title: "Alpha".to_string(),
                    sheet_id: 0,
                    row_count: 1000,
                    column_count: 26,
                },
                SheetInfo {
                    title: "Mid".to_string(),
                    sheet_id: 7,
                    row_count: 10,
                    column_count: 2,
                },
            ]
        );
        assert_eq!(info.sheet("Mid").map(|s| s.sheet_id), Some(7));
        assert!(info.sheet("Missing").is_none());
    }

    #[test]
    fn test_info_handles_missing_fields() {
        let info = SpreadsheetInfo::from_spreadsheet("x", Spreadsheet::default());
        assert_eq!(info.title, "");
        assert!(info.sheets.is_empty());
    }
}
