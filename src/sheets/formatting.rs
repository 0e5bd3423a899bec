use super::types::GridBounds;
use google_sheets4::FieldMask;
use google_sheets4::api::{
    AutoResizeDimensionsRequest, BooleanCondition, CellData, CellFormat, Color, ConditionValue,
    DataValidationRule, DimensionRange, GridProperties, GridRange, RepeatCellRequest, Request,
    SetDataValidationRequest, Sheet, SheetProperties, TextFormat, UpdateSheetPropertiesRequest,
};

pub(super) const DEFAULT_ROW_COUNT: i32 = 1000;
pub(super) const DEFAULT_COLUMN_COUNT: i32 = 26;

/// New sheet descriptor sized to the default grid.
pub(super) fn sized_sheet(title: &str) -> Sheet {
    Sheet {
        properties: Some(SheetProperties {
            title: Some(title.to_string()),
            grid_properties: Some(GridProperties {
                row_count: Some(DEFAULT_ROW_COUNT),
                column_count: Some(DEFAULT_COLUMN_COUNT),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Make header row bold on a light gray background.
pub(super) fn header_format_rule(sheet_id: i32) -> Request {
    let light_gray = Color {
        red: Some(0.9),
        green: Some(0.9),
        blue: Some(0.9),
        alpha: None,
    };

    Request {
        repeat_cell: Some(RepeatCellRequest {
            range: Some(GridRange {
                sheet_id: Some(sheet_id),
                start_row_index: Some(0),
                end_row_index: Some(1),
                start_column_index: None,
                end_column_index: None,
            }),
            cell: Some(CellData {
                user_entered_format: Some(CellFormat {
                    text_format: Some(TextFormat {
                        bold: Some(true),
                        ..Default::default()
                    }),
                    background_color: Some(light_gray),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            fields: Some(FieldMask::new(&[
                "userEnteredFormat.textFormat",
                "userEnteredFormat.backgroundColor",
            ])),
        }),
        ..Default::default()
    }
}

/// Freeze header row.
pub(super) fn freeze_header_rule(sheet_id: i32) -> Request {
    Request {
        update_sheet_properties: Some(UpdateSheetPropertiesRequest {
            properties: Some(SheetProperties {
                sheet_id: Some(sheet_id),
                grid_properties: Some(GridProperties {
                    frozen_row_count: Some(1),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            fields: Some(FieldMask::new(&["gridProperties.frozenRowCount"])),
        }),
        ..Default::default()
    }
}

/// Fit column widths to their content for columns `[start_column, end_column)`.
pub(super) fn auto_resize_columns_rule(
    sheet_id: i32,
    start_column: i32,
    end_column: i32,
) -> Request {
    Request {
        auto_resize_dimensions: Some(AutoResizeDimensionsRequest {
            dimensions: Some(DimensionRange {
                sheet_id: Some(sheet_id),
                dimension: Some("COLUMNS".to_string()),
                start_index: Some(start_column),
                end_index: Some(end_column),
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Restrict cells to a fixed list of values, shown as a dropdown.
pub(super) fn dropdown_validation_rule<S: AsRef<str>>(
    sheet_id: i32,
    bounds: GridBounds,
    allowed_values: &[S],
) -> Request {
    let values = allowed_values
        .iter()
        .map(|value| ConditionValue {
            user_entered_value: Some(value.as_ref().to_string()),
            ..Default::default()
        })
        .collect();

    Request {
        set_data_validation: Some(SetDataValidationRequest {
            range: Some(GridRange {
                sheet_id: Some(sheet_id),
                start_row_index: Some(bounds.start_row),
                end_row_index: Some(bounds.end_row),
                start_column_index: Some(bounds.start_column),
                end_column_index: Some(bounds.end_column),
            }),
            rule: Some(DataValidationRule {
                condition: Some(BooleanCondition {
                    type_: Some("ONE_OF_LIST".to_string()),
                    values: Some(values),
                }),
                show_custom_ui: Some(true),
                strict: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sized_sheet() {
        let props = sized_sheet("API Tests").properties.unwrap();
        assert_eq!(props.title.as_deref(), Some("API Tests"));
        let grid = props.grid_properties.unwrap();
        assert_eq!(grid.row_count, Some(1000));
        assert_eq!(grid.column_count, Some(26));
    }

    #[test]
    fn test_header_format_rule() {
        let req = header_format_rule(123);
        let repeat_cell = req.repeat_cell.unwrap();

        let range = repeat_cell.range.unwrap();
        assert_eq!(range.sheet_id, Some(123));
        assert_eq!(range.start_row_index, Some(0));
        assert_eq!(range.end_row_index, Some(1));
        assert_eq!(range.start_column_index, None);

        let format = repeat_cell.cell.unwrap().user_entered_format.unwrap();
        assert!(format.text_format.unwrap().bold.unwrap());
        let background = format.background_color.unwrap();
        assert_eq!(background.red, Some(0.9));
        assert_eq!(background.green, Some(0.9));
        assert_eq!(background.blue, Some(0.9));
        assert!(repeat_cell.fields.is_some());
    }

    #[test]
    fn test_freeze_header_rule() {
        let req = freeze_header_rule(123);
        let update = req.update_sheet_properties.unwrap();
        let props = update.properties.unwrap();
        assert_eq!(props.sheet_id, Some(123));
        assert_eq!(props.grid_properties.unwrap().frozen_row_count, Some(1));
        assert!(update.fields.is_some());
    }

    #[test]
    fn test_auto_resize_columns_rule() {
        let req = auto_resize_columns_rule(9, 0, 5);
        let dimensions = req.auto_resize_dimensions.unwrap().dimensions.unwrap();
        assert_eq!(dimensions.sheet_id, Some(9));
        assert_eq!(dimensions.dimension.as_deref(), Some("COLUMNS"));
        assert_eq!(dimensions.start_index, Some(0));
        assert_eq!(dimensions.end_index, Some(5));
    }

    #[test]
    fn test_dropdown_validation_rule() {
        let bounds = GridBounds {
            start_row: 1,
            end_row: 1000,
            start_column: 1,
            end_column: 2,
        };
        let req = dropdown_validation_rule(5, bounds, &["PASSED", "FAILED"]);
        let validation = req.set_data_validation.unwrap();

        let range = validation.range.unwrap();
        assert_eq!(range.sheet_id, Some(5));
        assert_eq!(range.start_row_index, Some(1));
        assert_eq!(range.end_row_index, Some(1000));
        assert_eq!(range.start_column_index, Some(1));
        assert_eq!(range.end_column_index, Some(2));

        let rule = validation.rule.unwrap();
        assert_eq!(rule.strict, Some(true));
        assert_eq!(rule.show_custom_ui, Some(true));

        let condition = rule.condition.unwrap();
        assert_eq!(condition.type_.as_deref(), Some("ONE_OF_LIST"));
        let values: Vec<_> = condition
            .values
            .unwrap()
            .into_iter()
            .map(|v| v.user_entered_value.unwrap())
            .collect();
        assert_eq!(values, vec!["PASSED", "FAILED"]);
    }
}
