//! Layout of the derived-price transformation.
//!
//! Every position the pipeline touches is a named constant here instead of a
//! magic coordinate in the loop. [`TransformConfig::default`] reproduces the
//! stock layout; [`ConfigPatch`] overrides individual fields.

/// Sheet the transformation operates on.
pub const SHEET_NAME: &str = "Sheet1";
/// Column holding the source prices (C).
pub const SOURCE_COLUMN: u32 = 3;
/// Column receiving the derived prices (D).
pub const DERIVED_COLUMN: u32 = 4;
/// Row holding the column headers.
pub const HEADER_ROW: u32 = 1;
/// First row holding data.
pub const FIRST_DATA_ROW: u32 = 2;
/// Header written above the derived column.
pub const HEADER_LABEL: &str = "New Price";
/// Factor applied to each source price.
pub const PRICE_MULTIPLIER: f64 = 3.0;
/// Top-left cell of the embedded chart (E2), as (column, row).
pub const CHART_ANCHOR: (u32, u32) = (5, 2);
/// Extent of the embedded chart, as (columns, rows).
pub const CHART_SPAN: (u32, u32) = (7, 15);

#[derive(Debug, Clone, PartialEq)]
pub struct TransformConfig {
    pub sheet_name: String,
    pub source_column: u32,
    pub derived_column: u32,
    pub header_row: u32,
    pub first_data_row: u32,
    pub header_label: String,
    pub multiplier: f64,
    pub chart_anchor: (u32, u32),
    pub chart_span: (u32, u32),
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            sheet_name: SHEET_NAME.to_string(),
            source_column: SOURCE_COLUMN,
            derived_column: DERIVED_COLUMN,
            header_row: HEADER_ROW,
            first_data_row: FIRST_DATA_ROW,
            header_label: HEADER_LABEL.to_string(),
            multiplier: PRICE_MULTIPLIER,
            chart_anchor: CHART_ANCHOR,
            chart_span: CHART_SPAN,
        }
    }
}

/// Partial override of [`TransformConfig`].
///
/// Only fields that are `Some` are applied; absent fields keep their current
/// value, so an empty patch is a no-op.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigPatch {
    pub sheet_name: Option<String>,
    pub source_column: Option<u32>,
    pub derived_column: Option<u32>,
    pub header_row: Option<u32>,
    pub first_data_row: Option<u32>,
    pub header_label: Option<String>,
    pub multiplier: Option<f64>,
    pub chart_anchor: Option<(u32, u32)>,
    pub chart_span: Option<(u32, u32)>,
}

impl TransformConfig {
    /// Applies `patch` field by field.
    pub fn apply(&mut self, patch: ConfigPatch) {
        if let Some(v) = patch.sheet_name {
            self.sheet_name = v;
        }
        if let Some(v) = patch.source_column {
            self.source_column = v;
        }
        if let Some(v) = patch.derived_column {
            self.derived_column = v;
        }
        if let Some(v) = patch.header_row {
            self.header_row = v;
        }
        if let Some(v) = patch.first_data_row {
            self.first_data_row = v;
        }
        if let Some(v) = patch.header_label {
            self.header_label = v;
        }
        if let Some(v) = patch.multiplier {
            self.multiplier = v;
        }
        if let Some(v) = patch.chart_anchor {
            self.chart_anchor = v;
        }
        if let Some(v) = patch.chart_span {
            self.chart_span = v;
        }
    }

    /// By-value form of [`apply`](Self::apply) for building a config inline.
    pub fn patched(mut self, patch: ConfigPatch) -> Self {
        self.apply(patch);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_constants() {
        let cfg = TransformConfig::default();
        assert_eq!(cfg.sheet_name, SHEET_NAME);
        assert_eq!(cfg.source_column, SOURCE_COLUMN);
        assert_eq!(cfg.derived_column, DERIVED_COLUMN);
        assert_eq!(cfg.header_row, HEADER_ROW);
        assert_eq!(cfg.first_data_row, FIRST_DATA_ROW);
        assert_eq!(cfg.header_label, HEADER_LABEL);
        assert_eq!(cfg.multiplier, PRICE_MULTIPLIER);
        assert_eq!(cfg.chart_anchor, CHART_ANCHOR);
        assert_eq!(cfg.chart_span, CHART_SPAN);
    }

    #[test]
    fn patch_overrides_only_present_fields() {
        let mut cfg = TransformConfig::default();
        cfg.apply(ConfigPatch {
            multiplier: Some(2.0),
            header_label: Some("Double".to_string()),
            ..ConfigPatch::default()
        });

        assert_eq!(cfg.multiplier, 2.0);
        assert_eq!(cfg.header_label, "Double");
        assert_eq!(cfg.sheet_name, SHEET_NAME);
        assert_eq!(cfg.source_column, SOURCE_COLUMN);
        assert_eq!(cfg.derived_column, DERIVED_COLUMN);
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let cfg = TransformConfig::default();
        assert_eq!(cfg.clone().patched(ConfigPatch::default()), cfg);
    }

    #[test]
    fn patch_can_relocate_every_position() {
        let cfg = TransformConfig::default().patched(ConfigPatch {
            sheet_name: Some("Prices".to_string()),
            source_column: Some(2),
            derived_column: Some(6),
            header_row: Some(3),
            first_data_row: Some(4),
            header_label: Some("Adjusted".to_string()),
            multiplier: Some(1.5),
            chart_anchor: Some((8, 4)),
            chart_span: Some((5, 10)),
        });

        assert_eq!(cfg.sheet_name, "Prices");
        assert_eq!(cfg.source_column, 2);
        assert_eq!(cfg.derived_column, 6);
        assert_eq!(cfg.header_row, 3);
        assert_eq!(cfg.first_data_row, 4);
        assert_eq!(cfg.header_label, "Adjusted");
        assert_eq!(cfg.multiplier, 1.5);
        assert_eq!(cfg.chart_anchor, (8, 4));
        assert_eq!(cfg.chart_span, (5, 10));
    }
}
