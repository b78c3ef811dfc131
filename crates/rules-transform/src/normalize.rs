//! Cell presence and multi-value splitting.

use rules_map::Sentinels;
use rules_model::CellValue;

/// Decides whether a cell carries a value under one family's sentinel set.
#[derive(Debug, Clone, Copy)]
pub struct ValueNormalizer<'a> {
    sentinels: &'a Sentinels,
}

impl<'a> ValueNormalizer<'a> {
    pub fn new(sentinels: &'a Sentinels) -> Self {
        Self { sentinels }
    }

    /// Trimmed text of a present cell, `None` when the cell is absent,
    /// blank or a sentinel token.
    pub fn present(&self, cell: &CellValue) -> Option<String> {
        let text = cell.render()?;
        if self.sentinels.is_sentinel(&text) {
            return None;
        }
        Some(text.trim().to_string())
    }

    pub fn is_present(&self, cell: &CellValue) -> bool {
        self.present(cell).is_some()
    }

    /// Splits a present cell on embedded line breaks.
    ///
    /// Parts are trimmed and empty parts dropped. An absent cell yields an
    /// empty list; a present cell always yields at least one value.
    pub fn split_multi_value(&self, cell: &CellValue) -> Vec<String> {
        let Some(text) = self.present(cell) else {
            return Vec::new();
        };
        if !text.contains(['\n', '\r']) {
            return vec![text];
        }
        text.split(['\n', '\r'])
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_and_blanks_are_absent() {
        let sentinels = Sentinels::standard();
        let normalizer = ValueNormalizer::new(&sentinels);
        for cell in [
            CellValue::Absent,
            CellValue::text("*"),
            CellValue::text(" [NULL] "),
            CellValue::text("(null)"),
            CellValue::text("   "),
        ] {
            assert_eq!(normalizer.present(&cell), None, "{cell:?}");
            assert!(normalizer.split_multi_value(&cell).is_empty());
        }
    }

    #[test]
    fn present_values_are_trimmed() {
        let sentinels = Sentinels::standard();
        let normalizer = ValueNormalizer::new(&sentinels);
        assert_eq!(
            normalizer.present(&CellValue::text("  STAT ")),
            Some("STAT".to_string())
        );
        assert_eq!(
            normalizer.present(&CellValue::Number(3.0)),
            Some("3".to_string())
        );
    }

    #[test]
    fn splits_on_line_breaks() {
        let sentinels = Sentinels::standard();
        let normalizer = ValueNormalizer::new(&sentinels);
        assert_eq!(
            normalizer.split_multi_value(&CellValue::text("STAT\r\n URGENT \n\n")),
            vec!["STAT", "URGENT"]
        );
        assert_eq!(
            normalizer.split_multi_value(&CellValue::text("All Clients, NO BUPA")),
            vec!["All Clients, NO BUPA"]
        );
    }
}
