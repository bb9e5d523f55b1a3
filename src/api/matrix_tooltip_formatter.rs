use crate::core::MatrixCell;
use crate::render::TooltipText;

/// Title pairs the row and column categories; body reports the raw percentage.
#[must_use]
pub fn format_matrix_tooltip(cell: &MatrixCell) -> TooltipText {
    TooltipText {
        title: format!("{} - {}", cell.row_key, cell.col_key),
        body: format!("Attendance: {}%", cell.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_uses_row_then_column() {
        let tooltip = format_matrix_tooltip(&MatrixCell::new("CR1", "Math", 85.0));
        assert_eq!(tooltip.title, "CR1 - Math");
        assert_eq!(tooltip.body, "Attendance: 85%");
    }

    #[test]
    fn fractional_values_keep_their_precision() {
        let tooltip = format_matrix_tooltip(&MatrixCell::new("CR2", "English", 87.5));
        assert_eq!(tooltip.body, "Attendance: 87.5%");
    }
}
