use crate::format::number::compact;

/// Render a named matrix with right-aligned columns:
///
/// ```text
/// A = [ 2   1 ]
///     [ 1  -1 ]
/// ```
pub fn format_matrix(name: &str, rows: &[Vec<f64>]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|v| compact(*v)).collect())
        .collect();
    let columns = cells.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            cells
                .iter()
                .filter_map(|row| row.get(c))
                .map(String::len)
                .max()
                .unwrap_or(0)
        })
        .collect();

    let label = format!("{name} = ");
    let indent = " ".repeat(label.len());
    cells
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let body = row
                .iter()
                .zip(widths.iter())
                .map(|(cell, &width)| format!("{cell:>width$}"))
                .collect::<Vec<_>>()
                .join("  ");
            let prefix = if i == 0 { &label } else { &indent };
            format!("{prefix}[ {body} ]")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligns_columns_and_indents_rows() {
        let text = format_matrix("A", &[vec![2.0, 1.0], vec![1.0, -1.0]]);
        assert_eq!(text, "A = [ 2   1 ]\n    [ 1  -1 ]");
    }

    #[test]
    fn renders_column_vectors() {
        let text = format_matrix("B", &[vec![5.0], vec![10.0]]);
        assert_eq!(text, "B = [  5 ]\n    [ 10 ]");
    }
}
