use crate::report::{ReportTable, RowLabel, format_value};

/// Render the export table as comma-separated text: a metric section headed
/// `Department,Metric,Value`, a blank line, then a weight section headed
/// `Department,Weight`. Metric names are always quoted (they may contain
/// commas); the `Average` literal and department names are not.
pub fn render_csv(table: &ReportTable) -> String {
    let mut out = String::new();
    out.push_str("Department,Metric,Value\n");
    for row in &table.metric_rows {
        match &row.label {
            RowLabel::Average => {
                out.push_str(&format!(
                    "{},Average,{}\n",
                    row.department,
                    format_value(row.value)
                ));
            }
            RowLabel::Metric(name) => {
                out.push_str(&format!(
                    "{},{},{}\n",
                    row.department,
                    quote(name),
                    format_value(row.value)
                ));
            }
        }
    }

    out.push('\n');
    out.push_str("Department,Weight\n");
    for row in &table.weight_rows {
        out.push_str(&format!("{},{}\n", row.department, format_value(row.weight)));
    }
    out
}

fn quote(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/csv.rs"]
mod tests;
