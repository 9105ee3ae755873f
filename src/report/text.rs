use crate::catalog::ALL_DEPARTMENTS;
use crate::report::format_value;
use crate::session::Session;

/// Human-readable companion to the CSV export.
#[derive(Debug, Clone)]
pub struct SummaryContext {
    pub ceo_index: f64,
    pub total_weight: f64,
    pub departments: Vec<DepartmentLine>,
}

#[derive(Debug, Clone)]
pub struct DepartmentLine {
    pub name: &'static str,
    pub average: f64,
    pub weight: f64,
}

impl SummaryContext {
    pub fn from_session(session: &Session) -> Self {
        let averages = session.averages();
        let departments = ALL_DEPARTMENTS
            .iter()
            .map(|dept| DepartmentLine {
                name: dept.name(),
                average: averages.get(dept).copied().unwrap_or(0.0),
                weight: session.weights.weight(*dept),
            })
            .collect();
        Self {
            ceo_index: session.ceo_index(),
            total_weight: session.weights.total_weight(),
            departments,
        }
    }
}

pub fn render_summary_text(ctx: &SummaryContext) -> String {
    let mut out = String::new();

    out.push_str("CEO KRA/KPI Index Report\n");
    out.push_str("========================\n\n");

    out.push_str(&format!("CEO Index: {}%\n", format_value(ctx.ceo_index.round())));
    out.push_str(&format!(
        "Total Weight: {}%\n",
        format_value(ctx.total_weight)
    ));
    if ctx.total_weight != 100.0 {
        out.push_str(
            "Note: total weight differs from 100%; the index renormalizes against the current total.\n",
        );
    }
    out.push('\n');

    out.push_str("Department scores\n");
    for line in &ctx.departments {
        out.push_str(&format!(
            "{}: average {}, weight {}\n",
            line.name,
            format_value(line.average),
            format_value(line.weight)
        ));
    }

    out
}
