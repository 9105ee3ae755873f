#[derive(Debug, Clone, Copy)]
pub struct MetricDef {
    pub name: &'static str,
    pub inverse: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct DepartmentDef {
    pub name: &'static str,
    pub metrics: &'static [MetricDef],
}

const fn metric(name: &'static str) -> MetricDef {
    MetricDef {
        name,
        inverse: false,
    }
}

const fn inverse_metric(name: &'static str) -> MetricDef {
    MetricDef {
        name,
        inverse: true,
    }
}

const SALES_METRICS: &[MetricDef] = &[
    metric("New Client Acquisition"),
    metric("Revenue from New Matters"),
    metric("Deal Conversion Rate"),
    metric("Average Deal Size"),
    metric("Client Retention %"),
];

const MARKETING_METRICS: &[MetricDef] = &[
    metric("Qualified Leads Generated"),
    metric("Content & Thought Leadership"),
    metric("SEO Ranking Performance"),
    metric("Brand Visibility Index"),
    metric("Cost per Lead (Efficiency)"),
];

const OPERATIONS_METRICS: &[MetricDef] = &[
    metric("Matter Turnaround Time"),
    metric("Process Compliance Rate"),
    metric("Technology Utilization"),
    inverse_metric("Error/Defect Rate (Low=Good)"),
    metric("Client Satisfaction in Delivery"),
];

const LEGAL_METRICS: &[MetricDef] = &[
    metric("Success Rate in Matters"),
    metric("Timeliness of Filings"),
    metric("Quality Review Score"),
    metric("High-value Case Wins"),
    metric("KM/Precedent Contributions"),
];

const PEOPLE_DEVELOPMENT_METRICS: &[MetricDef] = &[
    inverse_metric("Attrition (Low=Good)"),
    metric("Training Hours / Associate"),
    metric("Performance Reviews on Time"),
    metric("Engagement Index"),
    metric("Hiring Effectiveness"),
];

const ACCOUNTS_FINANCE_METRICS: &[MetricDef] = &[
    metric("Revenue Growth Rate"),
    metric("Collection Efficiency (DSO)"),
    inverse_metric("Expense Ratio (Low=Good)"),
    metric("Net Profit Margin"),
    metric("Cash Reserve Months"),
];

const CATALOG: &[DepartmentDef] = &[
    DepartmentDef {
        name: "Sales",
        metrics: SALES_METRICS,
    },
    DepartmentDef {
        name: "Marketing",
        metrics: MARKETING_METRICS,
    },
    DepartmentDef {
        name: "Operations",
        metrics: OPERATIONS_METRICS,
    },
    DepartmentDef {
        name: "Legal",
        metrics: LEGAL_METRICS,
    },
    DepartmentDef {
        name: "People Development",
        metrics: PEOPLE_DEVELOPMENT_METRICS,
    },
    DepartmentDef {
        name: "Accounts & Finance",
        metrics: ACCOUNTS_FINANCE_METRICS,
    },
];

pub fn catalog() -> &'static [DepartmentDef] {
    CATALOG
}

/// Seed value every catalog metric starts a session with.
pub const SEED_VALUE: f64 = 60.0;
