//! Static KPI cards

/// A headline figure shown as a badge above its caption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kpi {
    pub value: &'static str,
    pub label: &'static str,
}

impl Kpi {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

pub const OVERVIEW_KPIS: &[Kpi] = &[
    Kpi::new("$1.2M", "TOTAL REVENUE"),
    Kpi::new("450", "TOTAL ORDERS"),
    Kpi::new("85%", "GROWTH RATE"),
];

pub const OPERATIONS_KPIS: &[Kpi] = &[
    Kpi::new("4.2", "INVENTORY TURNOVER RATIO"),
    Kpi::new("2.5 Days", "AVERAGE DELIVERY TIME"),
];
