categorical! {
    /// Every dashboard page that has a dataset assembler.
    pub enum DashboardKind {
        Overview => "overview",
        Analytics => "analytics",
        Sales => "sales",
        Customers => "customers",
        CustomerReport => "customer-report",
        Campaigns => "campaigns",
        Support => "support",
        Revenue => "revenue",
        Growth => "growth",
        Automation => "automation",
        Performance => "performance",
    }
}

impl std::str::FromStr for DashboardKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as crate::enums::Categorical>::from_label(s)
            .ok_or_else(|| format!("unknown dashboard: {s}"))
    }
}
