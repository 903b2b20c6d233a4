//! Catalogue dimensions that are not owned by a generated entity: traffic
//! channels, plans, regions, devices and so on.

categorical! {
    /// Company segments on the main dashboard.
    pub enum BusinessSegment {
        Enterprise => "Enterprise",
        Smb => "SMB",
        Startup => "Startup",
    }
}

categorical! {
    pub enum ProductFeature {
        Dashboard => "Dashboard",
        Analytics => "Analytics",
        Reports => "Reports",
        ApiAccess => "API Access",
        Integrations => "Integrations",
    }
}

categorical! {
    /// Web analytics acquisition channels.
    pub enum TrafficSource {
        Direct => "Direct",
        OrganicSearch => "Organic Search",
        Referral => "Referral",
        Social => "Social",
        Email => "Email",
    }
}

categorical! {
    pub enum UserSegment {
        NewUsers => "New Users",
        Returning => "Returning",
        Inactive => "Inactive",
    }
}

categorical! {
    /// Marketing channels on the growth dashboard.
    pub enum GrowthChannel {
        Organic => "Organic",
        PaidSearch => "Paid Search",
        SocialMedia => "Social Media",
        Email => "Email",
        Referral => "Referral",
    }
}

categorical! {
    /// Headline growth metrics, keyed by their short wire names.
    pub enum GrowthMetric {
        Mrr => "mrr",
        Arr => "arr",
        GrowthRate => "growthRate",
        Cac => "cac",
    }
}

categorical! {
    pub enum RevenueProduct {
        BasicPlan => "Basic Plan",
        ProPlan => "Pro Plan",
        EnterprisePlan => "Enterprise Plan",
        AddOnServices => "Add-on Services",
        CustomSolutions => "Custom Solutions",
    }
}

categorical! {
    pub enum SalesRegion {
        NorthAmerica => "North America",
        Europe => "Europe",
        AsiaPacific => "Asia Pacific",
        LatinAmerica => "Latin America",
        AfricaMiddleEast => "Africa & ME",
    }
}

categorical! {
    /// Customer company size used by revenue and customer reports.
    pub enum CompanySize {
        Enterprise => "Enterprise",
        MidMarket => "Mid-Market",
        Smb => "SMB",
        Startup => "Startup",
    }
}

categorical! {
    /// Hosting regions on the live performance page.
    pub enum ServerRegion {
        NorthAmerica => "North America",
        Europe => "Europe",
        Asia => "Asia",
        Oceania => "Oceania",
    }
}

categorical! {
    pub enum ApiEndpoint {
        Users => "/api/users",
        Products => "/api/products",
        Orders => "/api/orders",
        Analytics => "/api/analytics",
    }
}

categorical! {
    pub enum ErrorKind {
        ServerError => "5xx",
        ClientError => "4xx",
        Network => "Network",
        Api => "API",
    }
}

categorical! {
    pub enum Device {
        Mobile => "Mobile",
        Desktop => "Desktop",
        Tablet => "Tablet",
    }
}

categorical! {
    pub enum AcquisitionChannel {
        OrganicSearch => "Organic Search",
        Direct => "Direct",
        Referral => "Referral",
        Social => "Social",
        PaidSearch => "Paid Search",
    }
}
