pub mod d400_overview;
pub mod d401_analytics;
pub mod d402_sales;
pub mod d403_customers;
pub mod d404_customer_report;
pub mod d405_campaigns;
pub mod d406_support;
pub mod d407_revenue;
pub mod d408_growth;
pub mod d409_automation;
pub mod d410_performance;
