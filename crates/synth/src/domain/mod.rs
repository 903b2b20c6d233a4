pub mod a001_customer;
pub mod a002_order;
pub mod a003_ticket;
pub mod a004_campaign;
pub mod a005_automation;
