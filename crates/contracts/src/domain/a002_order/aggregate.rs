use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

categorical! {
    pub enum OrderStatus {
        Completed => "Completed",
        Pending => "Pending",
        Processing => "Processing",
        Refunded => "Refunded",
    }
}

categorical! {
    pub enum ProductCategory {
        Electronics => "Electronics",
        Clothing => "Clothing",
        FoodBeverage => "Food & Beverage",
        HomeGarden => "Home & Garden",
        Books => "Books",
    }
}

categorical! {
    pub enum PaymentMethod {
        CreditCard => "Credit Card",
        PayPal => "PayPal",
        BankTransfer => "Bank Transfer",
        Crypto => "Crypto",
    }
}

/// Sales order, id `ORD00001`.
/// `total == subtotal + tax + shipping`, tax is 10% of the subtotal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub status: OrderStatus,
    pub category: ProductCategory,
    pub payment_method: PaymentMethod,
    pub items: u32,
    pub subtotal: f64,
    pub tax: f64,
    pub shipping: f64,
    pub total: f64,
    pub date: DateTime<Utc>,
}

impl Order {
    pub fn is_completed(&self) -> bool {
        self.status == OrderStatus::Completed
    }
}
