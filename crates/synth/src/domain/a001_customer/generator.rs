use contracts::domain::a001_customer::{Country, Customer, CustomerSegment, CustomerStatus};
use rand::Rng;

use crate::shared::context::GenContext;

/// Customers generated per request.
pub const POPULATION: usize = 100;

/// `count` customers with ids `CUS00001..`.
pub fn generate_customers<R: Rng>(ctx: &mut GenContext<R>, count: usize) -> Vec<Customer> {
    (1..=count).map(|ordinal| generate_customer(ctx, ordinal)).collect()
}

fn generate_customer<R: Rng>(ctx: &mut GenContext<R>, ordinal: usize) -> Customer {
    let segment: CustomerSegment = ctx.pick();
    let status: CustomerStatus = ctx.pick();
    let country: Country = ctx.pick();
    let join_date = ctx.whole_days_ago(365);

    let (total_spent, last_purchase, orders_count, average_order_value) =
        if status == CustomerStatus::Active {
            (
                ctx.whole(1000.0, 9000.0),
                Some(ctx.whole_days_ago(30)),
                ctx.count(5, 20),
                ctx.whole(100.0, 400.0),
            )
        } else {
            (0.0, None, 0, 0.0)
        };

    Customer {
        id: format!("CUS{:05}", ordinal),
        name: format!("Customer {}", ordinal),
        email: format!("customer{}@example.com", ordinal),
        status,
        segment,
        country,
        total_spent,
        last_purchase,
        join_date,
        orders_count,
        average_order_value,
    }
}
