use contracts::domain::a002_order::Order;
use rand::Rng;

use crate::shared::context::GenContext;

/// Orders generated per request.
pub const POPULATION: usize = 100;

const TAX_RATE: f64 = 0.1;

/// `count` orders with ids `ORD00001..`, dated within the last 30 days.
pub fn generate_orders<R: Rng>(ctx: &mut GenContext<R>, count: usize) -> Vec<Order> {
    (1..=count).map(|ordinal| generate_order(ctx, ordinal)).collect()
}

fn generate_order<R: Rng>(ctx: &mut GenContext<R>, ordinal: usize) -> Order {
    let status = ctx.pick();
    let category = ctx.pick();
    let payment_method = ctx.pick();
    let subtotal = ctx.spread(50.0, 450.0);
    let tax = subtotal * TAX_RATE;
    let shipping = ctx.spread(10.0, 20.0);

    Order {
        id: format!("ORD{:05}", ordinal),
        customer_name: format!("Customer {}", ordinal),
        status,
        category,
        payment_method,
        items: ctx.count(1, 5),
        subtotal,
        tax,
        shipping,
        total: subtotal + tax + shipping,
        date: ctx.whole_days_ago(30),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::seeded;

    #[test]
    fn test_totals_add_up() {
        let orders = generate_orders(&mut seeded(51), POPULATION);
        assert_eq!(orders[41].id, "ORD00042");
        for order in &orders {
            assert!((order.total - (order.subtotal + order.tax + order.shipping)).abs() < 1e-9);
            assert!((order.tax - order.subtotal * 0.1).abs() < 1e-9);
            assert!((1..6).contains(&order.items));
            assert!(order.subtotal >= 50.0 && order.subtotal < 500.0);
        }
    }
}
