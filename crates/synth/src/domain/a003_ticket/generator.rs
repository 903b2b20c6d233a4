use contracts::domain::a003_ticket::{Ticket, TicketStatus};
use rand::Rng;

use crate::shared::context::GenContext;

/// Tickets generated per request.
pub const POPULATION: usize = 50;

/// Star ratings weighted like a healthy support desk: mostly fives.
const RATING_WEIGHTS: [(u8, f64); 5] = [(5, 456.0), (4, 234.0), (3, 89.0), (2, 34.0), (1, 12.0)];

/// `count` tickets with ids `TKT-00001..`, created within the last week.
pub fn generate_tickets<R: Rng>(ctx: &mut GenContext<R>, count: usize) -> Vec<Ticket> {
    (1..=count).map(|ordinal| generate_ticket(ctx, ordinal)).collect()
}

fn generate_ticket<R: Rng>(ctx: &mut GenContext<R>, ordinal: usize) -> Ticket {
    let status: TicketStatus = ctx.pick();
    let priority = ctx.pick();
    let category = ctx.pick();
    let created = ctx.ago(7.0);
    let last_updated = ctx.ago(2.0).max(created);
    let response_hours = ctx.spread(0.5, 5.5);
    let satisfaction_rating = match status {
        TicketStatus::Resolved | TicketStatus::Closed => Some(draw_rating(ctx)),
        _ => None,
    };

    Ticket {
        id: format!("TKT-{:05}", ordinal),
        subject: format!("Support Ticket {}", ordinal),
        customer: format!("Customer {}", ordinal),
        status,
        priority,
        category,
        response_hours,
        satisfaction_rating,
        created,
        last_updated,
    }
}

fn draw_rating<R: Rng>(ctx: &mut GenContext<R>) -> u8 {
    let total: f64 = RATING_WEIGHTS.iter().map(|(_, weight)| weight).sum();
    let mut roll = ctx.unit() * total;
    for (rating, weight) in RATING_WEIGHTS {
        if roll < weight {
            return rating;
        }
        roll -= weight;
    }
    1
}
