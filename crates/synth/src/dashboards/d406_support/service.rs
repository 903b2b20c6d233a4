use contracts::dashboards::d406_support::{
    CategoryShare, PriorityCount, SatisfactionData, StatusCount, SupportDataset, SupportFilters,
    SupportOverview, SupportRequest,
};
use contracts::domain::a003_ticket::{Ticket, TicketCategory, TicketPriority, TicketStatus};
use contracts::enums::Categorical;
use contracts::shared::{Metric, RatingCount};
use rand::Rng;

use crate::domain::a003_ticket::{generate_tickets, POPULATION};
use crate::shared::aggregate::{
    average_by, count_where, distribution, rating_average, rating_histogram, satisfied_share,
};
use crate::shared::context::GenContext;
use crate::shared::filter::{allows, filter, select, Criteria};
use crate::shared::time_window::{resolve, WindowProfile};

const TOTAL_TREND: f64 = 5.2;
const OPEN_TREND: f64 = -2.8;
const RESPONSE_TREND: f64 = -8.4;
const SATISFACTION_TREND: f64 = 3.2;

impl Criteria<Ticket> for SupportFilters {
    fn accepts(&self, ticket: &Ticket) -> bool {
        allows(&self.category, &ticket.category)
            && allows(&self.priority, &ticket.priority)
            && allows(&self.status, &ticket.status)
    }
}

/// Support desk: every count and rating is derived from the filtered tickets.
pub fn assemble<R: Rng>(request: &SupportRequest, ctx: &mut GenContext<R>) -> SupportDataset {
    let window = resolve(
        request.time_range,
        &request.date_range,
        WindowProfile::Daily,
        ctx.now(),
    );
    let filters = &request.filters;
    let population = generate_tickets(ctx, POPULATION);
    let mut tickets = filter(&population, filters);
    tickets.sort_by(|a, b| b.created.cmp(&a.created));

    let ratings = rating_histogram(tickets.iter().filter_map(|t| t.satisfaction_rating));
    let overview = overview(&tickets, &ratings);

    let tickets_by_status = distribution(
        &tickets,
        &select(TicketStatus::ALL, &filters.status),
        |t| t.status,
    )
    .into_iter()
    .map(|entry| StatusCount {
        status: entry.key,
        count: entry.count,
    })
    .collect();
    let tickets_by_priority = distribution(
        &tickets,
        &select(TicketPriority::ALL, &filters.priority),
        |t| t.priority,
    )
    .into_iter()
    .map(|entry| PriorityCount {
        priority: entry.key,
        count: entry.count,
    })
    .collect();
    let categories_distribution = distribution(
        &tickets,
        &select(TicketCategory::ALL, &filters.category),
        |t| t.category,
    )
    .into_iter()
    .map(|entry| CategoryShare {
        category: entry.key,
        count: entry.count,
        percentage: entry.percentage,
    })
    .collect();

    let satisfaction = SatisfactionData {
        timeline: ctx.series(90.0, 10.0, &window),
        average_rating: rating_average(&ratings),
        ratings,
    };

    tracing::debug!(
        population = population.len(),
        tickets = tickets.len(),
        "assembled support dataset"
    );

    SupportDataset {
        overview,
        tickets_by_status,
        tickets_by_priority,
        recent_tickets: tickets,
        ticket_volume: ctx.series(100.0, 30.0, &window),
        response_time: ctx.series(2.5, 1.0, &window),
        categories_distribution,
        satisfaction,
    }
}

fn overview(tickets: &[Ticket], ratings: &[RatingCount]) -> SupportOverview {
    SupportOverview {
        total_tickets: Metric::new(tickets.len() as f64, TOTAL_TREND),
        open_tickets: Metric::new(
            count_where(tickets, |t| t.status.is_open()) as f64,
            OPEN_TREND,
        ),
        avg_response_time: Metric::new(average_by(tickets, |t| t.response_hours), RESPONSE_TREND),
        satisfaction_score: Metric::new(satisfied_share(ratings), SATISFACTION_TREND),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{key_paths, seeded};
    use contracts::shared::TimeRange;

    #[test]
    fn test_counts_come_from_tickets() {
        let dataset = assemble(&SupportRequest::new(TimeRange::Last30Days), &mut seeded(141));
        let tickets = &dataset.recent_tickets;

        assert_eq!(tickets.len(), POPULATION);
        let by_status: usize = dataset.tickets_by_status.iter().map(|s| s.count).sum();
        let by_priority: usize = dataset.tickets_by_priority.iter().map(|s| s.count).sum();
        assert_eq!((by_status, by_priority), (tickets.len(), tickets.len()));
        assert_eq!(
            dataset.overview.open_tickets.value,
            tickets.iter().filter(|t| t.status.is_open()).count() as f64
        );

        let rated = tickets.iter().filter(|t| t.satisfaction_rating.is_some()).count() as u64;
        let histogram: u64 = dataset.satisfaction.ratings.iter().map(|r| r.count).sum();
        assert_eq!(histogram, rated);

        let share: f64 = dataset.categories_distribution.iter().map(|c| c.percentage).sum();
        assert!((share - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_open_status_filter_has_no_ratings() {
        let filters = SupportFilters {
            status: vec![TicketStatus::Open, TicketStatus::Waiting],
            ..SupportFilters::default()
        };
        let dataset = assemble(
            &SupportRequest::with_filters(TimeRange::Last7Days, filters),
            &mut seeded(142),
        );

        assert_eq!(dataset.tickets_by_status.len(), 2);
        assert!(dataset.recent_tickets.iter().all(|t| t.status.is_open()));
        assert_eq!(dataset.overview.open_tickets.value, dataset.recent_tickets.len() as f64);
        assert_eq!(dataset.satisfaction.average_rating, 0.0);
        assert_eq!(dataset.overview.satisfaction_score.value, 0.0);
    }

    #[test]
    fn test_shape_is_stable_across_calls() {
        let request = SupportRequest::new(TimeRange::Last7Days);
        let first = serde_json::to_value(assemble(&request, &mut seeded(143)));
        let second = serde_json::to_value(assemble(&request, &mut seeded(144)));
        match (first, second) {
            (Ok(a), Ok(b)) => assert_eq!(key_paths(&a), key_paths(&b)),
            _ => panic!("support dataset must serialize"),
        }
    }
}
