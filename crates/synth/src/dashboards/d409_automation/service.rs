use contracts::dashboards::d409_automation::{
    AutomationDataset, AutomationFilters, AutomationOverview, AutomationPerformance,
    AutomationRequest, TypeErrorRate,
};
use contracts::domain::a005_automation::{Automation, AutomationType};
use contracts::enums::Categorical;
use contracts::shared::{HistoryMetric, Metric, Series, TimeWindow};
use rand::Rng;

use crate::domain::a005_automation::{
    generate_activity, generate_automations, ACTIVITY_FEED, POPULATION,
};
use crate::shared::aggregate::{average_by, count_where, sum_by, trend};
use crate::shared::context::GenContext;
use crate::shared::filter::{allows, filter, select, Criteria};
use crate::shared::time_window::{resolve, WindowProfile};

const SUCCESS_RATE_TREND: f64 = 2.1;
const EXECUTIONS_TREND: f64 = 15.4;

impl Criteria<Automation> for AutomationFilters {
    fn accepts(&self, automation: &Automation) -> bool {
        allows(&self.status, &automation.status)
            && allows(&self.automation_type, &automation.automation_type)
    }
}

/// Automation dashboard; the activity feed only references automations that
/// passed the filters.
pub fn assemble<R: Rng>(request: &AutomationRequest, ctx: &mut GenContext<R>) -> AutomationDataset {
    let window = resolve(
        request.time_range,
        &request.date_range,
        WindowProfile::Daily,
        ctx.now(),
    );
    let population = generate_automations(ctx, POPULATION);
    let automations = filter(&population, &request.filters);

    let history = ctx.series(50.0, 10.0, &window);
    let overview = overview(&automations, &window, history);
    let performance = AutomationPerformance {
        executions_over_time: ctx.series(1_000.0, 200.0, &window),
        success_rate_over_time: ctx.series(95.0, 5.0, &window),
        error_rate_by_type: select(AutomationType::ALL, &request.filters.automation_type)
            .into_iter()
            .map(|automation_type| TypeErrorRate {
                automation_type,
                error_rate: ctx.spread(0.0, 10.0),
                total: ctx.count(1_000, 9_000),
            })
            .collect(),
    };
    let recent_activity = generate_activity(ctx, ACTIVITY_FEED, &automations);

    tracing::debug!(
        population = population.len(),
        automations = automations.len(),
        "assembled automation dataset"
    );

    AutomationDataset {
        overview,
        performance,
        automations,
        recent_activity,
    }
}

/// Counts are compared with how many of the same automations already existed
/// when the window opened.
fn overview(automations: &[Automation], window: &TimeWindow, history: Series) -> AutomationOverview {
    let active: Vec<&Automation> = automations.iter().filter(|a| a.is_active()).collect();

    let total = automations.len() as f64;
    let total_before = count_where(automations, |a| a.created < window.start) as f64;
    let active_total = active.len() as f64;
    let active_before = count_where(&active, |a| a.created < window.start) as f64;

    AutomationOverview {
        total_automations: HistoryMetric {
            value: total,
            trend: trend(total, total_before),
            history,
        },
        active_automations: Metric::new(active_total, trend(active_total, active_before)),
        success_rate: Metric::new(average_by(&active, |a| a.success_rate), SUCCESS_RATE_TREND),
        total_executions: Metric::new(
            sum_by(automations, |a| a.executions as f64),
            EXECUTIONS_TREND,
        ),
    }
}
