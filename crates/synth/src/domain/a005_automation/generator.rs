use contracts::domain::a005_automation::{
    ActivityStatus, Automation, AutomationActivity, AutomationStatus,
};
use rand::Rng;

use crate::shared::context::GenContext;

/// Automations generated per request.
pub const POPULATION: usize = 50;

/// Entries in the recent activity feed.
pub const ACTIVITY_FEED: usize = 10;

const ACTIVITY_SUCCESS_RATE: f64 = 0.8;

/// `count` automations with ids `AUT00001..`, created within the last 90 days.
pub fn generate_automations<R: Rng>(ctx: &mut GenContext<R>, count: usize) -> Vec<Automation> {
    (1..=count)
        .map(|ordinal| generate_automation(ctx, ordinal))
        .collect()
}

fn generate_automation<R: Rng>(ctx: &mut GenContext<R>, ordinal: usize) -> Automation {
    let automation_type = ctx.pick();
    let status: AutomationStatus = ctx.pick();
    let triggers = ctx.count(1, 5);
    let actions = ctx.count(2, 8);
    let active = status == AutomationStatus::Active;

    let (executions, success_rate, last_run) = if active {
        (
            u64::from(ctx.count(100, 900)),
            ctx.spread(85.0, 15.0),
            Some(ctx.ago(1.0)),
        )
    } else {
        (0, 0.0, None)
    };

    Automation {
        id: format!("AUT{:05}", ordinal),
        name: format!("Automation {}", ordinal),
        automation_type,
        status,
        triggers,
        actions,
        executions,
        success_rate,
        last_run,
        created: ctx.ago(90.0),
    }
}

/// Recent executions of automations drawn from `automations`, newest first.
///
/// An empty pool gives an empty feed.
pub fn generate_activity<R: Rng>(
    ctx: &mut GenContext<R>,
    count: usize,
    automations: &[Automation],
) -> Vec<AutomationActivity> {
    let mut feed: Vec<AutomationActivity> = (1..=count)
        .filter_map(|ordinal| {
            let automation = ctx.choose(automations)?;
            let status = if ctx.chance(ACTIVITY_SUCCESS_RATE) {
                ActivityStatus::Success
            } else {
                ActivityStatus::Failed
            };
            let details = match status {
                ActivityStatus::Success => format!("{} executed successfully", automation.name),
                ActivityStatus::Failed => format!("{} failed, retry scheduled", automation.name),
            };
            Some(AutomationActivity {
                id: format!("ACT{:05}", ordinal),
                automation_id: automation.id.clone(),
                activity_type: automation.automation_type,
                status,
                timestamp: ctx.ago(1.0),
                details,
            })
        })
        .collect();

    feed.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    feed
}
