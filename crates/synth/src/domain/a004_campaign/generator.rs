use contracts::domain::a004_campaign::{Campaign, CampaignStatus};
use contracts::shared::TimeWindow;
use rand::Rng;

use crate::shared::context::GenContext;

/// Campaigns generated per request.
pub const POPULATION: usize = 10;

/// `count` campaigns with ids `CAM001..`.
///
/// Active campaigns get spend, reach and a daily performance series over
/// `window`; every other status stays at zero.
pub fn generate_campaigns<R: Rng>(
    ctx: &mut GenContext<R>,
    count: usize,
    window: &TimeWindow,
) -> Vec<Campaign> {
    (1..=count)
        .map(|ordinal| generate_campaign(ctx, ordinal, window))
        .collect()
}

fn generate_campaign<R: Rng>(
    ctx: &mut GenContext<R>,
    ordinal: usize,
    window: &TimeWindow,
) -> Campaign {
    let campaign_type = ctx.pick();
    let status: CampaignStatus = ctx.pick();
    let budget = ctx.whole(3000.0, 7000.0);

    let mut campaign = Campaign {
        id: format!("CAM{:03}", ordinal),
        name: format!("Campaign {}", ordinal),
        campaign_type,
        status,
        budget,
        spent: 0.0,
        reach: 0,
        conversions: 0,
        roi: 0.0,
        start_date: None,
        end_date: None,
        performance: Vec::new(),
    };

    if campaign.is_active() {
        campaign.spent = budget * ctx.spread(0.3, 0.5);
        campaign.reach = (budget * ctx.spread(5.0, 5.0)).floor() as u64;
        campaign.conversions = (budget * ctx.spread(0.05, 0.05)).floor() as u64;
        campaign.roi = ctx.spread(1.5, 1.0);
        campaign.start_date = Some(ctx.ago(30.0));
        campaign.end_date = Some(ctx.ahead(30.0));
        campaign.performance = ctx.series(300.0, 100.0, window);
    }

    campaign
}
