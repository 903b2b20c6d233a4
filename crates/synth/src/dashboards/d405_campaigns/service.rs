use contracts::dashboards::d405_campaigns::{
    CampaignFilters, CampaignsDataset, CampaignsOverview, CampaignsRequest, ChannelPerformance,
    PerformanceSummary,
};
use contracts::domain::a004_campaign::{Campaign, CampaignType};
use contracts::enums::Categorical;
use contracts::shared::Metric;
use rand::Rng;

use crate::domain::a004_campaign::{generate_campaigns, POPULATION};
use crate::shared::aggregate::{average_by, sum_by};
use crate::shared::context::GenContext;
use crate::shared::filter::{allows, filter, select, Criteria};
use crate::shared::time_window::{resolve, WindowProfile};

const TOTAL_TREND: f64 = 2.0;
const ACTIVE_TREND: f64 = 1.0;
const BUDGET_TREND: f64 = 15.0;
const ROI_TREND: f64 = 0.3;

impl Criteria<Campaign> for CampaignFilters {
    fn accepts(&self, campaign: &Campaign) -> bool {
        allows(&self.status, &campaign.status) && allows(&self.campaign_type, &campaign.campaign_type)
    }
}

pub fn assemble<R: Rng>(request: &CampaignsRequest, ctx: &mut GenContext<R>) -> CampaignsDataset {
    let window = resolve(
        request.time_range,
        &request.date_range,
        WindowProfile::Daily,
        ctx.now(),
    );
    let population = generate_campaigns(ctx, POPULATION, &window);
    let campaigns = filter(&population, &request.filters);

    let overview = overview(&campaigns);
    let performance_summary = PerformanceSummary {
        total_reach: ctx.series(50_000.0, 10_000.0, &window),
        total_conversions: ctx.series(1_000.0, 200.0, &window),
        average_roi: ctx.series(2.0, 0.5, &window),
    };
    let channel_performance = select(CampaignType::ALL, &request.filters.campaign_type)
        .into_iter()
        .map(|channel| ChannelPerformance {
            channel,
            effectiveness: ctx.spread(60.0, 30.0),
            budget: ctx.spread(8_000.0, 10_000.0),
            roi: ctx.spread(1.5, 1.5),
        })
        .collect();

    tracing::debug!(
        population = population.len(),
        campaigns = campaigns.len(),
        "assembled campaigns dataset"
    );

    CampaignsDataset {
        overview,
        campaigns,
        performance_summary,
        channel_performance,
    }
}

/// Budget over every filtered campaign, ROI over the active ones only.
fn overview(campaigns: &[Campaign]) -> CampaignsOverview {
    let active: Vec<&Campaign> = campaigns.iter().filter(|c| c.is_active()).collect();

    CampaignsOverview {
        total_campaigns: Metric::new(campaigns.len() as f64, TOTAL_TREND),
        active_campaigns: Metric::new(active.len() as f64, ACTIVE_TREND),
        total_budget: Metric::new(sum_by(campaigns, |c| c.budget), BUDGET_TREND),
        average_roi: Metric::new(average_by(&active, |c| c.roi), ROI_TREND),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{key_paths, seeded};
    use contracts::domain::a004_campaign::CampaignStatus;
    use contracts::shared::TimeRange;

    #[test]
    fn test_overview_over_filtered_campaigns() {
        let dataset = assemble(&CampaignsRequest::new(TimeRange::Last30Days), &mut seeded(131));
        let campaigns = &dataset.campaigns;
        let budget: f64 = campaigns.iter().map(|c| c.budget).sum();

        assert_eq!(campaigns.len(), POPULATION);
        assert_eq!(dataset.overview.total_budget.value, budget);
        assert_eq!(
            dataset.overview.active_campaigns.value,
            campaigns.iter().filter(|c| c.is_active()).count() as f64
        );
        assert_eq!(dataset.channel_performance.len(), CampaignType::ALL.len());
        assert_eq!(dataset.performance_summary.total_reach.len(), 30);
    }

    #[test]
    fn test_type_filter_restricts_channels() {
        let filters = CampaignFilters {
            status: vec![CampaignStatus::Draft, CampaignStatus::Ended],
            campaign_type: vec![CampaignType::Ppc],
        };
        let request = CampaignsRequest::with_filters(TimeRange::Last7Days, filters);
        let dataset = assemble(&request, &mut seeded(132));

        assert!(dataset.campaigns.iter().all(|c| c.campaign_type == CampaignType::Ppc));
        assert_eq!(dataset.channel_performance.len(), 1);
        assert_eq!(dataset.channel_performance[0].channel, CampaignType::Ppc);
        // Neither status is active, so there is no ROI to average.
        assert_eq!(dataset.overview.active_campaigns.value, 0.0);
        assert_eq!(dataset.overview.average_roi.value, 0.0);
    }

    #[test]
    fn test_filters_deserialize_type_key() {
        let filters: Result<CampaignFilters, _> =
            serde_json::from_str(r#"{"status":["Active"],"type":["Social Media"]}"#);
        assert!(filters.is_ok_and(|f| f.campaign_type == vec![CampaignType::SocialMedia]));
    }

    #[test]
    fn test_shape_is_stable_across_calls() {
        // Only active campaigns carry performance samples, so their keys
        // depend on which statuses were drawn.
        let shape = |seed| {
            let dataset = assemble(&CampaignsRequest::new(TimeRange::Last30Days), &mut seeded(seed));
            serde_json::to_value(dataset).map(|value| {
                let mut paths = key_paths(&value);
                paths.retain(|path| !path.starts_with("campaigns[].performance[]"));
                paths
            })
        };
        match (shape(133), shape(134)) {
            (Ok(a), Ok(b)) => {
                assert!(a.contains("campaigns[].performance"));
                assert_eq!(a, b);
            }
            _ => panic!("campaigns dataset must serialize"),
        }
    }
}
