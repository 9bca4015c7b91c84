//! Derived-data shaping for the dashboard and analysis views
//!
//! Pure functions from the nested upstream analysis document to flat view
//! data the templates can render without further logic.

use crate::model::{
    ComparativeTraffic, ComparisonWindow, CompetitorRow, Keyword, Project, SeoAnalysis,
};

/// Direction of a percentage delta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > 0.0 {
            Trend::Up
        } else if percentage < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}

/// A delta percentage prepared for display
#[derive(Debug, Clone, Copy)]
pub struct DeltaView {
    pub percentage: f64,
    pub trend: Trend,
}

impl DeltaView {
    pub fn new(percentage: f64) -> Self {
        Self {
            percentage,
            trend: Trend::from_percentage(percentage),
        }
    }

    /// "+12.3%", "-4.0%", "0.0%"
    pub fn formatted(&self) -> String {
        match self.trend {
            Trend::Up => format!("+{:.1}%", self.percentage),
            _ => format!("{:.1}%", self.percentage),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.trend {
            Trend::Up => "text-emerald-600",
            Trend::Down => "text-rose-600",
            Trend::Flat => "text-gray-600",
        }
    }
}

/// Comparison window selectable on the analysis report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    #[default]
    TwentyEightDays,
    ThreeMonths,
    SixMonths,
}

impl TimeRange {
    /// Parse the `range` query value; anything unknown falls back to 28 days.
    pub fn parse(value: &str) -> Self {
        match value {
            "3months" => TimeRange::ThreeMonths,
            "6months" => TimeRange::SixMonths,
            _ => TimeRange::TwentyEightDays,
        }
    }

    pub fn query_value(&self) -> &'static str {
        match self {
            TimeRange::TwentyEightDays => "28days",
            TimeRange::ThreeMonths => "3months",
            TimeRange::SixMonths => "6months",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::TwentyEightDays => "Son 28 Gün",
            TimeRange::ThreeMonths => "Son 3 Ay",
            TimeRange::SixMonths => "Son 6 Ay",
        }
    }

    pub fn window(&self, data: &ComparativeTraffic) -> ComparisonWindow {
        match self {
            TimeRange::TwentyEightDays => data.twenty_eight_days,
            TimeRange::ThreeMonths => data.three_months,
            TimeRange::SixMonths => data.six_months,
        }
    }
}

/// Per-project card on the dashboard
#[derive(Debug, Clone)]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub domain: Option<String>,
    pub website_traffic: u64,
    pub organic_traffic: u64,
    pub website_delta: DeltaView,
    pub organic_delta: DeltaView,
    /// First three tracked keywords
    pub top_keywords: Vec<String>,
    /// How many tracked keywords did not fit on the card
    pub more_keywords: usize,
}

pub fn project_summary(project: &Project, analysis: &SeoAnalysis) -> ProjectSummary {
    let window = &analysis.comparative_traffic_data.twenty_eight_days;
    let tracked = &analysis.tracked_keywords;

    ProjectSummary {
        id: project.id.clone(),
        name: project.name.clone(),
        domain: project.domain.clone(),
        website_traffic: analysis.traffic.website_traffic,
        organic_traffic: analysis.traffic.organic_traffic,
        website_delta: DeltaView::new(window.website_traffic.difference_percentage),
        organic_delta: DeltaView::new(window.organic_traffic.difference_percentage),
        top_keywords: tracked.iter().take(3).map(|k| k.name.clone()).collect(),
        more_keywords: tracked.len().saturating_sub(3),
    }
}

/// A keyword resolved for display: tracked keywords report traffic, rising
/// and falling keywords report monthly clicks.
#[derive(Debug, Clone)]
pub struct KeywordView {
    pub name: String,
    pub volume: u64,
    pub unit: &'static str,
}

fn keyword_view(keyword: &Keyword) -> KeywordView {
    match (keyword.traffic, keyword.monthly_clicks) {
        (_, Some(clicks)) => KeywordView {
            name: keyword.name.clone(),
            volume: clicks,
            unit: "tıklama",
        },
        (traffic, None) => KeywordView {
            name: keyword.name.clone(),
            volume: traffic.unwrap_or(0),
            unit: "trafik",
        },
    }
}

/// One row of the traffic trend chart
#[derive(Debug, Clone)]
pub struct TrendRow {
    pub period: &'static str,
    pub organic: u64,
    pub website: u64,
}

/// Everything the analysis page renders
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub range: TimeRange,
    pub website_traffic: u64,
    pub organic_traffic: u64,
    pub competitor_traffic: u64,
    pub tracked_count: usize,
    pub website_delta: DeltaView,
    pub organic_delta: DeltaView,
    pub competitor_delta: DeltaView,
    pub trend_rows: Vec<TrendRow>,
    pub competitor_rows: Vec<CompetitorRow>,
    pub tracked_keywords: Vec<KeywordView>,
    pub rising_keywords: Vec<KeywordView>,
    pub falling_keywords: Vec<KeywordView>,
    pub rising_count: usize,
    pub falling_count: usize,
}

const KEYWORD_SNAPSHOT_LEN: usize = 5;

pub fn analysis_report(analysis: &SeoAnalysis, range: TimeRange) -> AnalysisReport {
    let window = range.window(&analysis.comparative_traffic_data);
    let comparative = &analysis.comparative_traffic_data;

    let trend_rows = vec![
        TrendRow {
            period: "Son 28 Gün",
            organic: comparative.twenty_eight_days.organic_traffic.current_value,
            website: comparative.twenty_eight_days.website_traffic.current_value,
        },
        TrendRow {
            period: "3 Ay",
            organic: comparative.three_months.organic_traffic.current_value,
            website: comparative.three_months.website_traffic.current_value,
        },
        TrendRow {
            period: "6 Ay",
            organic: comparative.six_months.organic_traffic.current_value,
            website: comparative.six_months.website_traffic.current_value,
        },
    ];

    let snapshot = |keywords: &[Keyword]| {
        keywords
            .iter()
            .take(KEYWORD_SNAPSHOT_LEN)
            .map(keyword_view)
            .collect::<Vec<_>>()
    };

    AnalysisReport {
        range,
        website_traffic: analysis.traffic.website_traffic,
        organic_traffic: analysis.traffic.organic_traffic,
        competitor_traffic: analysis.competitors_organic_traffic.overall_traffic,
        tracked_count: analysis.tracked_keywords.len(),
        website_delta: DeltaView::new(window.website_traffic.difference_percentage),
        organic_delta: DeltaView::new(window.organic_traffic.difference_percentage),
        competitor_delta: DeltaView::new(analysis.competitors_organic_traffic.difference_percentage),
        trend_rows,
        competitor_rows: analysis
            .competitors_organic_traffic
            .monthly_average_traffic_data
            .clone(),
        tracked_keywords: snapshot(&analysis.tracked_keywords),
        rising_keywords: snapshot(&analysis.rising_keywords),
        falling_keywords: snapshot(&analysis.falling_keywords),
        rising_count: analysis.rising_keywords.len(),
        falling_count: analysis.falling_keywords.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_analysis() -> SeoAnalysis {
        serde_json::from_value(json!({
            "traffic": { "websiteTraffic": 12500, "organicTraffic": 8300 },
            "comparativeTrafficData": {
                "twentyEightDays": {
                    "websiteTraffic": { "currentValue": 4200, "differencePercentage": 12.5 },
                    "organicTraffic": { "currentValue": 2800, "differencePercentage": -3.2 }
                },
                "threeMonths": {
                    "websiteTraffic": { "currentValue": 11000, "differencePercentage": 5.0 },
                    "organicTraffic": { "currentValue": 7400, "differencePercentage": 1.1 }
                },
                "sixMonths": {
                    "websiteTraffic": { "currentValue": 21000, "differencePercentage": 0.0 },
                    "organicTraffic": { "currentValue": 14800, "differencePercentage": 8.9 }
                }
            },
            "competitorsOrganicTraffic": {
                "overallTraffic": 54000,
                "differencePercentage": -6.4,
                "monthlyAverageTrafficData": [
                    { "competitor": "rakip.com", "monthlyAverageTraffic": 31000 },
                    { "competitor": "digerrakip.com", "monthlyAverageTraffic": 23000 }
                ]
            },
            "trackedKeywords": [
                { "name": "seo analiz", "traffic": 900 },
                { "name": "anahtar kelime", "traffic": 640 },
                { "name": "site trafiği", "traffic": 410 },
                { "name": "rakip analizi", "traffic": 300 },
                { "name": "organik trafik", "traffic": 210 },
                { "name": "backlink", "traffic": 90 }
            ],
            "risingKeywords": [{ "name": "yapay zeka seo", "monthlyClicks": 1200 }],
            "fallingKeywords": [{ "name": "dizin kaydı", "monthlyClicks": 45 }]
        }))
        .unwrap()
    }

    fn sample_project() -> Project {
        serde_json::from_value(json!({
            "_id": "65a1b2c3",
            "name": "Örnek Proje",
            "domain": "ornek.com"
        }))
        .unwrap()
    }

    #[test]
    fn summary_takes_three_keywords_and_counts_overflow() {
        let summary = project_summary(&sample_project(), &sample_analysis());
        assert_eq!(summary.top_keywords, vec!["seo analiz", "anahtar kelime", "site trafiği"]);
        assert_eq!(summary.more_keywords, 3);
        assert_eq!(summary.website_traffic, 12500);
        assert_eq!(summary.website_delta.trend, Trend::Up);
        assert_eq!(summary.organic_delta.trend, Trend::Down);
    }

    #[test]
    fn summary_uses_the_28_day_window() {
        let summary = project_summary(&sample_project(), &sample_analysis());
        assert_eq!(summary.website_delta.formatted(), "+12.5%");
        assert_eq!(summary.organic_delta.formatted(), "-3.2%");
    }

    #[test]
    fn time_range_parse_defaults_to_28_days() {
        assert_eq!(TimeRange::parse("28days"), TimeRange::TwentyEightDays);
        assert_eq!(TimeRange::parse("3months"), TimeRange::ThreeMonths);
        assert_eq!(TimeRange::parse("6months"), TimeRange::SixMonths);
        assert_eq!(TimeRange::parse("anything-else"), TimeRange::TwentyEightDays);
        assert_eq!(TimeRange::parse(""), TimeRange::TwentyEightDays);
    }

    #[test]
    fn report_selects_the_requested_window() {
        let report = analysis_report(&sample_analysis(), TimeRange::SixMonths);
        assert_eq!(report.website_delta.trend, Trend::Flat);
        assert_eq!(report.organic_delta.formatted(), "+8.9%");
    }

    #[test]
    fn report_builds_three_trend_rows() {
        let report = analysis_report(&sample_analysis(), TimeRange::default());
        let periods: Vec<_> = report.trend_rows.iter().map(|r| r.period).collect();
        assert_eq!(periods, vec!["Son 28 Gün", "3 Ay", "6 Ay"]);
        assert_eq!(report.trend_rows[1].organic, 7400);
        assert_eq!(report.trend_rows[2].website, 21000);
    }

    #[test]
    fn report_snapshots_cap_at_five_keywords() {
        let report = analysis_report(&sample_analysis(), TimeRange::default());
        assert_eq!(report.tracked_keywords.len(), 5);
        assert_eq!(report.tracked_count, 6);
        assert_eq!(report.rising_count, 1);
        assert_eq!(report.falling_count, 1);
    }

    #[test]
    fn rising_keywords_resolve_to_monthly_clicks() {
        let report = analysis_report(&sample_analysis(), TimeRange::default());
        let rising = &report.rising_keywords[0];
        assert_eq!(rising.volume, 1200);
        assert_eq!(rising.unit, "tıklama");
        let tracked = &report.tracked_keywords[0];
        assert_eq!(tracked.unit, "trafik");
    }

    #[test]
    fn delta_formatting_and_classes() {
        assert_eq!(DeltaView::new(3.25).formatted(), "+3.2%");
        assert_eq!(DeltaView::new(-10.0).formatted(), "-10.0%");
        assert_eq!(DeltaView::new(0.0).formatted(), "0.0%");
        assert_eq!(DeltaView::new(1.0).css_class(), "text-emerald-600");
        assert_eq!(DeltaView::new(-1.0).css_class(), "text-rose-600");
        assert_eq!(DeltaView::new(0.0).css_class(), "text-gray-600");
    }
}
