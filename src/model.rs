//! Wire types for the upstream SEO API
//!
//! Field names mirror the API's JSON exactly (camelCase, Mongo-style `_id`),
//! including the `creatAt` spelling the profile endpoint actually returns.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub domain: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default, rename = "creatAt")]
    pub created_at: Option<String>,
}

impl UserProfile {
    /// First character of the name, for the avatar badge
    pub fn initial(&self) -> String {
        self.name.chars().take(1).collect()
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Traffic {
    pub website_traffic: u64,
    pub organic_traffic: u64,
}

/// One metric compared against its previous period
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricComparison {
    pub current_value: u64,
    #[serde(default)]
    pub previous_value: Option<u64>,
    pub difference_percentage: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonWindow {
    pub website_traffic: MetricComparison,
    pub organic_traffic: MetricComparison,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparativeTraffic {
    pub twenty_eight_days: ComparisonWindow,
    pub three_months: ComparisonWindow,
    pub six_months: ComparisonWindow,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorsOrganicTraffic {
    pub overall_traffic: u64,
    pub difference_percentage: f64,
    #[serde(default)]
    pub monthly_average_traffic_data: Vec<CompetitorRow>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorRow {
    pub competitor: String,
    pub monthly_average_traffic: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyword {
    pub name: String,
    #[serde(default)]
    pub traffic: Option<u64>,
    #[serde(default)]
    pub monthly_clicks: Option<u64>,
}

/// The nested analysis document returned by `seo-analysis/{projectId}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoAnalysis {
    pub traffic: Traffic,
    pub comparative_traffic_data: ComparativeTraffic,
    pub competitors_organic_traffic: CompetitorsOrganicTraffic,
    #[serde(default)]
    pub tracked_keywords: Vec<Keyword>,
    #[serde(default)]
    pub rising_keywords: Vec<Keyword>,
    #[serde(default)]
    pub falling_keywords: Vec<Keyword>,
}
