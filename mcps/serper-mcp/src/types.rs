//! Serper response types
//!
//! Field names follow Serper's camelCase JSON. Responses are trusted as-is:
//! a missing, `null` or oddly shaped field reads as its default instead of
//! failing the whole response, and a missing result array reads as empty.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Verticals
// ============================================================================

/// A search category with its own endpoint and response shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertical {
    Search,
    Images,
    Videos,
    Places,
    News,
    Shopping,
}

impl Vertical {
    pub const ALL: [Vertical; 6] = [
        Vertical::Search,
        Vertical::Images,
        Vertical::Videos,
        Vertical::Places,
        Vertical::News,
        Vertical::Shopping,
    ];

    /// Path segment appended to the base URL
    pub fn endpoint(self) -> &'static str {
        match self {
            Vertical::Search => "search",
            Vertical::Images => "images",
            Vertical::Videos => "videos",
            Vertical::Places => "places",
            Vertical::News => "news",
            Vertical::Shopping => "shopping",
        }
    }
}

impl fmt::Display for Vertical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

// ============================================================================
// Lenient decoding
// ============================================================================

/// Decode any JSON value into `T`, reading `null` or a mismatched shape as
/// `T::default()`
fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Like [`deserialize_lenient`], but per element: one odd record keeps its
/// place in the list as a default record
fn deserialize_lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let values: Vec<Value> = deserialize_lenient(deserializer)?;
    Ok(values
        .into_iter()
        .map(|value| serde_json::from_value(value).unwrap_or_default())
        .collect())
}

// ============================================================================
// Shared
// ============================================================================

/// Echo of the resolved request, plus engine metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParameters {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub q: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub gl: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub hl: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub num: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub autocorrect: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub page: Option<u32>,
    #[serde(rename = "type", default, deserialize_with = "deserialize_lenient")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub engine: Option<String>,
}

// ============================================================================
// Web search
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub search_parameters: SearchParameters,
    #[serde(default, deserialize_with = "deserialize_lenient_list")]
    pub organic: Vec<Organic>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub answer_box: Option<AnswerBox>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub knowledge_graph: Option<KnowledgeGraph>,
    #[serde(default, deserialize_with = "deserialize_lenient_list")]
    pub top_stories: Vec<TopStory>,
    #[serde(default, deserialize_with = "deserialize_lenient_list")]
    pub people_also_ask: Vec<PeopleAlsoAsk>,
    #[serde(default, deserialize_with = "deserialize_lenient_list")]
    pub related_searches: Vec<RelatedSearch>,
}

/// A standard web result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organic {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub link: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub snippet: String,
    /// 1-based rank reported by the engine
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub position: u32,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_list")]
    pub sitelinks: Vec<SiteLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteLink {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub link: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerBox {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub snippet: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub snippet_highlighted: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub link: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub position: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeGraph {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub title: String,
    #[serde(rename = "type", default, deserialize_with = "deserialize_lenient")]
    pub kind: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub website: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub image_url: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub description_source: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub description_link: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub attributes: HashMap<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopStory {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub link: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub source: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub date: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub image_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeopleAlsoAsk {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub question: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub snippet: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub link: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelatedSearch {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub query: String,
}

// ============================================================================
// Images / Videos / News
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagesResponse {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub search_parameters: SearchParameters,
    #[serde(default, deserialize_with = "deserialize_lenient_list")]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub image_url: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub image_width: u32,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub image_height: u32,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub thumbnail_url: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub thumbnail_width: u32,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub thumbnail_height: u32,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub source: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub domain: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub link: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub google_url: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub position: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideosResponse {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub search_parameters: SearchParameters,
    #[serde(default, deserialize_with = "deserialize_lenient_list")]
    pub videos: Vec<Video>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub link: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub snippet: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub date: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub image_url: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub position: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub search_parameters: SearchParameters,
    #[serde(default, deserialize_with = "deserialize_lenient_list")]
    pub news: Vec<News>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub link: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub snippet: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub date: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub source: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub image_url: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub position: u32,
}

// ============================================================================
// Places / Shopping
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacesResponse {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub search_parameters: SearchParameters,
    #[serde(default, deserialize_with = "deserialize_lenient_list")]
    pub places: Vec<Place>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub position: u32,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub address: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub latitude: f64,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub longitude: f64,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub website: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub cid: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub rating_count: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingResponse {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub search_parameters: SearchParameters,
    #[serde(default, deserialize_with = "deserialize_lenient_list")]
    pub shopping: Vec<Shopping>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shopping {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub source: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub link: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub price: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub image_url: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub delivery: HashMap<String, Value>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub rating_count: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub offers: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub product_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub position: u32,
}

// ============================================================================
// Tagged union
// ============================================================================

/// Any vertical's response, tagged by the vertical it came from
#[derive(Debug, Clone)]
pub enum VerticalResponse {
    Search(SearchResponse),
    Images(ImagesResponse),
    Videos(VideosResponse),
    Places(PlacesResponse),
    News(NewsResponse),
    Shopping(ShoppingResponse),
}

impl VerticalResponse {
    pub fn vertical(&self) -> Vertical {
        match self {
            VerticalResponse::Search(_) => Vertical::Search,
            VerticalResponse::Images(_) => Vertical::Images,
            VerticalResponse::Videos(_) => Vertical::Videos,
            VerticalResponse::Places(_) => Vertical::Places,
            VerticalResponse::News(_) => Vertical::News,
            VerticalResponse::Shopping(_) => Vertical::Shopping,
        }
    }

    pub fn search_parameters(&self) -> &SearchParameters {
        match self {
            VerticalResponse::Search(r) => &r.search_parameters,
            VerticalResponse::Images(r) => &r.search_parameters,
            VerticalResponse::Videos(r) => &r.search_parameters,
            VerticalResponse::Places(r) => &r.search_parameters,
            VerticalResponse::News(r) => &r.search_parameters,
            VerticalResponse::Shopping(r) => &r.search_parameters,
        }
    }

    /// Number of records in the vertical's result list
    pub fn len(&self) -> usize {
        match self {
            VerticalResponse::Search(r) => r.organic.len(),
            VerticalResponse::Images(r) => r.images.len(),
            VerticalResponse::Videos(r) => r.videos.len(),
            VerticalResponse::Places(r) => r.places.len(),
            VerticalResponse::News(r) => r.news.len(),
            VerticalResponse::Shopping(r) => r.shopping.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Tool output
// ============================================================================

/// Maximum organic records returned by the `web-search` tool
pub const MAX_SIMPLIFIED_RESULTS: usize = 10;

/// The reduced record handed back to tool callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedResult {
    pub title: String,
    pub snippet: String,
    pub link: String,
}

impl From<&Organic> for SimplifiedResult {
    fn from(organic: &Organic) -> Self {
        Self {
            title: organic.title.clone(),
            snippet: organic.snippet.clone(),
            link: organic.link.clone(),
        }
    }
}

/// First [`MAX_SIMPLIFIED_RESULTS`] organic records, in rank order
pub fn simplify(organic: &[Organic]) -> Vec<SimplifiedResult> {
    organic
        .iter()
        .take(MAX_SIMPLIFIED_RESULTS)
        .map(SimplifiedResult::from)
        .collect()
}
