use crate::aggregator::AggregatedSegment;

#[derive(Debug, serde::Deserialize)]
pub struct TranscriptRequest {
    pub ytlinks: Vec<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct TranscriptResponse {
    pub video_id: String,
    pub transcript: Vec<AggregatedSegment>,
}
