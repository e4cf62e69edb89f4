use std::sync::Arc;

use log::{debug, info};
use thiserror::Error;

use crate::aggregator::{AggregatedSegment, aggregate_transcript};
use crate::config::ReaderConfig;
use crate::extractor::extract_video_id;
use crate::source::{SourceError, TranscriptSource};

#[derive(Debug, Error)]
pub enum ReaderError {
    #[error(
        "Supplied url {url} is not a supported youtube URL. Supported formats include:\n  youtube.com/watch?v={{video_id}} (with or without 'www.')\n  youtube.com/embed/{{video_id}} (with or without 'www.')\n  youtu.be/{{video_id}} (never includes www subdomain)"
    )]
    UnsupportedUrl { url: String },

    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Per-request orchestration: extract each video ID, fetch its caption
/// chunks, aggregate them. Holds no per-request state of its own.
pub struct YoutubeReader {
    source: Arc<dyn TranscriptSource>,
    config: ReaderConfig,
}

impl YoutubeReader {
    pub fn new(source: Arc<dyn TranscriptSource>, config: ReaderConfig) -> Self {
        Self { source, config }
    }

    /// Resolve a batch of YouTube links into `(video_id, transcript)` pairs,
    /// in input order. URLs are processed strictly sequentially and the batch
    /// fails fast: an unrecognized URL aborts before any further fetch, and
    /// the first source failure aborts the remaining links.
    pub async fn load_data(
        &self,
        ytlinks: &[String],
    ) -> Result<Vec<(String, Vec<AggregatedSegment>)>, ReaderError> {
        let mut results = Vec::with_capacity(ytlinks.len());

        for link in ytlinks {
            let video_id = extract_video_id(link)
                .ok_or_else(|| ReaderError::UnsupportedUrl { url: link.clone() })?;
            debug!("Extracted video ID {video_id} from {link}");

            let chunks = self.source.fetch(&video_id, &self.config.languages).await?;
            let transcript = aggregate_transcript(&chunks, self.config.min_duration);
            info!(
                "Aggregated {} caption chunks into {} segments for video {video_id}",
                chunks.len(),
                transcript.len()
            );

            results.push((video_id, transcript));
        }

        Ok(results)
    }
}
