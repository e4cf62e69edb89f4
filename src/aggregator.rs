use serde::Serialize;

/// One raw caption unit as supplied by the transcript source, ordered by
/// `start` ascending. Ordering and overlap are not re-validated here.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionChunk {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// A run of caption chunks merged until the covered duration exceeds the
/// configured threshold. `duration` spans from `start` to the end of the last
/// folded chunk, rounded to 3 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedSegment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Merge timestamped caption chunks into segments of at least `min_duration`
/// seconds each. Single forward pass: texts are concatenated without a
/// separator and a segment is emitted as soon as its covered duration passes
/// the threshold. The trailing partial run is flushed as a final segment even
/// when it falls short, so only the last segment per video may be under the
/// threshold. Empty input yields empty output.
pub fn aggregate_transcript(chunks: &[CaptionChunk], min_duration: f64) -> Vec<AggregatedSegment> {
    let mut cur_text = String::new();
    let mut cur_start = 0.0_f64;

    let mut aggregated = Vec::new();
    for (i, chunk) in chunks.iter().enumerate() {
        cur_text.push_str(&chunk.text);
        let cur_duration = round3(chunk.start + chunk.duration - cur_start);

        if cur_duration > min_duration {
            aggregated.push(AggregatedSegment {
                text: cur_text.trim().to_string(),
                start: cur_start,
                duration: cur_duration,
            });
            cur_text.clear();
            cur_start = round3(chunk.start + chunk.duration);
            continue;
        }

        if i + 1 == chunks.len() {
            aggregated.push(AggregatedSegment {
                text: cur_text.trim().to_string(),
                start: cur_start,
                duration: cur_duration,
            });
        }
    }

    aggregated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(text: &str, start: f64, duration: f64) -> CaptionChunk {
        CaptionChunk {
            text: text.to_string(),
            start,
            duration,
        }
    }

    #[test]
    fn test_empty_input_yields_no_segments() {
        assert!(aggregate_transcript(&[], 90.0).is_empty());
    }

    #[test]
    fn test_below_threshold_flushes_single_trailing_segment() {
        let chunks = vec![
            chunk("Hello ", 0.0, 50.0),
            chunk("world", 50.0, 45.0),
        ];

        let segments = aggregate_transcript(&chunks, 90.0);
        assert_eq!(
            segments,
            vec![AggregatedSegment {
                text: "Hello world".to_string(),
                start: 0.0,
                duration: 95.0,
            }]
        );
    }

    #[test]
    fn test_everything_below_threshold_concatenates_all_text() {
        let chunks = vec![
            chunk("a ", 0.0, 10.0),
            chunk("b ", 10.0, 10.0),
            chunk("c", 20.0, 10.0),
        ];

        let segments = aggregate_transcript(&chunks, 90.0);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "a b c");
        assert_eq!(segments[0].start, 0.0);
        assert_eq!(segments[0].duration, 30.0);
    }

    #[test]
    fn test_threshold_crossing_emits_and_restarts() {
        let chunks = vec![
            chunk("one ", 0.0, 60.0),
            chunk("two ", 60.0, 40.0),
            chunk("three", 100.0, 20.0),
        ];

        let segments = aggregate_transcript(&chunks, 90.0);
        assert_eq!(segments.len(), 2);

        // chunk 1 pushes cumulative duration to 100 > 90
        assert_eq!(segments[0].text, "one two");
        assert_eq!(segments[0].start, 0.0);
        assert_eq!(segments[0].duration, 100.0);

        // accumulation restarts at the emission boundary
        assert_eq!(segments[1].text, "three");
        assert_eq!(segments[1].start, 100.0);
        assert_eq!(segments[1].duration, 20.0);
    }

    #[test]
    fn test_single_chunk_over_threshold() {
        let chunks = vec![chunk("monologue", 0.0, 120.0)];

        let segments = aggregate_transcript(&chunks, 90.0);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "monologue");
        assert_eq!(segments[0].duration, 120.0);
    }

    #[test]
    fn test_reaggregating_single_segment_is_idempotent() {
        let once = aggregate_transcript(&[chunk("monologue", 0.0, 120.0)], 90.0);
        let as_chunks: Vec<CaptionChunk> = once
            .iter()
            .map(|s| chunk(&s.text, s.start, s.duration))
            .collect();

        assert_eq!(aggregate_transcript(&as_chunks, 90.0), once);
    }

    #[test]
    fn test_durations_rounded_to_three_decimals() {
        let chunks = vec![
            chunk("x ", 0.0, 45.1234),
            chunk("y", 45.1234, 50.8766),
        ];

        let segments = aggregate_transcript(&chunks, 90.0);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].duration, 96.0);

        let fractional = vec![chunk("z", 0.0, 10.00049)];
        let segments = aggregate_transcript(&fractional, 90.0);
        assert_eq!(segments[0].duration, 10.0);
    }

    #[test]
    fn test_restart_start_is_rounded_chunk_end() {
        let chunks = vec![
            chunk("long ", 0.0, 95.5554),
            chunk("tail", 95.5554, 1.0),
        ];

        let segments = aggregate_transcript(&chunks, 90.0);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].start, 95.555);
    }

    #[test]
    fn test_segment_text_is_trimmed() {
        let chunks = vec![chunk("  padded  ", 0.0, 10.0)];

        let segments = aggregate_transcript(&chunks, 90.0);
        assert_eq!(segments[0].text, "padded");
    }

    #[test]
    fn test_exact_threshold_does_not_emit_early() {
        // strictly greater-than comparison: 90.0 cumulative stays accumulated
        let chunks = vec![
            chunk("a ", 0.0, 90.0),
            chunk("b", 90.0, 5.0),
        ];

        let segments = aggregate_transcript(&chunks, 90.0);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "a b");
        assert_eq!(segments[0].duration, 95.0);
    }
}
