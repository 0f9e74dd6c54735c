use crate::evidence::Evidence;
use crate::pass::HeuristicPass;

#[derive(Debug, Clone, Default)]
pub struct DemoData {
    /// `None` when no video was downloaded.
    pub duration_seconds: Option<f64>,
}

impl From<&Evidence<'_>> for DemoData {
    fn from(evidence: &Evidence<'_>) -> Self {
        Self {
            duration_seconds: evidence.video.and_then(|video| video.downloaded_duration()),
        }
    }
}

/// Bonus for a downloaded video of the given length.
///
/// Too short reads as thin, very long as padded.
fn duration_bonus(duration: f64) -> f64 {
    if duration < 30.0 {
        0.3
    } else if duration < 60.0 {
        1.0
    } else if duration <= 200.0 {
        2.5
    } else {
        2.0
    }
}

pub struct Demo;

impl HeuristicPass for Demo {
    type Data = DemoData;

    const CEILING: f64 = 8.0;

    fn required_data(&self, evidence: &Evidence<'_>) -> DemoData {
        DemoData::from(evidence)
    }

    fn apply(&self, data: &DemoData) -> f64 {
        match data.duration_seconds {
            Some(duration) => 1.0 + duration_bonus(duration),
            None => 1.0,
        }
    }

    fn name(&self) -> &'static str {
        "demo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{Submission, VideoAnalysisResult};

    fn video(success: bool, duration: f64) -> VideoAnalysisResult {
        let mut result = VideoAnalysisResult {
            team_number: 1,
            ..Default::default()
        };
        result.download.success = success;
        result.download.duration_seconds = duration;
        result
    }

    #[test]
    fn test_no_video_is_baseline() {
        let sub = Submission::new(1, "t", "p");
        assert_eq!(Demo.estimate(&Evidence::bare(&sub)), 1.0);

        let failed = video(false, 120.0);
        let evidence = Evidence::new(&sub, None, None, None, Some(&failed));
        assert_eq!(Demo.estimate(&evidence), 1.0);
    }

    #[test]
    fn test_duration_bands() {
        let sub = Submission::new(1, "t", "p");
        for (duration, expected) in [
            (12.0, 1.3),
            (30.0, 2.0),
            (59.9, 2.0),
            (60.0, 3.5),
            (200.0, 3.5),
            (200.5, 3.0),
            (900.0, 3.0),
        ] {
            let downloaded = video(true, duration);
            let evidence = Evidence::new(&sub, None, None, None, Some(&downloaded));
            let score = Demo.estimate(&evidence);
            assert!(
                (score - expected).abs() < 1e-9,
                "duration {duration}: got {score}, expected {expected}"
            );
        }
    }
}
