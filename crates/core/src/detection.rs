//! Deterministic mock analyzer.
//!
//! Every field of a [`DetectionResult`] is derived arithmetically from a seed
//! read out of the hash string. No media is inspected and no randomness source
//! is involved, so the same hash always produces the same result.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Version label reported with every result.
pub const MODEL_VERSION: &str = "deepfake-detector-v1.0";

/// Reason reported for authentic classifications.
pub const NO_MANIPULATION: &str = "No manipulation detected";

/// Reasons reported for deepfake classifications, indexed by `seed % 5`.
pub const REASONS: [&str; 5] = [
    "Facial inconsistencies detected in temporal analysis",
    "Unusual blinking patterns suggest synthetic generation",
    "Micro-expressions show signs of digital manipulation",
    "Audio-visual synchronization anomalies detected",
    "Neural network artifacts found in facial regions",
];

/// Number of leading hash characters read as the seed.
pub const SEED_HEX_DIGITS: usize = 8;

const BASE_CONFIDENCE: u32 = 60;
const CONFIDENCE_SPREAD: u32 = 40;
const BASE_PROCESSING_CENTIS: u32 = 250;
const PROCESSING_SPREAD_CENTIS: u32 = 100;

/// Fabricated outcome of analysing one file hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub is_deepfake: bool,
    /// Percentage in `60..=99`.
    pub confidence: u32,
    pub reason: String,
    pub processing_time: ProcessingTime,
    pub model_version: String,
}

/// Simulated processing time, held in hundredths of a second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProcessingTime(u32);

impl ProcessingTime {
    pub fn from_centis(centis: u32) -> Self {
        Self(centis)
    }

    pub fn as_centis(self) -> u32 {
        self.0
    }

    pub fn as_secs_f64(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

/// Shortest decimal form with at least one fractional digit (`2.5`, `2.63`, `3.0`).
impl fmt::Display for ProcessingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac % 10 == 0 {
            write!(f, "{whole}.{}", frac / 10)
        } else {
            write!(f, "{whole}.{frac:02}")
        }
    }
}

impl Serialize for ProcessingTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_secs_f64())
    }
}

impl<'de> Deserialize<'de> for ProcessingTime {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        if !secs.is_finite() || secs < 0.0 || secs > f64::from(u32::MAX) / 100.0 {
            return Err(serde::de::Error::custom(format!(
                "processing time out of range: {secs}"
            )));
        }
        Ok(Self((secs * 100.0).round() as u32))
    }
}

/// Seed driving all derivations: the base-16 value of the first
/// [`SEED_HEX_DIGITS`] characters of `hash`.
///
/// Returns 0 for an empty hash or when those characters are not all hex digits.
pub fn seed(hash: &str) -> u32 {
    let end = hash
        .char_indices()
        .nth(SEED_HEX_DIGITS)
        .map_or(hash.len(), |(idx, _)| idx);
    let prefix = &hash[..end];
    if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
        return 0;
    }
    u32::from_str_radix(prefix, 16).unwrap_or(0)
}

/// Produce the mock classification for `hash`. Pure and total.
pub fn analyze(hash: &str) -> DetectionResult {
    let seed = seed(hash);
    let is_deepfake = seed % 3 == 0;
    let reason = if is_deepfake {
        REASONS[(seed % 5) as usize]
    } else {
        NO_MANIPULATION
    };

    DetectionResult {
        is_deepfake,
        confidence: BASE_CONFIDENCE + seed % CONFIDENCE_SPREAD,
        reason: reason.to_owned(),
        processing_time: ProcessingTime::from_centis(
            BASE_PROCESSING_CENTIS + seed % PROCESSING_SPREAD_CENTIS,
        ),
        model_version: MODEL_VERSION.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_reads_first_eight_hex_chars() {
        assert_eq!(seed("abc12345"), 0xabc1_2345);
        assert_eq!(seed("a35d3d052e3febc8"), 0xa35d_3d05);
        assert_eq!(seed("ffffffffffff"), u32::MAX);
        assert_eq!(seed("abc"), 0xabc);
        assert_eq!(seed("ABCDEF01"), 0xabcd_ef01);
    }

    #[test]
    fn seed_defaults_to_zero() {
        assert_eq!(seed(""), 0);
        assert_eq!(seed("demo_file_123"), 0);
        assert_eq!(seed("+abc1234"), 0);
        assert_eq!(seed("zzzzzzzz"), 0);
    }

    #[test]
    fn seed_counts_characters_not_bytes() {
        assert_eq!(seed("ééééééééabc"), 0);
    }

    #[test]
    fn abc12345_scenario() {
        let result = analyze("abc12345");
        assert_eq!(
            result,
            DetectionResult {
                is_deepfake: true,
                confidence: 73,
                reason: "Audio-visual synchronization anomalies detected".to_owned(),
                processing_time: ProcessingTime::from_centis(263),
                model_version: "deepfake-detector-v1.0".to_owned(),
            }
        );
        assert_eq!(result.processing_time.to_string(), "2.63");
    }

    #[test]
    fn authentic_result_uses_fixed_reason() {
        // 0xa35d3d05 % 3 == 1
        let result = analyze("a35d3d052e3febc8");
        assert!(!result.is_deepfake);
        assert_eq!(result.reason, NO_MANIPULATION);
        assert_eq!(result.confidence, 97);
        assert_eq!(result.processing_time.to_string(), "3.27");
    }

    #[test]
    fn empty_and_placeholder_hashes_use_zero_seed() {
        for hash in ["", "demo_file_123"] {
            let result = analyze(hash);
            assert!(result.is_deepfake);
            assert_eq!(result.confidence, 60);
            assert_eq!(result.reason, REASONS[0]);
            assert_eq!(result.processing_time.to_string(), "2.5");
        }
    }

    #[test]
    fn analyze_is_deterministic() {
        for hash in ["abc12345", "0000000f", "deadbeefcafe", "not-hex", ""] {
            assert_eq!(analyze(hash), analyze(hash));
        }
    }

    #[test]
    fn fields_follow_seed_arithmetic() {
        for s in (0u32..5_000).chain([u32::MAX - 7, u32::MAX]) {
            let hash = format!("{s:08x}");
            let result = analyze(&hash);
            assert_eq!(result.is_deepfake, s % 3 == 0, "hash {hash}");
            assert!((60..=99).contains(&result.confidence), "hash {hash}");
            assert!(
                (250..=349).contains(&result.processing_time.as_centis()),
                "hash {hash}"
            );
            let secs = result.processing_time.as_secs_f64();
            assert!((2.5..=3.49).contains(&secs), "hash {hash}");
            if result.is_deepfake {
                assert_eq!(result.reason, REASONS[(s % 5) as usize]);
            } else {
                assert_eq!(result.reason, NO_MANIPULATION);
            }
            assert_eq!(result.model_version, MODEL_VERSION);
        }
    }

    #[test]
    fn processing_time_display() {
        assert_eq!(ProcessingTime::from_centis(250).to_string(), "2.5");
        assert_eq!(ProcessingTime::from_centis(300).to_string(), "3.0");
        assert_eq!(ProcessingTime::from_centis(307).to_string(), "3.07");
        assert_eq!(ProcessingTime::from_centis(349).to_string(), "3.49");
    }

    #[test]
    fn result_serializes_processing_time_as_number() {
        let json = serde_json::to_value(analyze("abc12345")).unwrap();
        assert_eq!(json["processing_time"], serde_json::json!(2.63));
        assert_eq!(json["confidence"], serde_json::json!(73));

        let back: DetectionResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, analyze("abc12345"));
    }

    #[test]
    fn negative_processing_time_is_rejected() {
        let result = serde_json::from_str::<ProcessingTime>("-1.0");
        assert!(result.is_err());
    }
}
