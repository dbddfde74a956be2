//! Reply texts produced without the completion service.
//!
//! The analysis report is kept as a `MiniJinja` template with named
//! substitution points; [`ReportFields`] is the context it is rendered
//! against. Wording and emoji are reproduced exactly, since downstream
//! consumers parse this format.

use serde::Serialize;

use crate::detection::DetectionResult;
use crate::error::ReportError;
use crate::hash::FileHash;

const REPORT_TEMPLATE_NAME: &str = "report.md";

/// Analysis report template.
pub const REPORT_TEMPLATE: &str = concat!(
    "🔍 **Deepfake Detection Analysis Complete**\n",
    "\n",
    "**File Hash:** `{{ file_hash }}`\n",
    "**Status:** {{ status }}\n",
    "**Confidence:** {{ confidence }}%\n",
    "**Analysis:** {{ reason }}\n",
    "**Processing Time:** {{ processing_time }}s\n",
    "**Model:** {{ model_version }}\n",
    "\n",
    "📊 **Technical Details:**\n",
    "- Facial region analysis: {{ facial_region }}\n",
    "- Temporal consistency: {{ temporal_consistency }}\n",
    "- Neural artifact detection: {{ neural_artifacts }}\n",
    "\n",
    "🔗 **Next Steps:**\n",
    "Results will be stored on NEAR blockchain for verification.\n",
    "Transaction hash will be provided once confirmed.\n",
    "\n",
    "Would you like to analyze another file?",
);

/// Reply to an empty conversation.
pub const WELCOME_MESSAGE: &str = concat!(
    "👋 **Welcome to NEAR Deepfake Detection Agent**\n",
    "\n",
    "I'm an autonomous AI agent that can detect deepfake and manipulated media content ",
    "using advanced neural network analysis.\n",
    "\n",
    "**How to use:**\n",
    "1. Send me a message like \"analyze file_hash:YOUR_HASH_HERE\"\n",
    "2. Or simply say \"analyze this file\" and I'll generate a demo\n",
    "3. I'll perform deepfake detection and return detailed results\n",
    "4. Results are stored on NEAR blockchain for verification\n",
    "\n",
    "**Capabilities:**\n",
    "- Image deepfake detection\n",
    "- Video manipulation analysis  \n",
    "- Facial inconsistency detection\n",
    "- Temporal artifact analysis\n",
    "- Blockchain result verification\n",
    "\n",
    "Ready to analyze your media files! 🚀",
);

pub const STATUS_DEEPFAKE: &str = "⚠️ DEEPFAKE DETECTED";
pub const STATUS_AUTHENTIC: &str = "✅ AUTHENTIC";

/// Values substituted into [`REPORT_TEMPLATE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportFields {
    pub file_hash: String,
    pub status: &'static str,
    pub confidence: u32,
    pub reason: String,
    pub processing_time: String,
    pub model_version: String,
    pub facial_region: &'static str,
    pub temporal_consistency: &'static str,
    pub neural_artifacts: &'static str,
}

impl ReportFields {
    pub fn new(hash: &FileHash, result: &DetectionResult) -> Self {
        let flagged = result.is_deepfake;
        Self {
            file_hash: hash.to_string(),
            status: if flagged { STATUS_DEEPFAKE } else { STATUS_AUTHENTIC },
            confidence: result.confidence,
            reason: result.reason.clone(),
            processing_time: result.processing_time.to_string(),
            model_version: result.model_version.clone(),
            facial_region: if flagged { "SUSPICIOUS" } else { "NORMAL" },
            temporal_consistency: if flagged { "FAILED" } else { "PASSED" },
            neural_artifacts: if flagged { "POSITIVE" } else { "NEGATIVE" },
        }
    }
}

/// Render the analysis report for `hash`.
pub fn render_report(hash: &FileHash, result: &DetectionResult) -> Result<String, ReportError> {
    let mut env = minijinja::Environment::new();
    env.add_template(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE)
        .map_err(|e| ReportError::Template(e.to_string()))?;

    let template = env
        .get_template(REPORT_TEMPLATE_NAME)
        .map_err(|e| ReportError::Template(e.to_string()))?;

    template
        .render(ReportFields::new(hash, result))
        .map_err(|e| ReportError::Render(e.to_string()))
}
