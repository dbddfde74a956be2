//! # Deepfake detection agent
//!
//! Routes each conversation turn by its latest message:
//!
//! ```text
//! messages
//!     ↓
//! [classify] ── empty ──────────────→ welcome text
//!     │
//!     ├── analyze / detect / file_hash: → FileHash → mock analyzer → report
//!     │
//!     └── anything else ─────────────→ persona + history → completion service
//! ```

pub mod agent;
pub mod error;
pub mod intent;
pub mod persona;

pub use agent::{AgentTurn, DeepfakeAgent, NextStep, analysis_reply};
pub use error::AgentError;
pub use intent::{ANALYSIS_KEYWORDS, Intent, classify, classify_text};
pub use persona::{PERSONA_PROMPT, persona_message, with_persona};
