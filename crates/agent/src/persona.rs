use deepfake_core::Message;

/// System instruction prepended to every conversational completion request.
pub const PERSONA_PROMPT: &str = concat!(
    "You are an autonomous AI agent specialized in deepfake detection. \n",
    "        You analyze media files (images/videos) to detect synthetic or manipulated content.\n",
    "        \n",
    "        When a user uploads a file, you will:\n",
    "        1. Acknowledge the file receipt\n",
    "        2. Perform deepfake analysis \n",
    "        3. Return structured results with confidence scores\n",
    "        4. Store results on NEAR blockchain\n",
    "        \n",
    "        Always be professional and explain your findings clearly.",
);

pub fn persona_message() -> Message {
    Message::system(PERSONA_PROMPT)
}

/// The history as sent to the completion service: persona first, then every
/// message unchanged.
pub fn with_persona(messages: &[Message]) -> Vec<Message> {
    let mut request = Vec::with_capacity(messages.len() + 1);
    request.push(persona_message());
    request.extend_from_slice(messages);
    request
}
