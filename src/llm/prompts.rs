/// System prompt for the translation stage
pub const TRANSLATOR_SYSTEM_PROMPT: &str = "You are a professional literary translator. \
     Translate English fiction into Russian preserving nuance and tone.";

/// System prompt for the editing stage
pub const EDITOR_SYSTEM_PROMPT: &str = "You are a Russian literary editor. \
     Improve style and readability while keeping the author's voice.";

/// System prompt for the proofreading stage
pub const PROOFREADER_SYSTEM_PROMPT: &str = "You are a meticulous Russian proofreader. \
     Correct grammar, spelling and punctuation while preserving style.";

/// Build the user prompt for the translation stage
pub fn build_translator_prompt(text: &str) -> String {
    format!(
        "Translate the following English text into Russian and respond only with the translation:\n\n{text}"
    )
}

/// Build the user prompt for the editing stage
pub fn build_editor_prompt(text: &str) -> String {
    format!(
        "Edit the following Russian text for style and readability, keeping the author's voice. \
         Respond only with the edited text:\n\n{text}"
    )
}

/// Build the user prompt for the proofreading stage.
/// The text is passed through unchanged; the system prompt alone
/// constrains the output. This asymmetry is deliberate.
pub fn build_proofreader_prompt(text: &str) -> String {
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translator_prompt_wraps_input() {
        let prompt = build_translator_prompt("The sea was calm.");
        assert!(prompt.starts_with("Translate the following English text into Russian"));
        assert!(prompt.ends_with("The sea was calm."));
    }

    #[test]
    fn test_editor_prompt_wraps_input() {
        let prompt = build_editor_prompt("Море было спокойно.");
        assert!(prompt.starts_with("Edit the following Russian text"));
        assert!(prompt.ends_with("Море было спокойно."));
    }

    #[test]
    fn test_proofreader_prompt_is_raw_input() {
        assert_eq!(build_proofreader_prompt("Море было спокойно."), "Море было спокойно.");
        assert_eq!(build_proofreader_prompt(""), "");
    }
}
