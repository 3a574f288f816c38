//! Instruction profiles and fixed response texts.

/// System prompt for the classification call. The only valid outputs are
/// the two labels.
pub const CLASSIFIER_SYSTEM_PROMPT: &str = "\
You are an intent classifier. Your job is to classify user input as either 'factual' or 'creative'.

Factual queries include:
- Questions asking for specific information, facts, or data
- Requests for explanations or definitions
- \"Who is...\", \"What is...\", \"When did...\", \"How many...\" type questions
- Technical or academic questions

Creative prompts include:
- Requests to generate stories, poems, or creative writing
- Requests for captions, taglines, or creative descriptions
- \"Write a...\", \"Create a...\", \"Generate a...\" for creative content
- Brainstorming or imaginative requests

Respond with only 'factual' or 'creative'.";

pub const FACTUAL_SYSTEM_PROMPT: &str = "\
You are a knowledgeable assistant that provides accurate, concise answers to factual questions.
Focus on being informative, precise, and helpful. Use the conversation context when relevant.";

pub const CREATIVE_SYSTEM_PROMPT: &str = "\
You are a creative assistant that generates imaginative and engaging content.
Be creative, original, and engaging while staying appropriate. Use the conversation context when relevant.";

pub const FACTUAL_APOLOGY: &str =
    "I apologize, but I encountered an error while processing your question. Please try again.";

pub const CREATIVE_APOLOGY: &str =
    "I apologize, but I encountered an error while generating creative content. Please try again.";

/// Response for empty or whitespace-only input.
pub const INVALID_INPUT_RESPONSE: &str = "Please provide a valid input.";

/// User message for the classification call.
pub fn classifier_user_message(input: &str) -> String {
    format!("Classify this input: '{input}'")
}

/// User message for a generation call: history block, the request, and a
/// closing directive.
pub fn generation_user_message(
    context: &str,
    request_label: &str,
    input: &str,
    directive: &str,
) -> String {
    format!(
        "Context from previous conversation:\n{context}\n\n{request_label}: {input}\n\n{directive}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifier_prompt_names_both_labels() {
        assert!(CLASSIFIER_SYSTEM_PROMPT.contains("'factual'"));
        assert!(CLASSIFIER_SYSTEM_PROMPT.contains("'creative'"));
        assert!(CLASSIFIER_SYSTEM_PROMPT.ends_with("Respond with only 'factual' or 'creative'."));
    }

    #[test]
    fn classifier_message_quotes_input() {
        assert_eq!(
            classifier_user_message("Who is the CEO of Google?"),
            "Classify this input: 'Who is the CEO of Google?'"
        );
    }

    #[test]
    fn generation_message_layout() {
        let msg = generation_user_message(
            "No previous conversation.",
            "Current question",
            "What is the speed of light?",
            "Please provide a direct, factual answer.",
        );
        assert_eq!(
            msg,
            "Context from previous conversation:\nNo previous conversation.\n\n\
             Current question: What is the speed of light?\n\n\
             Please provide a direct, factual answer."
        );
    }

    #[test]
    fn apologies_differ_per_variant() {
        assert_ne!(FACTUAL_APOLOGY, CREATIVE_APOLOGY);
        assert!(FACTUAL_APOLOGY.contains("your question"));
        assert!(CREATIVE_APOLOGY.contains("creative content"));
    }
}
