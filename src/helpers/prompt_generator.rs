use crate::config::constants::CODE_PLACEHOLDER;
use crate::constants::prompts::REVIEW_PROMPT;

/// Builds the review prompt, embedding `code` verbatim.
///
/// `template` overrides the built-in prompt when set. Only the first
/// placeholder in the template is substituted.
pub fn generate_review_prompt(code: &str, template: Option<&str>) -> String {
    let template = template.unwrap_or(REVIEW_PROMPT);
    template.replacen(CODE_PLACEHOLDER, code, 1)
}
