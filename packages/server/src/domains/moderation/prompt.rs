/// Fields of a submission the moderator gets to see.
#[derive(Debug, Clone, Copy)]
pub struct ModerationInput<'a> {
    pub project_name: &'a str,
    pub creator_name: &'a str,
    pub description: &'a str,
    pub project_url: Option<&'a str>,
}

/// Build the single-message moderation prompt.
pub fn build_moderation_prompt(input: &ModerationInput<'_>) -> String {
    format!(
        r#"You are a content moderator for a community showcase website featuring projects built with AI assistance.

Review this submission and determine if it should be approved or rejected.

REJECT if ANY of these apply:
- Contains profanity, slurs, hate speech, or offensive language
- Appears to be spam, advertising, or trolling
- Contains suspicious, malicious, or phishing links
- Is clearly not a real project (gibberish, test submission, jokes)
- Contains harmful, illegal, violent, or sexually inappropriate content
- Promotes scams or fraudulent activity
- Is a duplicate or very low-effort submission

APPROVE if:
- It appears to be a legitimate project built with AI assistance
- The description makes sense and describes an actual project
- Even simple or small projects are fine if they're genuine

Submission to review:
- Project Name: {name}
- Creator: {creator}
- Description: {description}
- URL: {url}

Respond with ONLY a JSON object in this exact format, no other text:
{{"approved": true, "reason": "brief reason"}}
or
{{"approved": false, "reason": "brief reason why rejected"}}"#,
        name = input.project_name,
        creator = input.creator_name,
        description = input.description,
        url = input.project_url.unwrap_or("Not provided"),
    )
}
