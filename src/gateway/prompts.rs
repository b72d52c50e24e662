//! Prompt construction for the text-generation gateway.

/// System instruction for summary generation.
pub const SUMMARY_SYSTEM_PROMPT: &str = "You are an AI assistant that summarizes video content. Provide a concise, informative summary that captures the main points of the video.";

/// System instruction for transcript Q&A.
pub const ANSWER_SYSTEM_PROMPT: &str = "You are an AI assistant that answers questions about video content. Use the provided transcript to give accurate, helpful answers. If the answer cannot be found in the transcript, acknowledge this limitation.";

/// Build the task prompt for summarizing a transcript.
pub fn build_summary_prompt(transcript: &str) -> String {
    format!(
        "Summarize the following video transcript in a comprehensive way, highlighting the key points and main takeaways:\n\
\n\
{transcript}"
    )
}

/// Build the task prompt for answering a question about a transcript.
pub fn build_answer_prompt(question: &str, transcript: &str) -> String {
    format!(
        "Based on the following video transcript, answer this question: \"{question}\"\n\
\n\
Transcript: {transcript}"
    )
}
