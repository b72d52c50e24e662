//! Canned responses used when no API key is available or a request fails.
//!
//! The demo payload describes a JavaScript tutorial, so the canned texts do
//! too. All tables are immutable and process-wide.

use std::time::Duration;

/// Delay before returning the canned summary, imitating a round-trip.
pub const SUMMARY_FALLBACK_DELAY: Duration = Duration::from_millis(1000);

/// Delay before returning a canned answer, imitating a round-trip.
pub const ANSWER_FALLBACK_DELAY: Duration = Duration::from_millis(800);

/// Static substring-to-answer lookup used when no model call is made.
pub struct FallbackTable {
    entries: &'static [(&'static str, &'static str)],
    default: &'static str,
}

impl FallbackTable {
    pub const fn new(
        entries: &'static [(&'static str, &'static str)],
        default: &'static str,
    ) -> Self {
        Self { entries, default }
    }

    /// Resolve a question to a canned answer.
    ///
    /// Keys are matched as case-insensitive substrings of the question, in
    /// declaration order; the first match wins. Questions matching no key
    /// get the default entry.
    pub fn lookup(&self, question: &str) -> &'static str {
        let question = question.to_lowercase();
        self.entries
            .iter()
            .find(|(key, _)| question.contains(&key.to_lowercase()))
            .map(|(_, answer)| *answer)
            .unwrap_or(self.default)
    }

    /// The entry returned when no key matches.
    pub fn default_answer(&self) -> &'static str {
        self.default
    }
}

/// Summary shown when the model is unavailable.
pub const MOCK_SUMMARY: &str = "This comprehensive tutorial covers modern JavaScript features that every developer should know in 2023. \n\
\n\
The video begins with an overview of ES6+ syntax improvements, highlighting how these changes have made JavaScript code more concise and readable. It explains arrow functions, template literals, and the let/const declarations that have replaced var in modern codebases.\n\
\n\
Next, the tutorial dives into async/await patterns, demonstrating how they simplify asynchronous code compared to traditional promises and callback approaches. The presenter provides practical examples of fetching data from APIs and handling responses cleanly.\n\
\n\
The video also covers modern array methods like map, filter, reduce, and the spread operator, showing how they enable more functional programming approaches. Destructuring assignments for both objects and arrays are explained with clear examples of how they reduce boilerplate code.\n\
\n\
Finally, the tutorial explores newer JavaScript features like optional chaining and nullish coalescing operators, explaining how they help prevent common runtime errors when dealing with potentially undefined values.\n\
\n\
Throughout the video, practical code examples are shown to illustrate each concept, making it easy for viewers to understand how to apply these techniques in their own projects.";

/// Canned Q&A responses.
pub static MOCK_ANSWERS: FallbackTable = FallbackTable::new(
    &[
        (
            "What are arrow functions?",
            "Arrow functions are a concise syntax for writing function expressions in JavaScript. They use the => syntax and automatically bind this to the surrounding code's context. The video explains that arrow functions are particularly useful for callbacks and when you want to preserve the lexical this binding.",
        ),
        (
            "How does async/await work?",
            "Async/await is a syntax for handling asynchronous operations in JavaScript. The video explains that the 'async' keyword is used to define a function that returns a Promise, and the 'await' keyword is used inside async functions to pause execution until a Promise is resolved. This makes asynchronous code look and behave more like synchronous code, improving readability and error handling.",
        ),
        (
            "What is destructuring?",
            "Destructuring is a JavaScript syntax that allows you to extract values from arrays or properties from objects into distinct variables. The video demonstrates how destructuring can significantly reduce code verbosity when working with complex data structures.",
        ),
        (
            "What is optional chaining?",
            "Optional chaining is a feature introduced in modern JavaScript that allows you to access deeply nested object properties without worrying about whether intermediate nodes exist. The video shows how the ?. operator prevents errors when accessing properties of potentially undefined objects.",
        ),
    ],
    "Based on the video transcript, this topic wasn't covered in detail. The video primarily focuses on ES6+ syntax, async/await, modern array methods, destructuring, and optional chaining. Would you like me to explain any of these topics instead?",
);

/// Returned by `answer` when a real model call was attempted and failed.
pub const ANSWER_FAILURE_FALLBACK: &str = "I'm sorry, I couldn't process that question. Based on the video content, it appears to cover modern JavaScript features including ES6+ syntax, async/await, and various other improvements that make JavaScript code more concise and powerful.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let answer = MOCK_ANSWERS.lookup("could you tell me WHAT ARE ARROW FUNCTIONS? thanks");
        assert!(answer.starts_with("Arrow functions are a concise syntax"));
    }

    #[test]
    fn unknown_question_gets_default() {
        let answer = MOCK_ANSWERS.lookup("asdkjasd");
        assert_eq!(answer, MOCK_ANSWERS.default_answer());
    }

    #[test]
    fn first_declared_key_wins_on_ties() {
        let table = FallbackTable::new(&[("alpha", "first"), ("beta", "second")], "none");
        assert_eq!(table.lookup("alpha and beta in one question"), "first");
        // Reversed declaration order flips the winner.
        let reversed = FallbackTable::new(&[("beta", "second"), ("alpha", "first")], "none");
        assert_eq!(reversed.lookup("alpha and beta in one question"), "second");
    }
}
