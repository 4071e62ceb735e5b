//! Greeting — one logged toggle of the tub heater.
//!
//! The name comes from the guestbook the log started out as: every entry has
//! an author, a line of text and a date.

use serde::{Deserialize, Serialize};

use crate::id::GreetingId;
use crate::time::Timestamp;

/// An immutable log entry written each time someone toggles the tub.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Greeting {
    pub id: GreetingId,
    /// Identity of the caller, empty when unknown.
    pub author: String,
    /// Outcome of the toggle (`turned on`, an actuator status, …).
    pub content: String,
    pub date: Timestamp,
}

impl Greeting {
    /// Create a builder for constructing a [`Greeting`].
    #[must_use]
    pub fn builder() -> GreetingBuilder {
        GreetingBuilder::default()
    }

    /// Author to show on the home page.
    #[must_use]
    pub fn display_author(&self) -> &str {
        if self.author.is_empty() {
            "anonymous"
        } else {
            &self.author
        }
    }
}

/// Step-by-step builder for [`Greeting`].
#[derive(Debug, Default)]
pub struct GreetingBuilder {
    id: Option<GreetingId>,
    author: Option<String>,
    content: Option<String>,
    date: Option<Timestamp>,
}

impl GreetingBuilder {
    #[must_use]
    pub fn id(mut self, id: GreetingId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn date(mut self, date: Timestamp) -> Self {
        self.date = Some(date);
        self
    }

    /// Consume the builder and return a [`Greeting`].
    ///
    /// Missing fields fall back to a fresh id, empty strings and the
    /// current time.
    #[must_use]
    pub fn build(self) -> Greeting {
        Greeting {
            id: self.id.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            date: self.date.unwrap_or_else(crate::time::now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::now;

    #[test]
    fn should_build_greeting_with_all_fields() {
        let date = now();
        let greeting = Greeting::builder()
            .author("alice@example.com")
            .content("turned on")
            .date(date)
            .build();

        assert_eq!(greeting.author, "alice@example.com");
        assert_eq!(greeting.content, "turned on");
        assert_eq!(greeting.date, date);
    }

    #[test]
    fn should_use_defaults_when_fields_not_provided() {
        let greeting = Greeting::builder().build();
        assert!(greeting.author.is_empty());
        assert!(greeting.content.is_empty());
    }

    #[test]
    fn should_display_anonymous_when_author_empty() {
        let greeting = Greeting::builder().content("turned off").build();
        assert_eq!(greeting.display_author(), "anonymous");
    }

    #[test]
    fn should_display_author_when_present() {
        let greeting = Greeting::builder().author("bob").build();
        assert_eq!(greeting.display_author(), "bob");
    }

    #[test]
    fn should_serialize_and_deserialize_greeting() {
        let greeting = Greeting::builder().author("bob").content("turned on").build();
        let json = serde_json::to_string(&greeting).unwrap();
        let back: Greeting = serde_json::from_str(&json).unwrap();
        assert_eq!(back, greeting);
    }
}
