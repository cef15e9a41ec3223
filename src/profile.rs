// Profile data model
//
// The page content: who the card is about, how to reach them, and what they
// care about. Loaded from the [profile] section of the config file; a sample
// profile stands in until the user fills one out.

use serde::{Deserialize, Serialize};

/// One interest card: a title, a short summary for the grid, and detail
/// lines shown when the card is expanded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestCard {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub details: Vec<String>,
}

/// The whole personal card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub email: String,
    #[serde(default)]
    pub interests: Vec<InterestCard>,
}

impl Profile {
    /// Placeholder profile used when the config file carries no [profile]
    /// section. Doubles as the template written into a fresh config.
    pub fn sample() -> Self {
        Self {
            name: "Your Name".to_string(),
            tagline: "Math · Computer Science · AI coding".to_string(),
            email: "you@example.com".to_string(),
            interests: vec![
                InterestCard {
                    title: "Mathematics".to_string(),
                    summary: "Proofs, puzzles, and the occasional olympiad problem".to_string(),
                    details: vec![
                        "Number theory and combinatorics".to_string(),
                        "Working through analysis one counterexample at a time".to_string(),
                    ],
                },
                InterestCard {
                    title: "Computer Science".to_string(),
                    summary: "Systems, languages, and how things actually run".to_string(),
                    details: vec![
                        "Compilers and runtime internals".to_string(),
                        "Terminal tooling (you are looking at some)".to_string(),
                    ],
                },
                InterestCard {
                    title: "AI Coding".to_string(),
                    summary: "Building with and around language models".to_string(),
                    details: vec![
                        "Agent workflows and evaluation".to_string(),
                        "Small tools that make models more useful".to_string(),
                    ],
                },
            ],
        }
    }

    /// Serialize the profile as pretty JSON for the copy-profile action.
    /// Returns None (with a log line) instead of failing the caller.
    pub fn to_json(&self) -> Option<String> {
        match serde_json::to_string_pretty(self) {
            Ok(json) => Some(json),
            Err(e) => {
                tracing::warn!("could not serialize profile: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_profile_is_complete() {
        let profile = Profile::sample();
        assert!(!profile.name.is_empty());
        assert!(profile.email.contains('@'));
        assert_eq!(profile.interests.len(), 3);
        for card in &profile.interests {
            assert!(!card.title.is_empty());
            assert!(!card.summary.is_empty());
        }
    }

    #[test]
    fn profile_exports_json() {
        let json = Profile::sample().to_json().expect("sample serializes");
        assert!(json.contains("\"email\""));
        assert!(json.contains("you@example.com"));
    }

    #[test]
    fn interest_card_details_default_empty() {
        let card: InterestCard =
            toml::from_str("title = \"T\"\nsummary = \"S\"").expect("parses without details");
        assert!(card.details.is_empty());
    }
}
