//! Keyword-to-anchor routing for the search overlay.
//!
//! Dispatch is a fixed ordered table of (trigger substrings, target) pairs
//! evaluated first-match-wins over the lowercased query. The table is data;
//! the overlay state machine lives alongside it so both can be exercised
//! without a browser.

/// Simulated "thinking" delay before a submitted query resolves.
pub const SEARCH_DELAY_MS: f64 = 1500.0;

/// The fixed set of page-section anchors. The header nav derives from
/// [`NavTarget::ALL`], so navigation and routing share one source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Home,
    Skills,
    Experience,
    Resume,
    About,
    Contact,
}

impl NavTarget {
    pub const ALL: [NavTarget; 6] = [
        NavTarget::Home,
        NavTarget::Skills,
        NavTarget::Experience,
        NavTarget::Resume,
        NavTarget::About,
        NavTarget::Contact,
    ];

    /// The URL fragment / section element id.
    pub fn fragment(self) -> &'static str {
        match self {
            NavTarget::Home => "home",
            NavTarget::Skills => "skills",
            NavTarget::Experience => "experience",
            NavTarget::Resume => "resume",
            NavTarget::About => "about",
            NavTarget::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavTarget::Home => "Home",
            NavTarget::Skills => "Skills",
            NavTarget::Experience => "Experience",
            NavTarget::Resume => "Resume",
            NavTarget::About => "About",
            NavTarget::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.fragment())
    }
}

pub struct KeywordRule {
    pub triggers: &'static [&'static str],
    pub target: NavTarget,
}

/// First matching rule wins. Contact precedes About so that queries like
/// "about your contact details" land on the contact section.
pub const RULES: &[KeywordRule] = &[
    KeywordRule {
        triggers: &["skill", "network", "support"],
        target: NavTarget::Skills,
    },
    KeywordRule {
        triggers: &["education", "experience", "master"],
        target: NavTarget::Experience,
    },
    KeywordRule {
        triggers: &["contact", "email", "call"],
        target: NavTarget::Contact,
    },
    KeywordRule {
        triggers: &["resume", "cv"],
        target: NavTarget::Resume,
    },
    KeywordRule {
        triggers: &["about", "profile"],
        target: NavTarget::About,
    },
];

/// Case-insensitive substring containment over the ordered rule table.
/// An unmatched query is not an error; it resolves to the home anchor.
pub fn route_query(query: &str) -> NavTarget {
    let query = query.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.triggers.iter().any(|t| query.contains(t)))
        .map(|rule| rule.target)
        .unwrap_or(NavTarget::Home)
}

/// Lifecycle of the search overlay. Submission of an empty or
/// whitespace-only query is a no-op; a pending search resolves exactly
/// once; skip dismisses from any phase without evaluating input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Prompt,
    Searching,
    Dismissed,
}

impl SearchPhase {
    /// Returns true when the submission was accepted and the simulated
    /// delay should start.
    pub fn submit(&mut self, query: &str) -> bool {
        if *self != SearchPhase::Prompt || query.trim().is_empty() {
            return false;
        }
        *self = SearchPhase::Searching;
        true
    }

    /// Completes a pending search, yielding the routed target.
    pub fn resolve(&mut self, query: &str) -> Option<NavTarget> {
        if *self != SearchPhase::Searching {
            return None;
        }
        *self = SearchPhase::Dismissed;
        Some(route_query(query))
    }

    pub fn skip(&mut self) {
        *self = SearchPhase::Dismissed;
    }

    pub fn is_searching(self) -> bool {
        self == SearchPhase::Searching
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_triggers() {
        for query in ["skill", "Tell me about your SKILLS", "networking", "customer support"] {
            assert_eq!(route_query(query), NavTarget::Skills, "query: {query}");
        }
    }

    #[test]
    fn test_experience_triggers() {
        assert_eq!(route_query("what is your education?"), NavTarget::Experience);
        assert_eq!(route_query("work experience"), NavTarget::Experience);
        assert_eq!(route_query("tell me about education and master's"), NavTarget::Experience);
    }

    #[test]
    fn test_contact_wins_over_about() {
        // "about" also appears in the query; the contact rule is ordered first
        assert_eq!(
            route_query("I'd like to know about your contact details"),
            NavTarget::Contact
        );
        assert_eq!(route_query("how do I email you"), NavTarget::Contact);
        assert_eq!(route_query("can I call you"), NavTarget::Contact);
    }

    #[test]
    fn test_resume_and_about_triggers() {
        assert_eq!(route_query("show me your resume"), NavTarget::Resume);
        assert_eq!(route_query("CV please"), NavTarget::Resume);
        assert_eq!(route_query("tell me about yourself"), NavTarget::About);
        assert_eq!(route_query("your profile"), NavTarget::About);
    }

    #[test]
    fn test_unmatched_defaults_to_home() {
        assert_eq!(route_query("what's the weather like"), NavTarget::Home);
        assert_eq!(route_query(""), NavTarget::Home);
        assert_eq!(route_query("xyzzy"), NavTarget::Home);
    }

    #[test]
    fn test_routing_is_deterministic() {
        let query = "skills and experience and contact";
        let first = route_query(query);
        assert_eq!(route_query(query), first);
        // skills rule is first in the table
        assert_eq!(first, NavTarget::Skills);
    }

    #[test]
    fn test_every_rule_target_is_reachable() {
        for rule in RULES {
            for trigger in rule.triggers {
                assert_eq!(route_query(trigger), rule.target, "trigger: {trigger}");
            }
        }
    }

    #[test]
    fn test_empty_submission_is_a_noop() {
        let mut phase = SearchPhase::default();
        assert!(!phase.submit(""));
        assert!(!phase.submit("   \t  "));
        assert_eq!(phase, SearchPhase::Prompt);
    }

    #[test]
    fn test_submit_then_resolve() {
        let mut phase = SearchPhase::default();
        assert!(phase.submit("contact me"));
        assert!(phase.is_searching());
        // a second submission while searching is rejected
        assert!(!phase.submit("skills"));
        assert_eq!(phase.resolve("contact me"), Some(NavTarget::Contact));
        assert_eq!(phase, SearchPhase::Dismissed);
        // a stale timer firing after dismissal resolves nothing
        assert_eq!(phase.resolve("contact me"), None);
    }

    #[test]
    fn test_resolve_without_pending_search() {
        let mut phase = SearchPhase::default();
        assert_eq!(phase.resolve("skills"), None);
        assert_eq!(phase, SearchPhase::Prompt);
    }

    #[test]
    fn test_skip_dismisses_from_any_phase() {
        let mut phase = SearchPhase::default();
        phase.skip();
        assert_eq!(phase, SearchPhase::Dismissed);

        let mut phase = SearchPhase::default();
        assert!(phase.submit("skills"));
        phase.skip();
        assert_eq!(phase, SearchPhase::Dismissed);
        assert_eq!(phase.resolve("skills"), None);
    }

    #[test]
    fn test_nav_targets_and_fragments_line_up() {
        let fragments: Vec<_> = NavTarget::ALL.iter().map(|t| t.fragment()).collect();
        assert_eq!(
            fragments,
            ["home", "skills", "experience", "resume", "about", "contact"]
        );
    }
}
