use std::fmt;

use serde::{Deserialize, Serialize};

/// Language prefix recognized in non-ACE project names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    Russian,
    Spanish,
}

impl Language {
    pub fn prefix(&self) -> &'static str {
        match self {
            Language::Russian => "russian-",
            Language::Spanish => "spanish-",
        }
    }

    /// Corpus name used in statistics output.
    pub fn corpus(&self) -> &'static str {
        match self {
            Language::Russian => "Russian",
            Language::Spanish => "Spanish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.corpus())
    }
}

/// A project/directory name decomposed into its naming convention.
///
/// The variants are tried in a fixed precedence order by the ingest layer:
/// ACE, then CORD-19, then a language-prefixed name, then the standard
/// `Type.Subtype-user` form. A name that matches none of them, or that
/// yields a blank user or event type, is a hard parse error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectName {
    /// `ACE-<Type>.<Subtype>[-<extra>]-<user>`, e.g. `ACE-Conflict.Attack-gabbard`.
    Ace { event_type: String, user: String },

    /// `CORD19-<RelationType>-<user>`.
    Cord19 { relation_type: String, user: String },

    /// `russian-Conflict.Attack-ivanova` and friends.
    LanguagePrefixed {
        language: Language,
        event_type: String,
        user: String,
    },

    /// `Conflict.Attack-gabbard` with no corpus marker; corpus is English.
    Standard { event_type: String, user: String },
}

impl ProjectName {
    pub fn user(&self) -> &str {
        match self {
            ProjectName::Ace { user, .. }
            | ProjectName::Cord19 { user, .. }
            | ProjectName::LanguagePrefixed { user, .. }
            | ProjectName::Standard { user, .. } => user,
        }
    }

    /// The event (or relation) type the project annotates.
    pub fn event_type(&self) -> &str {
        match self {
            ProjectName::Ace { event_type, .. } => event_type,
            ProjectName::Cord19 { relation_type, .. } => relation_type,
            ProjectName::LanguagePrefixed { event_type, .. } => event_type,
            ProjectName::Standard { event_type, .. } => event_type,
        }
    }

    /// Corpus grouping used in the statistics maps.
    pub fn corpus(&self) -> &'static str {
        match self {
            ProjectName::Ace { .. } => "ACE",
            ProjectName::Cord19 { .. } => "CORD-19",
            ProjectName::LanguagePrefixed { language, .. } => language.corpus(),
            ProjectName::Standard { .. } => "English",
        }
    }

    pub fn is_ace(&self) -> bool {
        matches!(self, ProjectName::Ace { .. })
    }
}
