use std::sync::LazyLock;

use regex::Regex;

use annotrace_types::{Language, ProjectName};

use crate::{Error, Result};

/// Substrings that mark a project as scratch/demo material rather than real
/// annotation work. Such projects are excluded from every scan.
pub const BANNED_NAME_PARTS: [&str; 3] = ["copy_of", "sandbox", "test"];

/// ACE project names keep the corpus marker inside the event type:
/// `ACE-Conflict.Attack-gabbard`, `ACE-Business.Declare-Bankruptcy-gabbard`.
static ACE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(ACE-[A-Za-z]+\.[A-Za-z]+(?:-[A-Za-z]+)?)-(.+)$").unwrap()
});

/// `CORD19-<RelationType>-<user>`, e.g. `CORD19-Symptom-gabbard`.
static CORD19_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(CORD19-[A-Za-z]+)-(.+)$").unwrap());

/// Dotted event type plus trailing user: `Conflict.Attack-gabbard`,
/// `Medical-Emergency.Rescue-ivanova`. Applied after any language prefix
/// has been stripped.
static STANDARD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+(?:-[A-Za-z]+)?(?:\.[A-Za-z]+)+)-(.+)$").unwrap()
});

/// True when a project name contains a banned marker and should be skipped
/// entirely (not an error; the project simply does not count).
pub fn is_banned(name: &str) -> bool {
    BANNED_NAME_PARTS.iter().any(|part| name.contains(part))
}

/// Decompose a project/directory name into its naming convention.
///
/// Conventions are tried in precedence order: ACE, CORD-19, language
/// prefix, standard. A name matching none of them is a hard error; callers
/// must never proceed with a blank user or event type.
pub fn parse(name: &str) -> Result<ProjectName> {
    if let Some(caps) = ACE_PATTERN.captures(name) {
        return Ok(ProjectName::Ace {
            event_type: caps[1].to_string(),
            user: caps[2].to_string(),
        });
    }

    if name.contains("CORD19") {
        let caps = CORD19_PATTERN
            .captures(name)
            .ok_or_else(|| Error::ProjectName(name.to_string()))?;
        return Ok(ProjectName::Cord19 {
            relation_type: caps[1].to_string(),
            user: caps[2].to_string(),
        });
    }

    let (language, rest) = strip_language_prefix(name);
    let caps = STANDARD_PATTERN
        .captures(rest)
        .ok_or_else(|| Error::ProjectName(name.to_string()))?;
    let event_type = caps[1].to_string();
    let user = caps[2].to_string();

    Ok(match language {
        Some(language) => ProjectName::LanguagePrefixed {
            language,
            event_type,
            user,
        },
        None => ProjectName::Standard { event_type, user },
    })
}

fn strip_language_prefix(name: &str) -> (Option<Language>, &str) {
    for language in [Language::Russian, Language::Spanish] {
        if let Some(rest) = name.strip_prefix(language.prefix()) {
            return (Some(language), rest);
        }
    }
    (None, name)
}
