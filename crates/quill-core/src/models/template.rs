//! Note templates
//!
//! Named presets that seed a new note's title and content.

/// A starting-point preset for new notes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    Academic,
    Work,
    Personal,
}

impl Template {
    /// All available templates
    pub const ALL: [Self; 3] = [Self::Academic, Self::Work, Self::Personal];

    /// Template key as used on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Academic => "academic",
            Self::Work => "work",
            Self::Personal => "personal",
        }
    }

    /// Seed title for notes created from this template
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Academic => "Academic Notes",
            Self::Work => "Work Notes",
            Self::Personal => "Personal Notes",
        }
    }

    /// Seed content for notes created from this template
    #[must_use]
    pub const fn content(self) -> &'static str {
        match self {
            Self::Academic => "## Topic\n\n## Key Concepts\n\n## Summary\n\n## References",
            Self::Work => "## Project\n\n## Tasks\n\n## Deadlines\n\n## Action Items",
            Self::Personal => "## Date\n\n## Thoughts\n\n## Goals\n\n## Reflections",
        }
    }
}
