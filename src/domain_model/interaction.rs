use super::adventure::Adventure;
use serde::Serialize;
use std::fmt;

/// A named relation between a player and an adventure. The three kinds are
/// behaviorally identical; everything downstream is parametrized over this
/// enum so they cannot drift apart. On the wire a kind only ever appears as a
/// path segment, parsed through `FromStr`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum InteractionKind {
    Favorite,
    Like,
    Save,
}

impl InteractionKind {
    pub const ALL: [InteractionKind; 3] = [
        InteractionKind::Favorite,
        InteractionKind::Like,
        InteractionKind::Save,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionKind::Favorite => "favorite",
            InteractionKind::Like => "like",
            InteractionKind::Save => "save",
        }
    }

    /// Table holding this relation. `like` is a reserved word in MySQL, so
    /// all three tables carry the `adventure_` prefix.
    pub fn table(&self) -> &'static str {
        match self {
            InteractionKind::Favorite => "adventure_favorite",
            InteractionKind::Like => "adventure_like",
            InteractionKind::Save => "adventure_save",
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            InteractionKind::Favorite => "favorited",
            InteractionKind::Like => "liked",
            InteractionKind::Save => "saved",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown interaction kind: {0}")]
pub struct UnknownInteractionKind(String);

impl std::str::FromStr for InteractionKind {
    type Err = UnknownInteractionKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "favorite" => Ok(InteractionKind::Favorite),
            "like" => Ok(InteractionKind::Like),
            "save" => Ok(InteractionKind::Save),
            other => Err(UnknownInteractionKind(other.to_string())),
        }
    }
}

/// Aggregate of one player's interacted adventures, one sequence per kind in
/// interaction insertion order. Sequences are always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserInteractions {
    pub favorites: Vec<Adventure>,
    pub likes: Vec<Adventure>,
    pub saves: Vec<Adventure>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_kind_from_path_segment() {
        for kind in InteractionKind::ALL {
            assert_eq!(kind.as_str().parse::<InteractionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn rejects_unknown_kind() {
        assert!("superlike".parse::<InteractionKind>().is_err());
    }

    #[test]
    fn past_tense_matches_wire_messages() {
        assert_eq!(InteractionKind::Favorite.past_tense(), "favorited");
        assert_eq!(InteractionKind::Like.past_tense(), "liked");
        assert_eq!(InteractionKind::Save.past_tense(), "saved");
    }
}
