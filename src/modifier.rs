//! Access markers attached to every guard node.

/// Controls a field's presence semantics and carries the readonly flag.
///
/// Only the optional bit changes validation: an optional field whose key is
/// absent passes without running its guard. Readonly is a declaration-level
/// marker for schema tooling and has no effect at check time.
///
/// The unmarked default is [`Required`](Self::Required); the other markers
/// map to the schema tokens `?`, `r` and `r?`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// Unmarked: key must be present and pass its guard.
    #[default]
    Required,
    /// `?`: an absent key passes without running the guard.
    Optional,
    /// `r`: readonly, presence semantics of [`Required`](Self::Required).
    Readonly,
    /// `r?`: readonly, presence semantics of [`Optional`](Self::Optional).
    ReadonlyOptional,
}

impl Modifier {
    /// True for the two markers that let an absent key pass.
    pub fn is_optional(self) -> bool {
        matches!(self, Self::Optional | Self::ReadonlyOptional)
    }

    /// True for the two readonly markers.
    pub fn is_readonly(self) -> bool {
        matches!(self, Self::Readonly | Self::ReadonlyOptional)
    }

    /// The schema token for this marker; the required default renders as
    /// the empty string.
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Required => "",
            Self::Optional => "?",
            Self::Readonly => "r",
            Self::ReadonlyOptional => "r?",
        }
    }

    /// Parse a schema token, with the empty string as the unmarked
    /// required case. Unknown tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "" => Some(Self::Required),
            "?" => Some(Self::Optional),
            "r" => Some(Self::Readonly),
            "r?" => Some(Self::ReadonlyOptional),
            _ => None,
        }
    }
}
