use serde::Serialize;
use std::fmt;

/// Closed set of skill categories accepted by the catalog.
///
/// The string values are the canonical capitalized forms stored in the
/// database and sent over the wire; anything else is rejected at the
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Technical,
    Creative,
    Mentorship,
    MusicAndDance,
    PrimaryAndSecondary,
    Competition,
    More,
    Finance,
    Hardware,
    Gaming,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Technical,
        Category::Creative,
        Category::Mentorship,
        Category::MusicAndDance,
        Category::PrimaryAndSecondary,
        Category::Competition,
        Category::More,
        Category::Finance,
        Category::Hardware,
        Category::Gaming,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Technical => "Technical",
            Category::Creative => "Creative",
            Category::Mentorship => "Mentorship",
            Category::MusicAndDance => "Music and Dance",
            Category::PrimaryAndSecondary => "Primary and Secondary",
            Category::Competition => "Competition",
            Category::More => "More",
            Category::Finance => "Finance",
            Category::Hardware => "Hardware",
            Category::Gaming => "Gaming",
        }
    }

    /// Exact, case-sensitive match against the canonical strings.
    pub fn parse(value: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.as_str() == value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Incoming category strings go through `Category::parse` so their failure
// message stays under this crate's control; only serialization happens via
// serde.
impl Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
