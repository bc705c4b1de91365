use std::fmt;

/// The four persistence operations a page can drive through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    Create,
    Update,
    Discontinue,
    Activate,
}

impl MutationKind {
    pub const ALL: [MutationKind; 4] = [
        MutationKind::Create,
        MutationKind::Update,
        MutationKind::Discontinue,
        MutationKind::Activate,
    ];

    /// Verb used in success and soft-failure feedback.
    pub fn participle(&self) -> &'static str {
        match self {
            MutationKind::Create => "saved",
            MutationKind::Update => "updated",
            MutationKind::Discontinue => "discontinued",
            MutationKind::Activate => "activated",
        }
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationKind::Create => write!(f, "create"),
            MutationKind::Update => write!(f, "update"),
            MutationKind::Discontinue => write!(f, "discontinue"),
            MutationKind::Activate => write!(f, "activate"),
        }
    }
}
