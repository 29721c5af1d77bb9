use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Which of the exactly two fixed users paid. The two-party world is a hard
/// invariant of the balance math, so the payer is a closed sum type rather
/// than a free-form id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Payer {
    #[serde(rename = "user_a")]
    A,
    #[serde(rename = "user_b")]
    B,
}

impl Payer {
    pub fn other(self) -> Payer {
        match self {
            Payer::A => Payer::B,
            Payer::B => Payer::A,
        }
    }
}

/// Display identity for one of the two users. Color is attribution-only and
/// never affects balance math.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Payer,
    pub name: String,
    pub color: String,
}

impl User {
    pub fn new(id: Payer, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }
}

/// The fixed pair of users, established at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPair {
    pub a: User,
    pub b: User,
}

impl UserPair {
    pub fn new(a: User, b: User) -> Self {
        debug_assert_eq!(a.id, Payer::A);
        debug_assert_eq!(b.id, Payer::B);
        Self { a, b }
    }

    pub fn get(&self, payer: Payer) -> &User {
        match payer {
            Payer::A => &self.a,
            Payer::B => &self.b,
        }
    }
}

static DEFAULT_USERS: Lazy<UserPair> = Lazy::new(|| {
    UserPair::new(
        User::new(Payer::A, "Djalma", "#10B981"),
        User::new(Payer::B, "Cassia", "#3B82F6"),
    )
});

impl Default for UserPair {
    fn default() -> Self {
        DEFAULT_USERS.clone()
    }
}
