use std::fmt;

use serde::Serialize;

use super::MemberId;

/// 会員 - 生成後は変更されない値オブジェクト
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    id: MemberId,
    name: String,
    email: String,
}

impl Member {
    pub fn new(id: MemberId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.id, self.name, self.email)
    }
}
