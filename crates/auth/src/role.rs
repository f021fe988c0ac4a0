use serde::{Deserialize, Deserializer, Serialize};

/// Access class of an authenticated staff member.
///
/// Profile documents store the role as a plain lowercase string. Anything the
/// current build does not recognize decodes to [`Role::Unknown`], which fails
/// open to minimal access (home section only, no queue rows) rather than
/// locking the account out entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Doctor,
    Receptionist,
    Unknown,
}

impl Role {
    pub fn from_role_str(s: &str) -> Self {
        match s {
            "doctor" => Role::Doctor,
            "receptionist" => Role::Receptionist,
            _ => Role::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Doctor => "doctor",
            Role::Receptionist => "receptionist",
            Role::Unknown => "unknown",
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Role::from_role_str(&s))
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
