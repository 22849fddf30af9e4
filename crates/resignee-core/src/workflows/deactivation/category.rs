use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// IT systems whose accounts are deactivated for every resignee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeactivationCategory {
    BatchUm,
    ThirdParty,
    Email,
    Windows,
}

impl DeactivationCategory {
    pub const fn ordered() -> [Self; 4] {
        [Self::BatchUm, Self::ThirdParty, Self::Email, Self::Windows]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::BatchUm => "Batch UM",
            Self::ThirdParty => "Third Party",
            Self::Email => "E-mail",
            Self::Windows => "Windows",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::BatchUm => "batch_um",
            Self::ThirdParty => "third_party",
            Self::Email => "email",
            Self::Windows => "windows",
        }
    }
}

impl fmt::Display for DeactivationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown deactivation category '{0}' (expected batch_um, third_party, email or windows)")]
pub struct CategoryParseError(pub String);

impl FromStr for DeactivationCategory {
    type Err = CategoryParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "batch_um" | "um" | "batch" => Ok(Self::BatchUm),
            "third_party" | "tp" => Ok(Self::ThirdParty),
            "email" | "e_mail" => Ok(Self::Email),
            "windows" | "win" => Ok(Self::Windows),
            _ => Err(CategoryParseError(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_and_display_spellings() {
        assert_eq!("BATCH_UM".parse(), Ok(DeactivationCategory::BatchUm));
        assert_eq!("Third Party".parse(), Ok(DeactivationCategory::ThirdParty));
        assert_eq!("e-mail".parse(), Ok(DeactivationCategory::Email));
        assert_eq!(" windows ".parse(), Ok(DeactivationCategory::Windows));
    }

    #[test]
    fn rejects_unknown_categories() {
        let error = "vpn".parse::<DeactivationCategory>().expect_err("vpn is not tracked");
        assert_eq!(error, CategoryParseError("vpn".to_string()));
    }

    #[test]
    fn keys_match_serde_names() {
        for category in DeactivationCategory::ordered() {
            let json = serde_json::to_string(&category).expect("category serializes");
            assert_eq!(json, format!("\"{}\"", category.key()));
        }
    }
}
