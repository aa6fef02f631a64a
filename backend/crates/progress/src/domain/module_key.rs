//! Module Keys
//!
//! The four game modules, each owning one slot in an account's
//! progress map.

use std::fmt;
use std::str::FromStr;

/// Identifies one game module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKey {
    Groot,
    Stark,
    Spiderman,
    DrStrange,
}

/// All module keys, in route order
pub const ALL_MODULES: [ModuleKey; 4] = [
    ModuleKey::Groot,
    ModuleKey::Stark,
    ModuleKey::Spiderman,
    ModuleKey::DrStrange,
];

impl ModuleKey {
    /// Storage/route key for this module
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKey::Groot => "groot",
            ModuleKey::Stark => "stark",
            ModuleKey::Spiderman => "spiderman",
            ModuleKey::DrStrange => "drstrange",
        }
    }
}

impl fmt::Display for ModuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleKey {
    type Err = ();

    /// Route keys are lowercase and exact; anything else is not a module.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "groot" => Ok(ModuleKey::Groot),
            "stark" => Ok(ModuleKey::Stark),
            "spiderman" => Ok(ModuleKey::Spiderman),
            "drstrange" => Ok(ModuleKey::DrStrange),
            _ => Err(()),
        }
    }
}
