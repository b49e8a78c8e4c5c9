//!
//! The fork a `post` expectation set is declared for.
//!

use itertools::Itertools;

///
/// The fork (network) names a fixture may reference.
///
/// The `post` section of a fixture is keyed by these names, and the chain
/// parameters submitted to the client carry them verbatim as the fork rules.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fork {
    Frontier,
    Homestead,
    EIP150,
    EIP158,
    Byzantium,
    Constantinople,
    ConstantinopleFix,
    Istanbul,
    Berlin,
    London,
    Paris,
    Shanghai,
    Cancun,
    /// The transition networks switch rules at block 5.
    FrontierToHomesteadAt5,
    HomesteadToEIP150At5,
    HomesteadToDaoAt5,
    EIP158ToByzantiumAt5,
    BerlinToLondonAt5,
}

impl Fork {
    /// All known forks, activation order first, transition networks last.
    pub const ALL: [Self; 18] = [
        Self::Frontier,
        Self::Homestead,
        Self::EIP150,
        Self::EIP158,
        Self::Byzantium,
        Self::Constantinople,
        Self::ConstantinopleFix,
        Self::Istanbul,
        Self::Berlin,
        Self::London,
        Self::Paris,
        Self::Shanghai,
        Self::Cancun,
        Self::FrontierToHomesteadAt5,
        Self::HomesteadToEIP150At5,
        Self::HomesteadToDaoAt5,
        Self::EIP158ToByzantiumAt5,
        Self::BerlinToLondonAt5,
    ];

    ///
    /// The fork name as it appears in fixtures and chain parameters.
    ///
    pub fn name(self) -> &'static str {
        match self {
            Self::Frontier => "Frontier",
            Self::Homestead => "Homestead",
            Self::EIP150 => "EIP150",
            Self::EIP158 => "EIP158",
            Self::Byzantium => "Byzantium",
            Self::Constantinople => "Constantinople",
            Self::ConstantinopleFix => "ConstantinopleFix",
            Self::Istanbul => "Istanbul",
            Self::Berlin => "Berlin",
            Self::London => "London",
            Self::Paris => "Paris",
            Self::Shanghai => "Shanghai",
            Self::Cancun => "Cancun",
            Self::FrontierToHomesteadAt5 => "FrontierToHomesteadAt5",
            Self::HomesteadToEIP150At5 => "HomesteadToEIP150At5",
            Self::HomesteadToDaoAt5 => "HomesteadToDaoAt5",
            Self::EIP158ToByzantiumAt5 => "EIP158ToByzantiumAt5",
            Self::BerlinToLondonAt5 => "BerlinToLondonAt5",
        }
    }
}

impl std::str::FromStr for Fork {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|fork| fork.name() == string)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown fork `{}`. Supported forks: {}",
                    string,
                    Self::ALL.iter().map(|fork| fork.name()).join(", ")
                )
            })
    }
}

impl std::fmt::Display for Fork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
