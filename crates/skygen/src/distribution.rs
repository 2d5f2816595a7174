//! The families of datasets that can be generated.

/// The statistical family of a generated dataset.
///
/// `Unknown` stands for any unrecognized tag. Generating it is not an error;
/// it yields points whose components are all zero.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distribution {
    /// Every component is drawn uniformly and independently.
    #[clap(name = "independent")]
    Independent,
    /// Components tend to rise and fall together.
    #[clap(name = "correlated")]
    Correlated,
    /// Components tend to trade off against each other.
    #[clap(name = "anti-correlated")]
    AntiCorrelated,
    /// Any other tag.
    #[clap(name = "unknown")]
    Unknown,
}

impl Distribution {
    /// The three real distribution families.
    pub const ALL: [Self; 3] = [Self::Independent, Self::Correlated, Self::AntiCorrelated];

    /// The name of the distribution.
    #[must_use]
    pub const fn name(&self) -> &str {
        match self {
            Self::Independent => "independent",
            Self::Correlated => "correlated",
            Self::AntiCorrelated => "anti-correlated",
            Self::Unknown => "unknown",
        }
    }

    /// The single-character tag of the distribution.
    #[must_use]
    pub const fn tag(&self) -> char {
        match self {
            Self::Independent => 'i',
            Self::Correlated => 'c',
            Self::AntiCorrelated => 'a',
            Self::Unknown => '?',
        }
    }
}

impl From<char> for Distribution {
    fn from(tag: char) -> Self {
        match tag {
            'i' => Self::Independent,
            'c' => Self::Correlated,
            'a' => Self::AntiCorrelated,
            _ => Self::Unknown,
        }
    }
}

impl From<&str> for Distribution {
    fn from(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "independent" | "indep" | "i" => Self::Independent,
            "correlated" | "corr" | "c" => Self::Correlated,
            "anti-correlated" | "anticorrelated" | "anti" | "a" => Self::AntiCorrelated,
            _ => Self::Unknown,
        }
    }
}

impl core::fmt::Display for Distribution {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}
