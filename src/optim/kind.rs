//! Registry of supported optimizer algorithms

use std::fmt;

/// Every optimizer this crate can construct
///
/// Names are matched case-insensitively, so `"adamw"`, `"AdamW"` and
/// `"ADAMW"` all resolve to [`OptimizerKind::AdamW`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptimizerKind {
    Sgd,
    Adam,
    AdamW,
    RmsProp,
    Adagrad,
}

impl OptimizerKind {
    /// All registered kinds, in display order
    pub const ALL: [OptimizerKind; 5] =
        [Self::Sgd, Self::Adam, Self::AdamW, Self::RmsProp, Self::Adagrad];

    /// Canonical configuration name
    pub fn name(self) -> &'static str {
        match self {
            Self::Sgd => "SGD",
            Self::Adam => "Adam",
            Self::AdamW => "AdamW",
            Self::RmsProp => "RMSProp",
            Self::Adagrad => "Adagrad",
        }
    }

    /// Resolve a configuration tag against the registry
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// Comma-separated list of registered names, for error messages
    pub fn supported() -> String {
        Self::ALL.iter().map(|kind| kind.name()).collect::<Vec<_>>().join(", ")
    }

    /// Whether the kind needs `momentum` and `nesterov` in its configuration
    pub fn requires_momentum(self) -> bool {
        self == Self::Sgd
    }
}

impl fmt::Display for OptimizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
