use std::fmt::{Display, Formatter};

/// Key of a registry slot: a named namespace, or the single default slot
/// used when no namespace is given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Namespace {
    Default,
    Named(String),
}

impl Namespace {
    pub fn is_default(&self) -> bool {
        matches!(self, Namespace::Default)
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Namespace::Default => None,
            Namespace::Named(name) => Some(name),
        }
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Namespace::Default => f.write_str("default"),
            Namespace::Named(name) => f.write_str(name),
        }
    }
}

impl From<Option<String>> for Namespace {
    fn from(name: Option<String>) -> Self {
        match name {
            Some(name) => Namespace::Named(name),
            None => Namespace::Default,
        }
    }
}

impl From<&str> for Namespace {
    fn from(name: &str) -> Self {
        Namespace::Named(name.to_owned())
    }
}
