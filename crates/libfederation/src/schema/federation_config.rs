use crate::schema::SchemaBuildError;

/// The link namespace Federation 2 uses when none is configured explicitly.
pub const DEFAULT_LINK_NAMESPACE: &str = "federation";

/// A `major.minor` Apollo Federation version.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct FederationVersion {
    major: u16,
    minor: u16,
}
impl FederationVersion {
    pub const V1: FederationVersion = FederationVersion { major: 1, minor: 0 };

    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    pub fn major(&self) -> u16 {
        self.major
    }

    pub fn minor(&self) -> u16 {
        self.minor
    }

    /// The `@link` URL identifying this version of the federation spec.
    pub fn link_url(&self) -> String {
        format!("https://specs.apollo.dev/federation/v{self}")
    }

    /// Federation 2 and later import directives through `@link`, which allows
    /// them to be namespaced.
    pub fn supports_namespacing(&self) -> bool {
        self.major >= 2
    }
}
impl std::default::Default for FederationVersion {
    fn default() -> Self {
        Self::V1
    }
}
impl std::fmt::Display for FederationVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
impl std::str::FromStr for FederationVersion {
    type Err = SchemaBuildError;

    /// Accepts `2`, `2.3` and `v2.3`.
    fn from_str(version: &str) -> Result<Self, Self::Err> {
        let invalid = || SchemaBuildError::InvalidFederationVersion {
            version: version.to_string(),
        };

        let trimmed = version.trim();
        let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
        let (major, minor) = match trimmed.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (trimmed, "0"),
        };
        let major = major.parse::<u16>().map_err(|_| invalid())?;
        let minor = minor.parse::<u16>().map_err(|_| invalid())?;
        if major == 0 {
            return Err(invalid());
        }
        Ok(Self { major, minor })
    }
}

/// Protocol settings that control how federation directives are named in the
/// output document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FederationConfig {
    pub(crate) link_namespace: Option<String>,
    pub(crate) version: FederationVersion,
}
impl FederationConfig {
    pub fn new(version: FederationVersion) -> Self {
        Self {
            link_namespace: None,
            version,
        }
    }

    pub fn with_link_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.link_namespace = Some(namespace.into());
        self
    }

    /// The namespace prepended to directive names, if one is configured.
    ///
    /// This is only consulted when [`FederationVersion::supports_namespacing`]
    /// holds for [`Self::version`].
    pub fn link_namespace(&self) -> Option<&str> {
        self.link_namespace.as_deref()
    }

    pub fn version(&self) -> FederationVersion {
        self.version
    }
}
