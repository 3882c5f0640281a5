use crate::error::ServicesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;
use xrkit_kernel::platform::{self, PlatformCatalog, PlatformContext, PlatformHandle};
use xrkit_kernel::types::{TypeHandle, TypeReference, TypeRegistry};

/// Opaque reference to the configuration profile handed to a service on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileRef(String);

impl ProfileRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One pluggable implementation of a capability category.
///
/// Immutable once built: editing an entry means building a new one and handing
/// it to [`crate::ServiceProfile::replace`].
#[derive(Debug, Clone)]
pub struct ServiceConfiguration {
    instance_type: TypeReference,
    name: String,
    priority: u32,
    platforms: Vec<PlatformHandle>,
    profile: Option<ProfileRef>,
}

impl ServiceConfiguration {
    /// An entry with priority 0, no platforms and no profile.
    pub fn new(instance_type: TypeReference, name: impl Into<String>) -> Self {
        Self { instance_type, name: name.into(), priority: 0, platforms: Vec::new(), profile: None }
    }

    #[must_use]
    pub const fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn with_platforms(mut self, platforms: Vec<PlatformHandle>) -> Self {
        self.platforms = platforms;
        self
    }

    #[must_use]
    pub fn with_profile(mut self, profile: ProfileRef) -> Self {
        self.profile = Some(profile);
        self
    }

    #[must_use]
    pub const fn instance_type(&self) -> &TypeReference {
        &self.instance_type
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Startup ordering key. Ties keep declaration order.
    #[must_use]
    pub const fn priority(&self) -> u32 {
        self.priority
    }

    #[must_use]
    pub fn platforms(&self) -> &[PlatformHandle] {
        &self.platforms
    }

    #[must_use]
    pub const fn profile(&self) -> Option<&ProfileRef> {
        self.profile.as_ref()
    }

    /// Whether the entry's platform list activates it in `context`.
    #[must_use]
    pub fn is_active(&self, context: &PlatformContext) -> bool {
        platform::is_active(&self.platforms, context)
    }

    /// Whether the entry should run: active in `context` and, unless its list
    /// is empty or universal, naming one of the `live` platforms.
    #[must_use]
    pub fn is_live(&self, context: &PlatformContext, live: &[PlatformHandle]) -> bool {
        platform::is_live(&self.platforms, context, live)
    }

    /// The implementation type, resolving through `registry` if the reference
    /// was loaded unbound.
    #[must_use]
    pub fn resolve_type(&self, registry: &TypeRegistry) -> Option<TypeHandle> {
        match self.instance_type.to_type() {
            Some(ty) => Some(ty.clone()),
            None => self.instance_type.to_guid().and_then(|guid| registry.resolve(guid)),
        }
    }

    /// The persisted shape of this entry.
    #[must_use]
    pub fn to_record(&self) -> ServiceConfigurationRecord {
        ServiceConfigurationRecord {
            instance_type: self.instance_type.clone(),
            name: self.name.clone(),
            priority: self.priority,
            platforms: self.platforms.iter().map(|p| p.name().to_owned()).collect(),
            profile: self.profile.clone(),
        }
    }
}

/// Stored form of a [`ServiceConfiguration`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfigurationRecord {
    pub instance_type: TypeReference,
    pub name: String,
    #[serde(default)]
    pub priority: u32,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileRef>,
}

impl ServiceConfigurationRecord {
    /// Rebuilds the entry, looking platforms up in `catalog` and binding the
    /// type reference against `registry`.
    ///
    /// An unregistered type is not an error; the entry keeps the unresolved
    /// reference and is skipped by whoever instantiates it.
    ///
    /// # Errors
    /// Returns [`ServicesError::Kernel`] when a platform name is unknown.
    pub fn hydrate(
        self,
        catalog: &PlatformCatalog,
        registry: &TypeRegistry,
    ) -> Result<ServiceConfiguration, ServicesError> {
        let platforms = catalog
            .resolve_names(self.platforms.as_slice())
            .map_err(|source| ServicesError::Kernel {
                source,
                context: Some(format!("Hydrating service `{}`", self.name).into()),
            })?;

        let mut instance_type = self.instance_type;
        if instance_type.bind(registry).is_none() && !instance_type.is_empty() {
            warn!(
                service = %self.name,
                token = instance_type.token(),
                "Service type is not registered"
            );
        }

        Ok(ServiceConfiguration {
            instance_type,
            name: self.name,
            priority: self.priority,
            platforms,
            profile: self.profile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xrkit_kernel::types::Registered;

    struct DiagnosticsService;
    impl Registered for DiagnosticsService {
        const NAME: &'static str = "DiagnosticsService";
    }

    #[test]
    fn record_round_trip_keeps_platform_names() {
        let mut registry = TypeRegistry::new();
        let ty = registry.register_type::<DiagnosticsService>().unwrap();
        let catalog = PlatformCatalog::with_defaults();

        let entry = ServiceConfiguration::new(TypeReference::from_type(ty), "Diagnostics")
            .with_priority(2)
            .with_platforms(catalog.resolve_names(&["windows", "editor"]).unwrap())
            .with_profile(ProfileRef::new("default-diagnostics"));

        let record = entry.to_record();
        assert_eq!(record.platforms, ["windows", "editor"]);

        let restored = record.hydrate(&catalog, &registry).unwrap();
        assert!(restored.instance_type().is_bound());
        assert_eq!(restored.priority(), 2);
        assert_eq!(restored.profile().map(ProfileRef::as_str), Some("default-diagnostics"));
    }

    #[test]
    fn unknown_platform_fails_hydration() {
        let record = ServiceConfigurationRecord {
            instance_type: TypeReference::default(),
            name: "Broken".to_owned(),
            priority: 0,
            platforms: vec!["amiga".to_owned()],
            profile: None,
        };

        let err =
            record.hydrate(&PlatformCatalog::with_defaults(), &TypeRegistry::new()).unwrap_err();
        assert!(matches!(err, ServicesError::Kernel { .. }));
        assert!(err.to_string().contains("Broken"));
    }

    #[test]
    fn unregistered_type_hydrates_unbound() {
        let record = ServiceConfigurationRecord {
            instance_type: TypeReference::from_token("3e1b6a9c-0d2f-4e58-b7a1-6c9d8e0f1a2b"),
            name: "Missing".to_owned(),
            priority: 0,
            platforms: Vec::new(),
            profile: None,
        };

        let entry = record.hydrate(&PlatformCatalog::new(), &TypeRegistry::new()).unwrap();
        assert!(!entry.instance_type().is_bound());
        assert!(entry.resolve_type(&TypeRegistry::new()).is_none());
    }
}
