use crate::entry::{ServiceConfiguration, ServiceConfigurationRecord};
use crate::error::ServicesError;
use parking_lot::Mutex;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;
use std::sync::Arc;
use tracing::{debug, trace};
use xrkit_kernel::platform::{PlatformCatalog, PlatformContext, PlatformHandle};
use xrkit_kernel::types::{TypeConstraint, TypeRegistry};

type Entries = Arc<[Arc<ServiceConfiguration>]>;

/// A [`ServiceConfiguration`] viewed as an implementation of the category `S`
/// (usually a trait object type such as `dyn InputSystem`).
pub struct TypedServiceConfiguration<S: ?Sized + 'static> {
    entry: Arc<ServiceConfiguration>,
    category: PhantomData<fn(&S)>,
}

impl<S: ?Sized + 'static> TypedServiceConfiguration<S> {
    fn new(entry: Arc<ServiceConfiguration>) -> Self {
        Self { entry, category: PhantomData }
    }

    #[must_use]
    pub fn configuration(&self) -> &Arc<ServiceConfiguration> {
        &self.entry
    }

    /// Constraint an entry's type must meet to belong to this category.
    #[must_use]
    pub fn constraint() -> TypeConstraint {
        TypeConstraint::implementing::<S>()
    }

    /// Whether the entry's type resolves to a concrete implementation of `S`.
    #[must_use]
    pub fn is_valid(&self, registry: &TypeRegistry) -> bool {
        self.entry.resolve_type(registry).is_some_and(|ty| Self::constraint().is_satisfied_by(&ty))
    }
}

impl<S: ?Sized + 'static> Deref for TypedServiceConfiguration<S> {
    type Target = ServiceConfiguration;

    fn deref(&self) -> &Self::Target {
        &self.entry
    }
}

impl<S: ?Sized + 'static> Clone for TypedServiceConfiguration<S> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.entry))
    }
}

impl<S: ?Sized + 'static> fmt::Debug for TypedServiceConfiguration<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedServiceConfiguration")
            .field("category", &std::any::type_name::<S>())
            .field("entry", &self.entry)
            .finish()
    }
}

struct TypedCache<S: ?Sized + 'static> {
    revision: Option<u64>,
    wrappers: Arc<[TypedServiceConfiguration<S>]>,
}

impl<S: ?Sized + 'static> Default for TypedCache<S> {
    fn default() -> Self {
        Self { revision: None, wrappers: Arc::from(Vec::new()) }
    }
}

/// Ordered service entries for one capability category.
///
/// Mutation swaps in a new backing array, so snapshots returned by
/// [`ServiceProfile::entries`] stay valid. There is no removal primitive; the
/// owner replaces the whole list with [`ServiceProfile::set_entries`].
///
/// Writes take `&mut self`. A host sharing a profile across threads wraps it in
/// a lock; the typed cache has its own mutex so `&self` readers can rebuild it.
pub struct ServiceProfile<S: ?Sized + 'static> {
    name: String,
    entries: Entries,
    revision: u64,
    typed: Mutex<TypedCache<S>>,
}

impl<S: ?Sized + 'static> ServiceProfile<S> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Arc::from(Vec::new()),
            revision: 0,
            typed: Mutex::new(TypedCache::default()),
        }
    }

    /// Rebuilds a profile from stored records.
    ///
    /// # Errors
    /// Returns [`ServicesError::Kernel`] when a record names an unknown platform.
    pub fn from_records(
        name: impl Into<String>,
        records: impl IntoIterator<Item = ServiceConfigurationRecord>,
        catalog: &PlatformCatalog,
        registry: &TypeRegistry,
    ) -> Result<Self, ServicesError> {
        let mut profile = Self::new(name);
        let entries = records
            .into_iter()
            .map(|record| record.hydrate(catalog, registry))
            .collect::<Result<Vec<_>, _>>()?;
        profile.set_entries(entries);
        Ok(profile)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds `entry` after every existing entry.
    pub fn append(&mut self, entry: ServiceConfiguration) {
        let mut next = Vec::with_capacity(self.entries.len() + 1);
        next.extend(self.entries.iter().cloned());
        debug!(
            profile = %self.name,
            service = entry.name(),
            index = next.len(),
            "Appending service"
        );
        next.push(Arc::new(entry));
        self.swap(next);
    }

    /// Replaces the entry at `index` wholesale.
    ///
    /// # Errors
    /// Returns [`ServicesError::IndexOutOfBounds`]; the profile is left unchanged.
    pub fn replace(
        &mut self,
        index: usize,
        entry: ServiceConfiguration,
    ) -> Result<(), ServicesError> {
        let len = self.entries.len();
        if index >= len {
            return Err(ServicesError::IndexOutOfBounds {
                message: format!("index {index} but the profile holds {len}").into(),
                context: Some(format!("Replacing entry in `{}`", self.name).into()),
            });
        }

        let mut next = self.entries.to_vec();
        debug!(profile = %self.name, service = entry.name(), index, "Replacing service");
        next[index] = Arc::new(entry);
        self.swap(next);
        Ok(())
    }

    /// Replaces the whole list.
    pub fn set_entries(&mut self, entries: impl IntoIterator<Item = ServiceConfiguration>) {
        self.swap(entries.into_iter().map(Arc::new).collect());
    }

    fn swap(&mut self, next: Vec<Arc<ServiceConfiguration>>) {
        self.entries = Arc::from(next);
        self.revision += 1;
    }

    /// Snapshot of the entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> Entries {
        Arc::clone(&self.entries)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Arc<ServiceConfiguration>> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bumped by every mutation.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Typed view of the entries, one wrapper per entry in the same order.
    ///
    /// Rebuilt lazily after any mutation, including a same-length `replace`.
    #[must_use]
    pub fn typed_configurations(&self) -> Arc<[TypedServiceConfiguration<S>]> {
        let mut cache = self.typed.lock();
        if cache.revision != Some(self.revision) {
            trace!(profile = %self.name, revision = self.revision, "Rebuilding typed service view");
            cache.wrappers =
                self.entries.iter().cloned().map(TypedServiceConfiguration::new).collect();
            cache.revision = Some(self.revision);
        }
        Arc::clone(&cache.wrappers)
    }

    /// Entries sorted by priority. The sort is stable, so equal priorities keep
    /// declaration order.
    #[must_use]
    pub fn startup_order(&self) -> Vec<Arc<ServiceConfiguration>> {
        let mut ordered = self.entries.to_vec();
        ordered.sort_by_key(|entry| entry.priority());
        ordered
    }

    /// Entries active in `context`, in startup order.
    #[must_use]
    pub fn active_configurations(
        &self,
        context: &PlatformContext,
    ) -> Vec<Arc<ServiceConfiguration>> {
        self.startup_order().into_iter().filter(|entry| entry.is_active(context)).collect()
    }

    /// Entries that should run in `context` given the `live` platforms
    /// (see [`ServiceConfiguration::is_live`]), in startup order.
    #[must_use]
    pub fn live_configurations(
        &self,
        context: &PlatformContext,
        live: &[PlatformHandle],
    ) -> Vec<Arc<ServiceConfiguration>> {
        self.startup_order().into_iter().filter(|entry| entry.is_live(context, live)).collect()
    }

    /// Stored form of every entry, in declaration order.
    #[must_use]
    pub fn to_records(&self) -> Vec<ServiceConfigurationRecord> {
        self.entries.iter().map(|entry| entry.to_record()).collect()
    }
}

impl<S: ?Sized + 'static> Clone for ServiceProfile<S> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            entries: Arc::clone(&self.entries),
            revision: self.revision,
            typed: Mutex::new(TypedCache::default()),
        }
    }
}

impl<S: ?Sized + 'static> fmt::Debug for ServiceProfile<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceProfile")
            .field("name", &self.name)
            .field("category", &std::any::type_name::<S>())
            .field("revision", &self.revision)
            .field("entries", &self.entries)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xrkit_kernel::types::TypeReference;

    trait Diagnostics {}

    fn entry(name: &str, priority: u32) -> ServiceConfiguration {
        ServiceConfiguration::new(TypeReference::default(), name).with_priority(priority)
    }

    #[test]
    fn replace_out_of_bounds_leaves_profile_untouched() {
        let mut profile = ServiceProfile::<dyn Diagnostics>::new("diagnostics");
        profile.append(entry("a", 0));
        let revision = profile.revision();

        let err = profile.replace(1, entry("b", 0)).unwrap_err();
        assert!(matches!(err, ServicesError::IndexOutOfBounds { .. }));
        assert_eq!(profile.revision(), revision);
        assert_eq!(profile.len(), 1);
    }

    #[test]
    fn typed_view_tracks_same_length_edits() {
        let mut profile = ServiceProfile::<dyn Diagnostics>::new("diagnostics");
        profile.append(entry("before", 0));
        assert_eq!(profile.typed_configurations()[0].name(), "before");

        profile.replace(0, entry("after", 0)).unwrap();
        let typed = profile.typed_configurations();
        assert_eq!(typed.len(), profile.len());
        assert_eq!(typed[0].name(), "after");
    }

    #[test]
    fn typed_view_is_reused_between_mutations() {
        let mut profile = ServiceProfile::<dyn Diagnostics>::new("diagnostics");
        profile.append(entry("a", 0));
        let first = profile.typed_configurations();
        let second = profile.typed_configurations();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
