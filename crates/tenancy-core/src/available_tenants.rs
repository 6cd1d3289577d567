use indexmap::IndexSet;

/// Tenants a user may access, as reported by the auth backend.
///
/// The backend lists the user's private tenant under a key equal to their
/// username. That key is recorded as the `has_private` flag for `owner`
/// instead of being stored next to the shared tenants, so the resolver can
/// ask "is there anything besides my private tenant" without copying and
/// pruning a map. Shared tenants keep the order the backend sent them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableTenants {
    owner: String,
    has_private: bool,
    shared: IndexSet<String>,
}

impl AvailableTenants {
    /// An empty set belonging to `owner`.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            ..Self::default()
        }
    }

    /// Build the set for `username`, turning the username key into the private flag.
    pub fn for_user<I, S>(username: &str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .fold(Self::new(username), |tenants, name| tenants.with_shared(name))
    }

    /// Mark the owner's private tenant as present.
    pub fn with_private(mut self) -> Self {
        self.has_private = true;
        self
    }

    /// Add a tenant key. The owner's own username sets the private flag.
    pub fn with_shared(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if name == self.owner {
            self.has_private = true;
        } else {
            self.shared.insert(name);
        }
        self
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn has_private(&self) -> bool {
        self.has_private
    }

    /// True when `username` owns this set and the backend listed their private key.
    pub fn has_private_for(&self, username: &str) -> bool {
        self.has_private && self.owner == username
    }

    /// True when `tenant` is a key the backend reported, private key included.
    pub fn contains(&self, tenant: &str) -> bool {
        self.has_private_for(tenant) || self.shared.contains(tenant)
    }

    /// Shared tenants in insertion order.
    pub fn shared(&self) -> impl Iterator<Item = &str> {
        self.shared.iter().map(String::as_str)
    }

    /// Every key, the owner's private key first when present.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.has_private
            .then_some(self.owner.as_str())
            .into_iter()
            .chain(self.shared())
    }

    pub fn len(&self) -> usize {
        self.shared.len() + usize::from(self.has_private)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
