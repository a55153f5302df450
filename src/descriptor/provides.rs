use indexmap::IndexSet;

/// The providers a module supplies for one service.
///
/// Providers keep their declaration order and are never duplicated. Unlike the other descriptor
/// collections, that order is significant: two `Provides` with the same providers in a different
/// order are not equal.
#[derive(Debug, Clone, Eq)]
pub struct Provides {
    service: String,
    providers: IndexSet<String>,
}

impl Provides {
    /// Creates the provision of `service`; repeated providers keep their first position.
    pub fn new<I, T>(service: impl Into<String>, providers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            service: service.into(),
            providers: providers.into_iter().map(Into::into).collect(),
        }
    }

    /// The service type, in dotted form.
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// The provider types in declaration order.
    #[must_use]
    pub fn providers(&self) -> &IndexSet<String> {
        &self.providers
    }
}

impl PartialEq for Provides {
    fn eq(&self, other: &Self) -> bool {
        self.service == other.service && self.providers.iter().eq(other.providers.iter())
    }
}
