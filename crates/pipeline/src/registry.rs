//! Name-keyed entity stores owned by a single ingestion run.

use adcgraph_core::model::{Server, ServiceGroup, Vip};
use indexmap::IndexMap;

/// Entities stored in a [`Registry`] are keyed by their declared name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Server {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for ServiceGroup {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Vip {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Declaration-ordered map from name to entity.
///
/// A redeclared name replaces the stored entity in place, keeping the
/// position of the first declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry<T> {
    entries: IndexMap<String, T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T: Named> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `entity`, returning the entry it replaced.
    pub fn insert(&mut self, entity: T) -> Option<T> {
        self.entries.insert(entity.name().to_string(), entity)
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.entries.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn into_inner(self) -> IndexMap<String, T> {
        self.entries
    }
}

/// The three registries one run builds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registries {
    pub servers: Registry<Server>,
    pub service_groups: Registry<ServiceGroup>,
    pub vservers: Registry<Vip>,
}

impl Registries {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adcgraph_core::model::{Port, ServerAddress};

    #[test]
    fn test_last_write_wins_and_keeps_first_position() {
        let mut servers = Registry::new();
        assert!(servers.insert(Server::new("a", ServerAddress::parse("10.0.0.1"))).is_none());
        servers.insert(Server::new("b", ServerAddress::parse("10.0.0.2")));

        let replaced = servers
            .insert(Server::new("a", ServerAddress::parse("10.0.0.9")).with_port(Port::Number(81)))
            .unwrap();
        assert_eq!(replaced.address.to_string(), "10.0.0.1");

        let order: Vec<_> = servers.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(order, vec!["a", "b"]);
        assert_eq!(servers.get("a").unwrap().address.to_string(), "10.0.0.9");
        assert_eq!(servers.len(), 2);
    }

    #[test]
    fn test_separate_registries_are_isolated() {
        let mut first = Registries::new();
        let second = Registries::new();

        first.service_groups.insert(ServiceGroup::new("SG1"));

        assert!(first.service_groups.contains("SG1"));
        assert!(!second.service_groups.contains("SG1"));
        assert!(second.service_groups.is_empty());
    }

    #[test]
    fn test_get_mut() {
        let mut groups = Registry::new();
        groups.insert(ServiceGroup::new("SG1"));
        groups
            .get_mut("SG1")
            .unwrap()
            .bind_server(Server::new("S1", ServerAddress::parse("10.1.1.1")));

        assert_eq!(groups.get("SG1").unwrap().servers.len(), 1);
        assert!(groups.get_mut("missing").is_none());
    }
}
