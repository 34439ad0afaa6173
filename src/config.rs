//! Graph configuration
//!
//! A `GraphConfig` is the immutable handle behind every graph view:
//! where the store lives, how to authenticate, and which attribute
//! columns the `vertices` and `edges` relations carry. View
//! derivations (`copy`, `to_directed`, `to_undirected`, `reverse`)
//! clone the configuration and never mutate it.

use serde::{Deserialize, Serialize};

use crate::value::AttrMap;

/// Connection and schema configuration for one graph view family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Store host.
    pub host: String,
    /// Store port.
    pub port: u16,
    /// Store user.
    pub user: String,
    /// Store password, if the store requires one.
    pub password: Option<String>,
    /// Database name.
    pub dbname: String,
    /// Declared vertex attribute columns, in order.
    pub node_attrs: Vec<String>,
    /// Declared edge attribute columns, in order.
    pub edge_attrs: Vec<String>,
    /// Arbitrary graph-level metadata, carried across derivations.
    #[serde(default)]
    pub metadata: AttrMap,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            host: "127.0.0.1".to_string(),
            port: 5432,
            user: "gpadmin".to_string(),
            password: None,
            dbname: "graph".to_string(),
            node_attrs: vec!["weight".to_string()],
            edge_attrs: vec!["weight".to_string()],
            metadata: AttrMap::new(),
        }
    }
}

impl GraphConfig {
    /// Configuration for the named database with default everything else.
    pub fn new(dbname: impl Into<String>) -> Self {
        GraphConfig {
            dbname: dbname.into(),
            ..GraphConfig::default()
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Replaces the declared vertex attribute list.
    pub fn with_node_attrs<I, S>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.node_attrs = attrs.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the declared edge attribute list.
    pub fn with_edge_attrs<I, S>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.edge_attrs = attrs.into_iter().map(Into::into).collect();
        self
    }

    /// Attaches one graph-level metadata entry.
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<crate::value::AttrValue>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub(crate) fn pg_config(&self) -> postgres::Config {
        let mut pg = postgres::Config::new();
        pg.host(&self.host);
        pg.port(self.port);
        pg.user(&self.user);
        pg.dbname(&self.dbname);
        if let Some(password) = &self.password {
            pg.password(password);
        }
        pg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::AttrValue;

    #[test]
    fn test_defaults() {
        let config = GraphConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5432);
        assert_eq!(config.user, "gpadmin");
        assert_eq!(config.password, None);
        assert_eq!(config.dbname, "graph");
        assert_eq!(config.node_attrs, vec!["weight"]);
        assert_eq!(config.edge_attrs, vec!["weight"]);
        assert!(config.metadata.is_empty());
    }

    #[test]
    fn test_builder() {
        let config = GraphConfig::new("social")
            .with_host("db.internal")
            .with_port(15432)
            .with_user("reader")
            .with_password("secret")
            .with_node_attrs(["age", "name"])
            .with_edge_attrs(["weight", "since"])
            .with_metadata("kind", "friendship");

        assert_eq!(config.dbname, "social");
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 15432);
        assert_eq!(config.user, "reader");
        assert_eq!(config.password.as_deref(), Some("secret"));
        assert_eq!(config.node_attrs, vec!["age", "name"]);
        assert_eq!(config.edge_attrs, vec!["weight", "since"]);
        assert_eq!(
            config.metadata.get("kind"),
            Some(&AttrValue::from("friendship"))
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let original = GraphConfig::new("graph").with_metadata("revision", 3i64);
        let derived = original.clone().with_metadata("revision", 4i64);

        assert_eq!(original.metadata.get("revision"), Some(&AttrValue::from(3i64)));
        assert_eq!(derived.metadata.get("revision"), Some(&AttrValue::from(4i64)));
    }

    #[test]
    fn test_pg_config() {
        let config = GraphConfig::new("social").with_port(15432).with_user("reader");
        let pg = config.pg_config();
        assert_eq!(pg.get_dbname(), Some("social"));
        assert_eq!(pg.get_user(), Some("reader"));
        assert_eq!(pg.get_ports(), &[15432]);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = GraphConfig::new("social").with_metadata("kind", "friendship");
        let json = serde_json::to_string(&config).unwrap();
        let back: GraphConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.dbname, "social");
        assert_eq!(back.metadata.get("kind"), Some(&AttrValue::from("friendship")));
    }
}
