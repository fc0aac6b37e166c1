//! Source-key to generated-id maps
//!
//! One map per entity kind. Parents are registered before any child reads
//! them; a lookup miss is a referential-integrity failure.

use crate::error::{SeedError, SeedResult};
use radar_common::ids::{entity_seed, generate_id_string};
use std::collections::HashMap;

#[derive(Debug)]
pub struct IdMap {
    kind: &'static str,
    ids: HashMap<String, String>,
}

impl IdMap {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            ids: HashMap::new(),
        }
    }

    /// Seed string used to derive the id for `key`
    pub fn seed_for(&self, key: &str) -> String {
        entity_seed(self.kind, key)
    }

    /// Register `key`, returning its id and whether it was newly added
    pub fn register(&mut self, key: &str) -> (String, bool) {
        if let Some(id) = self.ids.get(key) {
            return (id.clone(), false);
        }
        let id = generate_id_string(&self.seed_for(key));
        self.ids.insert(key.to_string(), id.clone());
        (id, true)
    }

    /// Register `key`, failing if it was already present
    pub fn register_unique(&mut self, key: &str) -> SeedResult<String> {
        match self.register(key) {
            (id, true) => Ok(id),
            (_, false) => Err(SeedError::DuplicateKey {
                entity: self.kind,
                key: key.to_string(),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.ids.get(key).map(String::as_str)
    }

    /// Look up a parent id on behalf of a child record
    pub fn resolve(&self, entity: &'static str, entity_key: &str, key: &str) -> SeedResult<String> {
        self.get(key)
            .map(str::to_string)
            .ok_or_else(|| SeedError::MissingReference {
                entity,
                key: entity_key.to_string(),
                target: self.kind,
                reference: key.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// All id maps for one seed run
#[derive(Debug)]
pub struct IdMaps {
    pub users: IdMap,
    pub articles: IdMap,
    pub comments: IdMap,
    pub research_cards: IdMap,
    pub protocols: IdMap,
    pub tags: IdMap,
    pub chains: IdMap,
    pub categories: IdMap,
    pub requests: IdMap,
}

impl Default for IdMaps {
    fn default() -> Self {
        Self {
            users: IdMap::new("user"),
            articles: IdMap::new("article"),
            comments: IdMap::new("comment"),
            research_cards: IdMap::new("research"),
            protocols: IdMap::new("protocol"),
            tags: IdMap::new("tag"),
            chains: IdMap::new("chain"),
            categories: IdMap::new("category"),
            requests: IdMap::new("request"),
        }
    }
}
