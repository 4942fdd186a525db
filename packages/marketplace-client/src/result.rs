//! Outcome of a submitted execute transaction.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl Event {
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }
}

/// Transaction hash, gas figures and chain events of one execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecuteResult {
    pub transaction_hash: String,
    pub height: u64,
    pub gas_wanted: u64,
    pub gas_used: u64,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl ExecuteResult {
    pub fn events_of<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Event> + 'a {
        self.events.iter().filter(move |e| e.kind == kind)
    }

    /// First matching attribute across `wasm` events.
    pub fn wasm_attribute(&self, key: &str) -> Option<&str> {
        self.events_of("wasm").find_map(|e| e.attribute(key))
    }

    /// Address of the collection instantiated by `create_collection`,
    /// reported by the marketplace's reply handler.
    pub fn collection_contract(&self) -> Option<&str> {
        self.wasm_attribute("collection_contract")
    }
}
