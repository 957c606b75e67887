//! Conversion of `ListServers` responses into a generic, displayable document.
//!
//! Follows the proto3 JSON mapping: fields keep their declaration order and
//! lowerCamelCase names, and fields holding their type's default value are
//! left out. An empty server list therefore renders as `{}`.

use serde_json::{Map, Value};

use crate::error::{AdminError, AdminResult};
use crate::proto::{ListServersResponse, Server};

/// Ordered key-value document derived from a response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedOutput(Map<String, Value>);

impl RenderedOutput {
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize with 2-space indentation.
    pub fn to_pretty_string(&self) -> AdminResult<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }
}

/// Two-way conversion between a schema message and its JSON mapping.
pub trait JsonMapping: Sized {
    fn to_mapping(&self) -> Map<String, Value>;

    fn from_mapping(map: &Map<String, Value>) -> AdminResult<Self>;
}

impl JsonMapping for Server {
    fn to_mapping(&self) -> Map<String, Value> {
        let mut map = Map::new();
        if !self.name.is_empty() {
            map.insert("name".to_string(), Value::from(self.name.as_str()));
        }
        if !self.address.is_empty() {
            map.insert("address".to_string(), Value::from(self.address.as_str()));
        }
        if self.players != 0 {
            map.insert("players".to_string(), Value::from(self.players));
        }
        map
    }

    fn from_mapping(map: &Map<String, Value>) -> AdminResult<Self> {
        reject_unknown(map, &["name", "address", "players"], "Server")?;
        Ok(Server {
            name: string_field(map, "name")?,
            address: string_field(map, "address")?,
            players: int32_field(map, "players")?,
        })
    }
}

impl JsonMapping for ListServersResponse {
    fn to_mapping(&self) -> Map<String, Value> {
        let mut map = Map::new();
        if !self.servers.is_empty() {
            let servers = self
                .servers
                .iter()
                .map(|server| Value::Object(server.to_mapping()))
                .collect();
            map.insert("servers".to_string(), Value::Array(servers));
        }
        map
    }

    fn from_mapping(map: &Map<String, Value>) -> AdminResult<Self> {
        reject_unknown(map, &["servers"], "ListServersResponse")?;
        let servers = match map.get("servers") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::Object(server) => Server::from_mapping(server),
                    other => Err(AdminError::serialization(format!(
                        "expected Server object, found {}",
                        other
                    ))),
                })
                .collect::<AdminResult<Vec<_>>>()?,
            Some(other) => {
                return Err(AdminError::serialization(format!(
                    "field \"servers\" must be a list, found {}",
                    other
                )))
            }
        };
        Ok(ListServersResponse { servers })
    }
}

impl From<&ListServersResponse> for RenderedOutput {
    fn from(response: &ListServersResponse) -> Self {
        RenderedOutput(response.to_mapping())
    }
}

/// Render a response as indented JSON text.
pub fn render(response: &ListServersResponse) -> AdminResult<String> {
    RenderedOutput::from(response).to_pretty_string()
}

/// Parse rendered text back into a response.
pub fn parse(text: &str) -> AdminResult<ListServersResponse> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => ListServersResponse::from_mapping(&map),
        other => Err(AdminError::serialization(format!(
            "expected ListServersResponse object, found {}",
            other
        ))),
    }
}

fn reject_unknown(map: &Map<String, Value>, known: &[&str], message: &str) -> AdminResult<()> {
    match map.keys().find(|key| !known.contains(&key.as_str())) {
        Some(key) => Err(AdminError::serialization(format!(
            "unknown field {:?} in {}",
            key, message
        ))),
        None => Ok(()),
    }
}

fn string_field(map: &Map<String, Value>, name: &str) -> AdminResult<String> {
    match map.get(name) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(AdminError::serialization(format!(
            "field {:?} must be a string, found {}",
            name, other
        ))),
    }
}

// int32 may also arrive quoted.
fn int32_field(map: &Map<String, Value>, name: &str) -> AdminResult<i32> {
    let invalid = || AdminError::serialization(format!("field {:?} is not a valid int32", name));
    match map.get(name) {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(invalid),
        Some(Value::String(s)) => s.parse::<i32>().map_err(|_| invalid()),
        Some(_) => Err(invalid()),
    }
}
