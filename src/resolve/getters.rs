use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PrintDagError;
use crate::graph::{AttrValue, DeviceNode};

// Raw attribute keys as recorded by udev
mod keys {
    pub const DM_NAME: &str = "DM_NAME";
    pub const DEVNAME: &str = "DEVNAME";
    pub const SYSNAME: &str = "SYSNAME";
    pub const ID_SAS_PATH: &str = "ID_SAS_PATH";
    pub const ID_PATH: &str = "ID_PATH";
    pub const DEVTYPE: &str = "DEVTYPE";
    pub const SUBSYSTEM: &str = "SUBSYSTEM";
    pub const SIZE: &str = "SIZE";
    pub const NODETYPE: &str = "NODETYPE";
    pub const DM_UUID: &str = "DM_UUID";
}

const RAW_PREFIX: &str = "raw:";

/// A single attribute extractor
///
/// Every getter is a pure function of a node's raw attributes and yields
/// `None` when the data it reads is missing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NodeGetter {
    DmName,
    DevName,
    SysName,
    Identifier,
    IdSasPath,
    IdPath,
    DevType,
    Subsystem,
    Size,
    NodeType,
    /// Subsystem prefix of the device-mapper UUID (`LVM`, `CRYPT`, ...)
    DmUuidSubsystem,
    /// Any raw attribute, by key
    Raw(String),
}

impl NodeGetter {
    pub fn get(&self, node: &DeviceNode) -> Option<AttrValue> {
        match self {
            NodeGetter::DmName => node.attribute(keys::DM_NAME).cloned(),
            NodeGetter::DevName => node.attribute(keys::DEVNAME).cloned(),
            NodeGetter::SysName => node.attribute(keys::SYSNAME).cloned(),
            NodeGetter::Identifier => Some(AttrValue::Text(node.identifier().to_string())),
            NodeGetter::IdSasPath => node.attribute(keys::ID_SAS_PATH).cloned(),
            NodeGetter::IdPath => node.attribute(keys::ID_PATH).cloned(),
            NodeGetter::DevType => node.attribute(keys::DEVTYPE).cloned(),
            NodeGetter::Subsystem => node.attribute(keys::SUBSYSTEM).cloned(),
            NodeGetter::Size => node.attribute(keys::SIZE).cloned(),
            NodeGetter::NodeType => node.attribute(keys::NODETYPE).cloned(),
            NodeGetter::DmUuidSubsystem => node.attribute(keys::DM_UUID).and_then(|uuid| {
                uuid.to_string()
                    .split_once('-')
                    .map(|(subsystem, _)| AttrValue::Text(subsystem.to_string()))
            }),
            NodeGetter::Raw(key) => node.attribute(key).cloned(),
        }
    }

    /// Name used for this getter in layout files
    pub fn name(&self) -> String {
        match self {
            NodeGetter::DmName => keys::DM_NAME.to_string(),
            NodeGetter::DevName => keys::DEVNAME.to_string(),
            NodeGetter::SysName => keys::SYSNAME.to_string(),
            NodeGetter::Identifier => "IDENTIFIER".to_string(),
            NodeGetter::IdSasPath => keys::ID_SAS_PATH.to_string(),
            NodeGetter::IdPath => keys::ID_PATH.to_string(),
            NodeGetter::DevType => keys::DEVTYPE.to_string(),
            NodeGetter::Subsystem => keys::SUBSYSTEM.to_string(),
            NodeGetter::Size => keys::SIZE.to_string(),
            NodeGetter::NodeType => keys::NODETYPE.to_string(),
            NodeGetter::DmUuidSubsystem => "DM_UUID_SUBSYSTEM".to_string(),
            NodeGetter::Raw(key) => format!("{RAW_PREFIX}{key}"),
        }
    }
}

impl fmt::Display for NodeGetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for NodeGetter {
    type Err = PrintDagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(key) = s.strip_prefix(RAW_PREFIX) {
            if key.is_empty() {
                return Err(PrintDagError::ConfigurationError {
                    message: "Raw attribute getter needs a key, e.g. 'raw:ID_SERIAL'".to_string(),
                });
            }
            return Ok(NodeGetter::Raw(key.to_string()));
        }

        match s {
            keys::DM_NAME => Ok(NodeGetter::DmName),
            keys::DEVNAME => Ok(NodeGetter::DevName),
            keys::SYSNAME => Ok(NodeGetter::SysName),
            "IDENTIFIER" => Ok(NodeGetter::Identifier),
            keys::ID_SAS_PATH => Ok(NodeGetter::IdSasPath),
            keys::ID_PATH => Ok(NodeGetter::IdPath),
            keys::DEVTYPE => Ok(NodeGetter::DevType),
            keys::SUBSYSTEM => Ok(NodeGetter::Subsystem),
            keys::SIZE => Ok(NodeGetter::Size),
            keys::NODETYPE => Ok(NodeGetter::NodeType),
            "DM_UUID_SUBSYSTEM" => Ok(NodeGetter::DmUuidSubsystem),
            other => Err(PrintDagError::ConfigurationError {
                message: format!("Unknown attribute getter '{other}'"),
            }),
        }
    }
}

impl TryFrom<String> for NodeGetter {
    type Error = PrintDagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NodeGetter> for String {
    fn from(getter: NodeGetter) -> Self {
        getter.name()
    }
}
