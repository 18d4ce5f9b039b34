use std::collections::BTreeMap;
use std::fmt;

use log::trace;

use super::getters::NodeGetter;
use crate::constants::columns;
use crate::graph::{AttrValue, DeviceNode};
use crate::utils::keys::compose;

/// A composed extractor cascade
pub type Extractor = Box<dyn Fn(&DeviceNode) -> Option<AttrValue>>;

/// Resolves display attributes of a node from its raw attributes
///
/// Each attribute name owns an ordered cascade of getters; the first getter
/// that finds a value wins. Names without a cascade always resolve to `None`.
pub struct Resolver {
    cascades: BTreeMap<String, Vec<NodeGetter>>,
    extractors: BTreeMap<String, Extractor>,
}

impl Resolver {
    pub fn new(cascades: BTreeMap<String, Vec<NodeGetter>>) -> Self {
        let extractors = cascades
            .iter()
            .map(|(name, getters)| (name.clone(), Self::compose_cascade(getters)))
            .collect();
        Self {
            cascades,
            extractors,
        }
    }

    /// Cascades for the device schema columns
    pub fn device_default() -> Self {
        Self::new(default_cascades())
    }

    /// Cascades for the three parts of a layer designator
    pub fn designator() -> Self {
        let cascades = [
            (columns::NODETYPE, vec![NodeGetter::NodeType]),
            (columns::DEVTYPE, vec![NodeGetter::DevType]),
            (columns::DM_SUBSYSTEM, vec![NodeGetter::DmUuidSubsystem]),
        ]
        .into_iter()
        .map(|(name, getters)| (name.to_string(), getters))
        .collect();
        Self::new(cascades)
    }

    pub fn with_cascade(mut self, name: &str, getters: Vec<NodeGetter>) -> Self {
        self.extractors
            .insert(name.to_string(), Self::compose_cascade(&getters));
        self.cascades.insert(name.to_string(), getters);
        self
    }

    pub fn resolve(&self, node: &DeviceNode, name: &str) -> Option<AttrValue> {
        let value = self.extractors.get(name).and_then(|extract| extract(node));
        trace!(
            "Resolved {name} for '{}' to {value:?}",
            node.identifier()
        );
        value
    }

    pub fn has_cascade(&self, name: &str) -> bool {
        self.cascades.contains_key(name)
    }

    pub fn cascade(&self, name: &str) -> Option<&[NodeGetter]> {
        self.cascades.get(name).map(Vec::as_slice)
    }

    pub fn cascades(&self) -> &BTreeMap<String, Vec<NodeGetter>> {
        &self.cascades
    }

    fn compose_cascade(getters: &[NodeGetter]) -> Extractor {
        let funcs: Vec<_> = getters
            .iter()
            .cloned()
            .map(|getter| move |node: &DeviceNode| getter.get(node))
            .collect();
        Box::new(compose(funcs))
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("cascades", &self.cascades)
            .finish_non_exhaustive()
    }
}

/// NAME prefers the device-mapper name, then the device node, then the
/// kernel name, then the identifier; ID_PATH prefers the SAS path.
pub fn default_cascades() -> BTreeMap<String, Vec<NodeGetter>> {
    [
        (
            columns::NAME,
            vec![
                NodeGetter::DmName,
                NodeGetter::DevName,
                NodeGetter::SysName,
                NodeGetter::Identifier,
            ],
        ),
        (columns::DEVNAME, vec![NodeGetter::DevName]),
        (columns::DEVTYPE, vec![NodeGetter::DevType]),
        (columns::DM_SUBSYSTEM, vec![NodeGetter::DmUuidSubsystem]),
        (
            columns::ID_PATH,
            vec![NodeGetter::IdSasPath, NodeGetter::IdPath],
        ),
        (columns::SIZE, vec![NodeGetter::Size]),
        (columns::SUBSYSTEM, vec![NodeGetter::Subsystem]),
    ]
    .into_iter()
    .map(|(name, getters)| (name.to_string(), getters))
    .collect()
}
