//! # Attribute Resolution
//!
//! Turns a node's raw attributes into display values. A logical column such
//! as `NAME` may be backed by several raw fields; the [`Resolver`] tries the
//! column's [`NodeGetter`]s in order and keeps the first value found, so
//! devices with partial udev data still get a sensible label.
//!
//! ```
//! use printdevdag::common::ConfigBuilder;
//! use printdevdag::graph::{AttrValue, DeviceNode};
//! use printdevdag::resolve::Resolver;
//!
//! let node = DeviceNode::builder()
//!     .with_identifier("sdb")
//!     .with_attribute("SYSNAME", "sdb")
//!     .build()
//!     .unwrap();
//!
//! let resolver = Resolver::device_default();
//! assert_eq!(resolver.resolve(&node, "NAME"), Some(AttrValue::from("sdb")));
//! assert_eq!(resolver.resolve(&node, "SIZE"), None);
//! ```

mod getters;
mod resolver;

pub use getters::NodeGetter;
pub use resolver::{Extractor, Resolver, default_cascades};
