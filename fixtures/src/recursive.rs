//! Self-referential and mutually-referential types.
//!
//! Every shape stores its referent behind `Option<Box<_>>`, so a type may name
//! itself (directly or through a peer) without its size depending on the
//! referent. The demo only ever builds zero values: nothing here constructs a
//! cycle.

use std::fmt;
use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, trace};

/// First line of the demo output.
pub const GREETING: &str = "Shall we?";

/// Optional reference to another value of the same type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelfRef(pub Option<Box<SelfRef>>);

/// Optional reference to a [`PtrB`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PtrA(pub Option<Box<PtrB>>);

/// Optional reference to a [`PtrA`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PtrB(pub Option<Box<PtrA>>);

/// Record whose only field points at a [`NodeB`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeA {
    pub peer: Option<Box<NodeB>>,
}

/// Record whose only field points at a [`NodeA`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeB {
    pub peer: Option<Box<NodeA>>,
}

impl SelfRef {
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl PtrA {
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl PtrB {
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl NodeA {
    pub fn is_empty(&self) -> bool {
        self.peer.is_none()
    }
}

impl NodeB {
    pub fn is_empty(&self) -> bool {
        self.peer.is_none()
    }
}

/// Render an optional slot: `None`, or `Some(<referent>)`.
fn fmt_slot<T: fmt::Display>(slot: &Option<Box<T>>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match slot {
        None => f.write_str("None"),
        Some(referent) => write!(f, "Some({referent})"),
    }
}

impl fmt::Display for SelfRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_slot(&self.0, f)
    }
}

impl fmt::Display for PtrA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_slot(&self.0, f)
    }
}

impl fmt::Display for PtrB {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_slot(&self.0, f)
    }
}

impl fmt::Display for NodeA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_slot(&self.peer, f)
    }
}

impl fmt::Display for NodeB {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_slot(&self.peer, f)
    }
}

/// One zero-valued instance of every shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZeroValues {
    pub self_ref: SelfRef,
    pub ptr_a: PtrA,
    pub ptr_b: PtrB,
    pub node_a: NodeA,
    pub node_b: NodeB,
}

impl ZeroValues {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Lines printed after the greeting: self-ref, then the record pair.
    ///
    /// The pointer pair is instantiated but not part of the output.
    pub fn printed(&self) -> [String; 3] {
        [
            self.self_ref.to_string(),
            self.node_a.to_string(),
            self.node_b.to_string(),
        ]
    }
}

/// Write [`GREETING`] followed by the zero value of each printed shape.
pub fn write_demo<W: Write>(out: &mut W) -> Result<()> {
    let values = ZeroValues::zero();
    debug!(
        ptr_a_empty = values.ptr_a.is_empty(),
        ptr_b_empty = values.ptr_b.is_empty(),
        "zero values constructed"
    );

    trace!("print");
    writeln!(out, "{GREETING}").context("write greeting")?;
    for line in values.printed() {
        trace!("print");
        writeln!(out, "{line}").context("write value")?;
    }
    out.flush().context("flush output")?;
    Ok(())
}
