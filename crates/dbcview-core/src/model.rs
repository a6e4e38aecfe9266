//! Plain records for a loaded CAN database.

/// A network participant, e.g. an ECU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A named field inside a message with its own consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    pub name: String,
    pub receivers: Vec<String>,
}

impl Signal {
    pub fn new(name: impl Into<String>, receivers: &[&str]) -> Self {
        Self {
            name: name.into(),
            receivers: receivers.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// A CAN frame definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Arbitration id with the extended-frame flag already stripped.
    pub frame_id: u32,
    pub name: String,
    /// Payload length in bytes.
    pub dlc: u8,
    pub is_extended: bool,
    pub senders: Vec<String>,
    pub signals: Vec<Signal>,
}

impl Message {
    pub fn new(frame_id: u32, name: impl Into<String>, senders: &[&str]) -> Self {
        Self {
            frame_id,
            name: name.into(),
            dlc: 8,
            is_extended: false,
            senders: senders.iter().map(|s| s.to_string()).collect(),
            signals: Vec::new(),
        }
    }

    pub fn with_signal(mut self, signal: Signal) -> Self {
        self.signals.push(signal);
        self
    }

    /// True if `node` is one of the declared senders.
    pub fn is_sent_by(&self, node: &str) -> bool {
        self.senders.iter().any(|s| s == node)
    }

    /// True if any signal of the message lists `node` as a receiver.
    pub fn is_received_by(&self, node: &str) -> bool {
        self.signals
            .iter()
            .any(|sig| sig.receivers.iter().any(|r| r == node))
    }

    /// Edge label: name, then hex and decimal id.
    pub fn label(&self) -> String {
        format!("{}\n{:#x} ({})", self.name, self.frame_id, self.frame_id)
    }
}

/// Everything the parser hands over: declared nodes and messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Database {
    pub nodes: Vec<Node>,
    pub messages: Vec<Message>,
}

impl Database {
    pub fn new(nodes: Vec<Node>, messages: Vec<Message>) -> Self {
        Self { nodes, messages }
    }
}
