//! Line-oriented DBC parsing.

use regex::Regex;
use tracing::{debug, warn};

use dbcview_core::{Database, Message, Node, Signal};
use dbcview_error::{Error, ErrorKind, Result};

/// Bit 31 of a `BO_` id marks a 29-bit extended frame.
pub const EXTENDED_ID_FLAG: u32 = 0x8000_0000;

/// Stand-in node name used by DBC editors for "nobody".
pub const PLACEHOLDER_NODE: &str = "Vector__XXX";

/// Pseudo message that holds signals not assigned to any frame.
const INDEPENDENT_SIGNALS_MESSAGE: &str = "VECTOR__INDEPENDENT_SIG_MSG";

/// Where `SG_` lines currently attach.
enum Current {
    Nothing,
    Message(usize),
    Skipped,
}

/// Compiled patterns for the statements dbcview reads.
pub struct DbcParser {
    nodes_re: Regex,
    message_re: Regex,
    signal_re: Regex,
    tx_senders_re: Regex,
}

impl DbcParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            nodes_re: compile(r"^BU_\s*:(.*)$")?,
            // BO_ <id> <name>: <dlc> <sender>
            message_re: compile(r"^BO_\s+(\d+)\s+(\w+)\s*:\s*(\d+)\s+(\w+)")?,
            // SG_ <name> [mux] : <start>|<len>@<order><sign> (<f>,<o>) [<min>|<max>]
            //     "<unit>" <receivers>
            signal_re: compile(concat!(
                r"^SG_\s+(\w+)\s*(?:\w+\s*)?:\s*\d+\|\d+@[01][+-]\s*",
                r#"\([^)]*\)\s*\[[^\]]*\]\s*"[^"]*"\s*(.*)$"#,
            ))?,
            tx_senders_re: compile(r"^BO_TX_BU_\s+(\d+)\s*:\s*([^;]*);?")?,
        })
    }

    pub fn parse(&self, source: &str) -> Result<Database> {
        let mut nodes: Vec<Node> = Vec::new();
        let mut messages: Vec<Message> = Vec::new();
        let mut current = Current::Nothing;
        let mut in_string = false;

        for (idx, line) in source.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = line.trim();

            // continuation lines of a multi-line "..." (e.g. CM_) are text, not statements
            let continues_string = in_string;
            in_string ^= odd_quote_count(line);
            if continues_string {
                continue;
            }

            if trimmed.starts_with("BO_TX_BU_") {
                self.parse_tx_senders(trimmed, line_no, &mut messages)?;
            } else if trimmed.starts_with("BO_ ") || trimmed == "BO_" {
                let message = self.parse_message(trimmed, line_no)?;
                current = if message.name == INDEPENDENT_SIGNALS_MESSAGE {
                    Current::Skipped
                } else {
                    messages.push(message);
                    Current::Message(messages.len() - 1)
                };
            } else if trimmed.starts_with("SG_ ") {
                let signal = self.parse_signal(trimmed, line_no)?;
                match current {
                    Current::Message(i) => messages[i].signals.push(signal),
                    Current::Skipped => {}
                    Current::Nothing => {
                        return Err(Error::parse_failed(line_no, "signal outside of a message")
                            .with_operation("dbc::parse"));
                    }
                }
            } else if let Some(caps) = self.nodes_re.captures(trimmed) {
                nodes.extend(
                    caps[1]
                        .split_whitespace()
                        .filter(|n| *n != PLACEHOLDER_NODE)
                        .map(Node::new),
                );
                current = Current::Nothing;
            } else if !trimmed.is_empty() {
                current = Current::Nothing;
            }
        }

        debug!(
            nodes = nodes.len(),
            messages = messages.len(),
            "parsed dbc source"
        );
        Ok(Database::new(nodes, messages))
    }

    fn parse_message(&self, line: &str, line_no: usize) -> Result<Message> {
        let caps = self.message_re.captures(line).ok_or_else(|| {
            Error::parse_failed(line_no, format!("malformed message definition: {line}"))
                .with_operation("dbc::parse_message")
        })?;

        let raw_id = parse_number::<u32>(&caps[1], line_no, "message id")?;
        let dlc = parse_number::<u8>(&caps[3], line_no, "message length")?;
        let sender = &caps[4];

        Ok(Message {
            frame_id: raw_id & !EXTENDED_ID_FLAG,
            name: caps[2].to_string(),
            dlc,
            is_extended: raw_id & EXTENDED_ID_FLAG != 0,
            senders: named_nodes([sender]),
            signals: Vec::new(),
        })
    }

    fn parse_signal(&self, line: &str, line_no: usize) -> Result<Signal> {
        let caps = self.signal_re.captures(line).ok_or_else(|| {
            Error::parse_failed(line_no, format!("malformed signal definition: {line}"))
                .with_operation("dbc::parse_signal")
        })?;

        Ok(Signal {
            name: caps[1].to_string(),
            receivers: named_nodes(caps[2].split([',', ' ', '\t'])),
        })
    }

    fn parse_tx_senders(
        &self,
        line: &str,
        line_no: usize,
        messages: &mut [Message],
    ) -> Result<()> {
        let caps = self.tx_senders_re.captures(line).ok_or_else(|| {
            Error::parse_failed(line_no, format!("malformed sender list: {line}"))
                .with_operation("dbc::parse_tx_senders")
        })?;

        let frame_id = parse_number::<u32>(&caps[1], line_no, "message id")? & !EXTENDED_ID_FLAG;
        let Some(message) = messages.iter_mut().find(|m| m.frame_id == frame_id) else {
            warn!(line = line_no, frame_id, "sender list for unknown message");
            return Ok(());
        };

        for sender in named_nodes(caps[2].split(',')) {
            if !message.senders.contains(&sender) {
                message.senders.push(sender);
            }
        }
        Ok(())
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        Error::new(ErrorKind::Unexpected, "invalid DBC pattern")
            .with_operation("dbc::compile")
            .with_context("pattern", pattern)
            .set_source(e)
    })
}

fn parse_number<T: std::str::FromStr>(text: &str, line_no: usize, what: &str) -> Result<T> {
    text.parse::<T>().map_err(|_| {
        Error::parse_failed(line_no, format!("invalid {what}: {text}")).with_operation("dbc::parse")
    })
}

/// True if `line` holds an odd number of unescaped `"`.
fn odd_quote_count(line: &str) -> bool {
    let mut odd = false;
    let mut escaped = false;
    for c in line.chars() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => odd = !odd,
            _ => {}
        }
    }
    odd
}

/// Trimmed, non-empty names with the placeholder node removed.
fn named_nodes<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    names
        .into_iter()
        .map(str::trim)
        .filter(|n| !n.is_empty() && *n != PLACEHOLDER_NODE)
        .map(str::to_string)
        .collect()
}
