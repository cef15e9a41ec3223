//! Fallback mechanism: OSC 52 escape sequence.
//!
//! Writes `ESC ] 52 ; c ; <base64> BEL` to the terminal, asking the
//! emulator to place the payload on the clipboard. This is the legacy
//! route for environments without a reachable system clipboard (SSH,
//! containers). The writer is flushed on every branch so no partial
//! sequence lingers in the output stream.

use super::Backend;
use anyhow::Context;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::io::Write;

/// OSC 52 backend over an arbitrary writer. Production uses stdout; tests
/// substitute a buffer and inspect the emitted bytes.
pub struct Osc52Clipboard<W: Write + Send> {
    out: W,
}

impl Osc52Clipboard<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write + Send> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

/// Build the complete escape sequence for `text`.
fn sequence(text: &str) -> Vec<u8> {
    let payload = STANDARD.encode(text.as_bytes());
    let mut seq = Vec::with_capacity(payload.len() + 8);
    seq.extend_from_slice(b"\x1b]52;c;");
    seq.extend_from_slice(payload.as_bytes());
    seq.push(0x07);
    seq
}

impl<W: Write + Send> Backend for Osc52Clipboard<W> {
    fn name(&self) -> &'static str {
        "osc52"
    }

    fn write(&mut self, text: &str) -> anyhow::Result<()> {
        self.out
            .write_all(&sequence(text))
            .context("failed to write osc52 sequence")?;
        self.out.flush().context("failed to flush osc52 sequence")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_wraps_base64_payload() {
        let seq = sequence("hi");
        // "hi" encodes to "aGk="
        assert_eq!(seq, b"\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn backend_emits_one_complete_sequence() {
        let mut backend = Osc52Clipboard::new(Vec::new());
        backend.write("alice@example.com").unwrap();

        let out = backend.out;
        assert!(out.starts_with(b"\x1b]52;c;"));
        assert!(out.ends_with(&[0x07]));
        // Exactly one sequence: one ESC, one BEL terminator.
        assert_eq!(out.iter().filter(|&&b| b == 0x1b).count(), 1);
        assert_eq!(out.iter().filter(|&&b| b == 0x07).count(), 1);
    }

    #[test]
    fn payload_round_trips() {
        let text = "mail me: you@example.com";
        let seq = sequence(text);
        let payload = &seq[7..seq.len() - 1];
        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(decoded, text.as_bytes());
    }
}
