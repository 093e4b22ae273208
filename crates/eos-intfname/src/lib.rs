//! Interface Name Lookup
//!
//! Command-line front end for [`eos_intf`]: takes raw EOS interface IDs from
//! the command line or stdin and prints the interface names they decode to.

pub mod error;

pub use error::*;

use eos_intf::IntfId;
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// How each decoded ID is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Name only
    #[default]
    Text,
    /// Hex ID and name separated by a tab
    Verbose,
    /// One JSON object per line
    Json,
}

/// A decoded interface ID, as emitted in JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decoded {
    pub id: IntfId,
    pub hex: String,
    pub type_code: u8,
    #[serde(rename = "type")]
    pub type_name: &'static str,
    pub port: String,
    pub name: String,
}

impl From<IntfId> for Decoded {
    fn from(id: IntfId) -> Self {
        Self {
            id,
            hex: format!("0x{:08x}", id.as_u32()),
            type_code: id.type_code(),
            type_name: id.type_name(),
            port: id.port(),
            name: id.to_string(),
        }
    }
}

/// Totals for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Tokens decoded and written
    pub decoded: usize,
    /// Tokens that did not parse as an interface ID
    pub failed: usize,
}

impl Summary {
    /// Returns true if no token failed
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Parse a single token and decode it
pub fn decode_token(token: &str) -> Result<Decoded> {
    let id: IntfId = token.parse()?;
    let decoded = Decoded::from(id);
    debug!(id = %decoded.hex, name = %decoded.name, "decoded interface id");
    Ok(decoded)
}

/// Write one decoded ID in the requested format
pub fn write_decoded<W: Write>(out: &mut W, decoded: &Decoded, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", decoded.name)?,
        OutputFormat::Verbose => writeln!(out, "{}\t{}", decoded.hex, decoded.name)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, decoded)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write the known type table as `code<TAB>name` lines
pub fn write_type_table<W: Write>(out: &mut W) -> Result<()> {
    for t in eos_intf::IntfType::ALL {
        writeln!(out, "0x{:02x}\t{}", t.code(), t.name())?;
    }
    Ok(())
}

/// Collect whitespace-separated tokens from a reader
pub fn read_tokens<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    for line in reader.lines() {
        let line = line?;
        tokens.extend(line.split_whitespace().map(str::to_string));
    }
    Ok(tokens)
}

/// Decode every token, writing names to `out` and failures to `err`.
///
/// Bad tokens do not stop the run; they are counted in the returned summary.
/// Only I/O failures on the writers are returned as errors.
pub fn run<I, S, W, E>(tokens: I, out: &mut W, err: &mut E, format: OutputFormat) -> Result<Summary>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
    E: Write,
{
    let mut summary = Summary::default();

    for token in tokens {
        let token = token.as_ref();
        match decode_token(token) {
            Ok(decoded) => {
                write_decoded(out, &decoded, format)?;
                summary.decoded += 1;
            }
            Err(e) => {
                warn!(token, error = %e, "skipping token");
                writeln!(err, "error: {}", e)?;
                summary.failed += 1;
            }
        }
    }

    out.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_to_strings(tokens: &[&str], format: OutputFormat) -> (String, String, Summary) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let summary = run(tokens, &mut out, &mut err, format).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            summary,
        )
    }

    #[test]
    fn test_decode_token() {
        let d = decode_token("0x000c0202").unwrap();
        assert_eq!(d.name, "Ethernet3/1/2");
        assert_eq!(d.hex, "0x000c0202");
        assert_eq!(d.type_code, 0);
        assert_eq!(d.type_name, "Ethernet");
        assert_eq!(d.port, "3/1/2");
    }

    #[test]
    fn test_decode_token_invalid() {
        assert!(matches!(decode_token("Ethernet1"), Err(IntfNameError::Parse(_))));
    }

    #[test]
    fn test_run_text() {
        let (out, err, summary) = run_to_strings(&["0x000c0202", "1"], OutputFormat::Text);
        assert_eq!(out, "Ethernet3/1/2\nEthernet1\n");
        assert_eq!(err, "");
        assert_eq!(summary, Summary { decoded: 2, failed: 0 });
        assert!(summary.is_success());
    }

    #[test]
    fn test_run_verbose() {
        let (out, _, _) = run_to_strings(&["0xcc000000"], OutputFormat::Verbose);
        assert_eq!(out, "0xcc000000\tfwd0\n");
    }

    #[test]
    fn test_run_json() {
        let (out, _, _) = run_to_strings(&["0x000c0202"], OutputFormat::Json);
        assert_eq!(
            out,
            "{\"id\":786946,\"hex\":\"0x000c0202\",\"type_code\":0,\"type\":\"Ethernet\",\"port\":\"3/1/2\",\"name\":\"Ethernet3/1/2\"}\n"
        );
    }

    #[test]
    fn test_run_continues_past_bad_tokens() {
        let (out, err, summary) = run_to_strings(&["nope", "0x0c000000"], OutputFormat::Text);
        assert_eq!(out, "Cpu\n");
        assert!(err.starts_with("error: Parse error: invalid interface ID: \"nope\""));
        assert_eq!(summary, Summary { decoded: 1, failed: 1 });
        assert!(!summary.is_success());
    }

    #[test]
    fn test_read_tokens() {
        let input = "0x1 2\n\n  0x000c0202\t3\n";
        let tokens = read_tokens(input.as_bytes()).unwrap();
        assert_eq!(tokens, vec!["0x1", "2", "0x000c0202", "3"]);
    }

    #[test]
    fn test_type_table() {
        let mut out = Vec::new();
        write_type_table(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 32);
        assert_eq!(lines[0], "0x00\tEthernet");
        assert_eq!(lines[2], "0x02\tMangement");
        assert_eq!(lines[31], "0x66\tfwd");
    }
}
