//! Line Ending Policy
//!
//! Maps the user-facing line-ending choices to the delimiter bytes a
//! framing transport appends to outbound text. Display-side splitting
//! never consults this; it always keys on `\n`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Outbound line-ending selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineEnding {
    /// Send text as typed
    None,
    /// Append `\n`
    #[default]
    Newline,
    /// Append `\r`
    CarriageReturn,
    /// Append `\r\n`
    Both,
}

impl LineEnding {
    /// Every policy, in the order a selection control lists them
    pub const ALL: [LineEnding; 4] = [
        LineEnding::None,
        LineEnding::Newline,
        LineEnding::CarriageReturn,
        LineEnding::Both,
    ];

    /// Delimiter sequence for this policy
    pub fn delimiter(self) -> &'static str {
        match self {
            LineEnding::None => "",
            LineEnding::Newline => "\n",
            LineEnding::CarriageReturn => "\r",
            LineEnding::Both => "\r\n",
        }
    }

    /// Label shown in the selection control
    pub fn label(self) -> &'static str {
        match self {
            LineEnding::None => "No line ending",
            LineEnding::Newline => "Newline",
            LineEnding::CarriageReturn => "Carriage return",
            LineEnding::Both => "Both NL & CR",
        }
    }

    /// Config-file name of this policy
    pub fn name(self) -> &'static str {
        match self {
            LineEnding::None => "none",
            LineEnding::Newline => "newline",
            LineEnding::CarriageReturn => "carriage_return",
            LineEnding::Both => "both",
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LineEnding {
    type Err = Error;

    /// Accepts either the config name or the user-facing label, case-insensitively
    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        LineEnding::ALL
            .into_iter()
            .find(|ending| {
                ending.name().eq_ignore_ascii_case(needle)
                    || ending.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| Error::UnknownLineEnding {
                label: s.to_string(),
            })
    }
}
