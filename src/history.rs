use anyhow::anyhow;
use std::str::FromStr;

pub type History = Vec<String>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    Plain,
    Zsh,
}

impl FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Format::Plain),
            "zsh" => Ok(Format::Zsh),
            _ => Err(anyhow!("unknown format `{}` (available: plain, zsh)", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Shell {
    Bash,
    Zsh,
}

impl Shell {
    /// History file, relative to the home directory.
    pub fn history_file(self) -> &'static str {
        match self {
            Shell::Bash => ".bash_history",
            Shell::Zsh => ".zsh_history",
        }
    }

    pub fn format(self) -> Format {
        match self {
            Shell::Bash => Format::Plain,
            Shell::Zsh => Format::Zsh,
        }
    }
}

impl FromStr for Shell {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            _ => Err(anyhow!("{} is not supported yet.", s)),
        }
    }
}

trait FromBytes {
    fn from_bytes(bytes: &[u8]) -> History;
}

impl FromBytes for History {
    fn from_bytes(bytes: &[u8]) -> History {
        let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
        if bytes.is_empty() {
            return History::new();
        }
        bytes
            .split(|byte| *byte == b'\n')
            .map(|line| String::from_utf8_lossy(line).into_owned())
            .collect()
    }
}

pub fn parse(bytes: Vec<u8>, format: Format) -> History {
    match format {
        Format::Plain => History::from_bytes(&bytes),
        Format::Zsh => zsh::process_history(bytes),
    }
}

mod zsh {
    use super::{FromBytes, History};
    use regex::Regex;

    pub fn process_history(history: Vec<u8>) -> History {
        remove_timestamps(History::from_bytes(&unmetafy(history)))
    }

    pub(super) fn unmetafy(bytestring: Vec<u8>) -> Vec<u8> {
        /* zsh escapes bytes it treats as special: each one is written as Meta
         * followed by the original byte XOR-ed with 32.
         *
         * ('a', 'b', Meta, 'c' ^ 32) -> ('a', 'b', 'c')
         */
        const ZSH_META: u8 = 0x83;

        let mut unmetafied = Vec::with_capacity(bytestring.len());
        let mut bytes = bytestring.into_iter();
        while let Some(byte) = bytes.next() {
            if byte == ZSH_META {
                if let Some(escaped) = bytes.next() {
                    unmetafied.push(escaped ^ 32);
                    continue;
                }
            }
            unmetafied.push(byte);
        }
        unmetafied
    }

    pub(super) fn remove_timestamps(history: History) -> History {
        /* Extended history lines carry a prefix:
         *
         * `: 1330648651:0;sudo reboot`
         */
        let r = Regex::new(r"^: \d{10}:\d+;").expect("valid timestamp pattern");
        history
            .iter()
            .map(|line| r.replace(line, "").into_owned())
            .collect()
    }
}
