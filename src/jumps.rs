//! Bracket matching.
//!
//! Two strategies resolve where a `[` or `]` jumps to:
//! - [`JumpStrategy::Precompute`] builds a [`JumpTable`] in a single pass
//!   with an explicit stack. Malformed nesting is rejected before any
//!   instruction executes and every jump is an O(1) lookup.
//! - [`JumpStrategy::Scan`] finds the partner at runtime by counting nesting
//!   depth. Nothing is validated upfront, so a stray bracket is only noticed
//!   when a jump from it is actually taken; the scan then stops at the program
//!   boundary with [`BrainfuckError::ScanOutOfBounds`].

use crate::error::{BracketKind, BrainfuckError};

/// How the engine locates matching brackets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum JumpStrategy {
    /// Validate and map every bracket before running.
    #[default]
    Precompute,
    /// Scan for the partner each time a jump is taken.
    Scan,
}

/// Mutual bracket-to-bracket position map.
///
/// `slots[i]` holds the partner of the bracket at `i`; non-bracket positions
/// are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JumpTable {
    slots: Vec<Option<usize>>,
    entries: usize,
}

impl JumpTable {
    /// Resolve every bracket in `code`.
    ///
    /// Fails on the first `]` with nothing to close, or with the innermost
    /// leftover `[` once the scan is done.
    pub fn resolve(code: &[u8]) -> Result<Self, BrainfuckError> {
        let mut slots: Vec<Option<usize>> = vec![None; code.len()];
        let mut entries = 0;
        let mut stack: Vec<usize> = Vec::new();

        for (i, &b) in code.iter().enumerate() {
            match b {
                b'[' => stack.push(i),
                b']' => {
                    let Some(open) = stack.pop() else {
                        return Err(BrainfuckError::UnmatchedBracket {
                            ip: i,
                            kind: BracketKind::Close,
                        });
                    };
                    slots[open] = Some(i);
                    slots[i] = Some(open);
                    entries += 2;
                }
                _ => {}
            }
        }

        if let Some(open) = stack.pop() {
            return Err(BrainfuckError::UnmatchedBracket {
                ip: open,
                kind: BracketKind::Open,
            });
        }

        log::debug!("resolved {} bracket positions", entries);
        Ok(Self { slots, entries })
    }

    /// Partner of the bracket at `pos`, if `pos` holds a bracket.
    pub fn get(&self, pos: usize) -> Option<usize> {
        self.slots.get(pos).copied().flatten()
    }

    /// Number of bracket positions in the table.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// `(bracket, partner)` pairs in program order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(pos, slot)| slot.map(|partner| (pos, partner)))
    }
}

/// Find the `]` closing the `[` at `ip` by walking forward.
pub fn scan_forward(code: &[u8], ip: usize) -> Result<usize, BrainfuckError> {
    let mut depth = 1usize;
    let mut pos = ip;
    while depth > 0 {
        pos += 1;
        match code.get(pos) {
            Some(b'[') => depth += 1,
            Some(b']') => depth -= 1,
            Some(_) => {}
            None => {
                log::warn!("forward scan from {ip} ran past the end of the program");
                return Err(BrainfuckError::ScanOutOfBounds {
                    ip,
                    kind: BracketKind::Open,
                });
            }
        }
    }
    Ok(pos)
}

/// Find the `[` opening the `]` at `ip` by walking backward.
pub fn scan_backward(code: &[u8], ip: usize) -> Result<usize, BrainfuckError> {
    let mut depth = 1usize;
    let mut pos = ip;
    while depth > 0 {
        let Some(prev) = pos.checked_sub(1) else {
            log::warn!("backward scan from {ip} ran past the start of the program");
            return Err(BrainfuckError::ScanOutOfBounds {
                ip,
                kind: BracketKind::Close,
            });
        };
        pos = prev;
        match code[pos] {
            b']' => depth += 1,
            b'[' => depth -= 1,
            _ => {}
        }
    }
    Ok(pos)
}

/// Jump source the engine consults on bracket instructions.
#[derive(Debug, Clone)]
pub(crate) enum Jumps {
    Table(JumpTable),
    Scan,
}

impl Jumps {
    pub(crate) fn prepare(code: &[u8], strategy: JumpStrategy) -> Result<Self, BrainfuckError> {
        log::debug!("jump strategy: {:?}", strategy);
        match strategy {
            JumpStrategy::Precompute => JumpTable::resolve(code).map(Jumps::Table),
            JumpStrategy::Scan => Ok(Jumps::Scan),
        }
    }

    /// Target of the bracket at `ip`.
    pub(crate) fn target(&self, code: &[u8], ip: usize) -> Result<usize, BrainfuckError> {
        match self {
            Jumps::Table(table) => table.get(ip).ok_or_else(|| BrainfuckError::UnmatchedBracket {
                ip,
                kind: if code[ip] == b'[' { BracketKind::Open } else { BracketKind::Close },
            }),
            Jumps::Scan if code[ip] == b'[' => scan_forward(code, ip),
            Jumps::Scan => scan_backward(code, ip),
        }
    }
}
