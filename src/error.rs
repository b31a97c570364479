use std::fmt;

/// Errors that can occur while resolving jumps or executing a program.
#[derive(Debug, thiserror::Error)]
pub enum BrainfuckError {
    /// A `[` or `]` has no partner. Reported before any instruction runs
    /// when jumps are precomputed.
    #[error("Unmatched bracket {kind} at instruction {ip}")]
    UnmatchedBracket { ip: usize, kind: BracketKind },

    /// A runtime bracket scan walked off either end of the program.
    #[error("Bracket scan from {kind} at instruction {ip} left the program")]
    ScanOutOfBounds { ip: usize, kind: BracketKind },

    /// Writing to the output collaborator failed.
    #[error("I/O error at instruction {ip}: {source}")]
    Io { ip: usize, #[source] source: std::io::Error },
}

impl BrainfuckError {
    /// Instruction position the error refers to.
    pub fn ip(&self) -> usize {
        match self {
            BrainfuckError::UnmatchedBracket { ip, .. }
            | BrainfuckError::ScanOutOfBounds { ip, .. }
            | BrainfuckError::Io { ip, .. } => *ip,
        }
    }
}

/// Which side of the loop was unmatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketKind {
    Open,
    Close,
}

impl fmt::Display for BracketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketKind::Open => write!(f, "'['"),
            BracketKind::Close => write!(f, "']'"),
        }
    }
}
