use std::fs::File;
use std::io::{self, Read};
use std::ops::Deref;
use std::path::Path;

/// An immutable Brainfuck program: the raw source bytes, comments included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    code: Vec<u8>,
}

impl Program {
    /// Read the whole source from `reader`. Any read failure aborts loading.
    pub fn load<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut code = Vec::new();
        reader.read_to_end(&mut code)?;
        log::debug!("loaded program ({} bytes)", code.len());
        Ok(Self { code })
    }

    /// Open `path` and load its contents.
    pub fn from_path<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        Self::load(file)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.code
    }
}

impl Deref for Program {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.code
    }
}

impl From<Vec<u8>> for Program {
    fn from(code: Vec<u8>) -> Self {
        Self { code }
    }
}

impl From<&[u8]> for Program {
    fn from(code: &[u8]) -> Self {
        Self { code: code.to_vec() }
    }
}

impl From<&str> for Program {
    fn from(code: &str) -> Self {
        Self { code: code.as_bytes().to_vec() }
    }
}
