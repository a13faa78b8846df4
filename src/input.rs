use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};

/// Input that is either a file or stdin ("-").
pub struct InputReader {
    reader: Box<dyn Read>,
    is_pipe: bool,
}

impl InputReader {
    /// Create a new InputReader from a path
    /// Use "-" for stdin pipe input
    pub fn new<P: AsRef<Path>>(input_path: P) -> Result<Self> {
        let path = input_path.as_ref();
        let is_pipe = path.as_os_str() == "-";

        let reader: Box<dyn Read> = if is_pipe {
            Box::new(io::stdin().lock())
        } else {
            let file =
                File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
            Box::new(BufReader::new(file))
        };

        Ok(Self { reader, is_pipe })
    }

    /// Read all remaining data
    pub fn read_all(&mut self) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        self.reader.read_to_end(&mut data)?;
        log::debug!(
            "Read {} bytes from {}",
            data.len(),
            if self.is_pipe { "stdin" } else { "file" }
        );
        Ok(data)
    }
}

/// Reads a whole input path ("-" for stdin).
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    InputReader::new(path)?.read_all()
}

/// Writes `data` to `path`, or to stdout when `path` is "-".
pub fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    if path.as_os_str() == "-" {
        use std::io::Write;
        let mut stdout = io::stdout().lock();
        stdout.write_all(data)?;
        stdout.flush()?;
    } else {
        std::fs::write(path, data).with_context(|| format!("Cannot write {}", path.display()))?;
    }
    Ok(())
}
