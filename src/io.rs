use anyhow::{anyhow, Context, Result};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

pub fn read_as_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let mut file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(buffer)
}

pub fn read_stdin<R: Read>(mut stdin: R) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    stdin
        .read_to_end(&mut buffer)
        .context("failed to read standard input")?;
    Ok(buffer)
}

pub fn home_path(path: impl AsRef<Path>) -> Result<PathBuf> {
    /* `path` is relative to the home directory */
    let home = dirs::home_dir().ok_or_else(|| anyhow!("unable to determine home directory"))?;
    Ok(home.join(path))
}

pub fn write_lines<W: Write>(mut writer: W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}
