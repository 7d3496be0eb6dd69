use std::{
    fmt,
    fs::File,
    io::{self, Stdout, Write},
    path::{Path, PathBuf},
};

use crate::error::Error;

/// Where logged values go, as configured by the host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Output {
    #[default]
    Stdout,
    File(PathBuf),
}

impl Output {
    /// An empty path selects standard output.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            Self::Stdout
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// Opens the destination. Files are created or truncated.
    pub fn open(&self) -> Result<Sink, Error> {
        match self {
            Self::Stdout => Ok(Sink::Stdout(io::stdout())),
            Self::File(path) => File::create(path)
                .map(Sink::File)
                .map_err(|source| Error::OpenOutput {
                    path: path.clone(),
                    source,
                }),
        }
    }
}

/// Exclusively owned output stream of a value logger.
pub enum Sink {
    Stdout(Stdout),
    File(File),
    /// Host-provided writer.
    Writer(Box<dyn Write>),
}

impl Sink {
    pub fn writer(writer: impl Write + 'static) -> Self {
        Self::Writer(Box::new(writer))
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout(_) => f.write_str("Sink::Stdout"),
            Self::File(file) => f.debug_tuple("Sink::File").field(file).finish(),
            Self::Writer(_) => f.write_str("Sink::Writer"),
        }
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(out) => out.write(buf),
            Self::File(file) => file.write(buf),
            Self::Writer(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(out) => out.flush(),
            Self::File(file) => file.flush(),
            Self::Writer(writer) => writer.flush(),
        }
    }
}
