use std::io;
use std::path::PathBuf;

use bytes::Bytes;
use thiserror::Error;
use tokio::io::AsyncReadExt;

use crate::reducer::CountError;

pub(crate) const STDIN_ARG: &str = "-";

#[derive(Error, Debug)]
pub(crate) enum CountFileError {
    #[error("count {name:?}: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("count {name:?}: {source}")]
    Count {
        name: String,
        #[source]
        source: CountError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub(crate) fn from_arg(arg: &str) -> Self {
        if arg == STDIN_ARG {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }

    pub(crate) fn name(&self) -> String {
        match self {
            InputSource::Stdin => STDIN_ARG.to_owned(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// Reads the whole source into memory.
    pub(crate) async fn read_all(&self) -> Result<Bytes, CountFileError> {
        let read = match self {
            InputSource::Stdin => {
                let mut input = Vec::new();
                tokio::io::stdin()
                    .read_to_end(&mut input)
                    .await
                    .map(|_| input)
            }
            InputSource::File(path) => tokio::fs::read(path).await,
        };
        read.map(Bytes::from).map_err(|source| CountFileError::Read {
            name: self.name(),
            source,
        })
    }
}
