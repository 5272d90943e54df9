use std::num::NonZeroUsize;

use futures::future;

use crate::reducer;
use crate::shared_types::WordCount;
use crate::source::{CountFileError, InputSource};

pub(crate) struct CountPreferences {
    pub(crate) inputs: Vec<InputSource>,
    pub(crate) jobs: NonZeroUsize,
}

#[derive(Debug)]
pub(crate) struct FileReport {
    pub(crate) name: String,
    pub(crate) result: Result<WordCount, CountFileError>,
}

/// Counts every input concurrently. Reports come back in argument order.
pub(crate) async fn start_count(prefs: CountPreferences) -> Vec<FileReport> {
    let jobs = prefs.jobs;
    debug!("counting {} inputs with {jobs} jobs each", prefs.inputs.len());

    future::join_all(prefs.inputs.into_iter().map(move |input| async move {
        let result = count_input(&input, jobs).await;
        if let Err(e) = &result {
            debug!("{e}");
        }
        FileReport {
            name: input.name(),
            result,
        }
    }))
    .await
}

async fn count_input(input: &InputSource, jobs: NonZeroUsize) -> Result<WordCount, CountFileError> {
    let buffer = input.read_all().await?;
    debug!("read {} bytes from {}", buffer.len(), input.name());
    reducer::count_words(buffer, jobs)
        .await
        .map_err(|source| CountFileError::Count {
            name: input.name(),
            source,
        })
}
