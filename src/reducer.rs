use std::cmp;
use std::num::NonZeroUsize;

use bytes::Bytes;
use futures::future;

use thiserror::Error;
use tokio::task::{self, JoinError, JoinHandle};
use tokio::sync::mpsc;

use crate::chunker;
use crate::counter;
use crate::shared_types::{ChunkRange, WordCount};

#[derive(Error, Debug)]
pub(crate) enum CountError {
    #[error("counting worker failed: {0}")]
    WorkerFailed(#[from] JoinError),
    #[error("work queue closed before every chunk was queued")]
    QueueClosed,
    #[error("expected {expected} partial counts, received {received}")]
    MissingPartial { expected: usize, received: usize },
}

/// Counts the words in `buffer`, splitting the work across up to `jobs`
/// parallel workers. The result is always identical to a single pass.
pub(crate) async fn count_words(buffer: Bytes, jobs: NonZeroUsize) -> Result<WordCount, CountError> {
    if buffer.is_empty() {
        return Ok(0);
    }
    if jobs.get() == 1 {
        return Ok(counter::word_count(&buffer));
    }

    let chunks = chunker::make_chunks(&buffer, jobs);
    let worker_count = cmp::min(jobs.get(), chunks.len());
    debug!(
        "counting {} bytes in {} chunks with {worker_count} workers",
        buffer.len(),
        chunks.len()
    );

    let (s_work_q, r_work_q) = async_channel::bounded::<ChunkRange>(chunks.len());
    let (s_partial, mut r_partial) = mpsc::channel::<WordCount>(worker_count);

    for chunk in &chunks {
        s_work_q
            .send(*chunk)
            .await
            .map_err(|_| CountError::QueueClosed)?;
    }
    s_work_q.close();

    let handles = (0..worker_count)
        .map(|_| spawn_count_worker(buffer.clone(), r_work_q.clone(), s_partial.clone()))
        .collect::<Vec<_>>();
    drop(s_partial);

    let mut total = 0;
    let mut received = 0;
    while let Some(partial) = r_partial.recv().await {
        total += partial;
        received += 1;
    }

    for joined in future::join_all(handles).await {
        joined?;
    }

    if received != chunks.len() {
        return Err(CountError::MissingPartial {
            expected: chunks.len(),
            received,
        });
    }
    Ok(total)
}

fn spawn_count_worker(
    buffer: Bytes,
    r_work_q: async_channel::Receiver<ChunkRange>,
    s_partial: mpsc::Sender<WordCount>,
) -> JoinHandle<()> {
    task::spawn_blocking(move || {
        while let Ok(chunk) = r_work_q.recv_blocking() {
            let partial = counter::word_count(&buffer[chunk.start..chunk.end]);
            trace!("chunk {:?} ({} bytes): {partial} words", chunk, chunk.len());
            if s_partial.blocking_send(partial).is_err() {
                break;
            }
        }
    })
}
