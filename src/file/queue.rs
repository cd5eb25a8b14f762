//! Post-processing job queue.
//!
//! Image uploads hand a [`ThumbnailJob`] to whatever consumes the receiving
//! end of the channel. Sending never blocks and never fails from the
//! sender's point of view: a full or closed channel is logged and the job is
//! dropped.

use serde::Serialize;
use tokio::sync::mpsc::{self, error::TrySendError};

use super::metadata::FileId;
use crate::auth::UserId;

/// Request to post-process a newly created image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailJob {
    pub owner_id: UserId,
    pub file_id: FileId,
}

/// Sending half of the post-processing queue.
#[derive(Debug, Clone)]
pub struct JobQueue {
    tx: mpsc::Sender<ThumbnailJob>,
}

impl JobQueue {
    /// Create a queue buffering up to `capacity` jobs.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<ThumbnailJob>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, rx)
    }

    /// Hand a job to the consumer without waiting.
    pub fn enqueue(&self, job: ThumbnailJob) {
        match self.tx.try_send(job) {
            Ok(()) => {}
            Err(TrySendError::Full(job)) => {
                tracing::warn!(
                    owner_id = %job.owner_id,
                    file_id = %job.file_id,
                    "Job queue full, dropping thumbnail job"
                );
            }
            Err(TrySendError::Closed(job)) => {
                tracing::warn!(
                    owner_id = %job.owner_id,
                    file_id = %job.file_id,
                    "Job queue closed, dropping thumbnail job"
                );
            }
        }
    }
}
