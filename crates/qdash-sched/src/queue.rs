//! Queue positions for active jobs.
//!
//! Positions are derived, never stored by clients: every active job
//! (`Queued` or `Running`) gets a dense rank `0..K` by creation time, and
//! every other job has no position.

use crate::job::Job;

/// Recompute queue positions over the full job set.
///
/// Active jobs are ordered by `created_at`, then by `id` so that jobs created
/// within the same clock tick still get a deterministic order. Calling this
/// twice without a mutation in between yields the same positions.
pub fn recompute_positions<'a>(jobs: impl IntoIterator<Item = &'a mut Job>) {
    let mut active: Vec<&mut Job> = Vec::new();

    for job in jobs {
        if job.status.is_active() {
            active.push(job);
        } else {
            job.queue_position = None;
        }
    }

    active.sort_by_key(|job| (job.created_at, job.id));

    for (position, job) in active.into_iter().enumerate() {
        job.queue_position = Some(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::{DEFAULT_BACKEND, JobId, JobStatus};
    use chrono::{Duration, Utc};

    fn job(id: u64, status: JobStatus) -> Job {
        let mut job = Job::new(JobId(id), DEFAULT_BACKEND.to_string(), 2, 1024);
        job.status = status;
        job
    }

    #[test]
    fn test_positions_follow_creation_order() {
        let now = Utc::now();
        let mut a = job(1, JobStatus::Queued);
        let mut b = job(2, JobStatus::Queued);
        let mut c = job(3, JobStatus::Running);
        a.created_at = now + Duration::seconds(2);
        b.created_at = now;
        c.created_at = now + Duration::seconds(1);

        let mut jobs = vec![a, b, c];
        recompute_positions(jobs.iter_mut());

        assert_eq!(jobs[0].queue_position, Some(2));
        assert_eq!(jobs[1].queue_position, Some(0));
        assert_eq!(jobs[2].queue_position, Some(1));
    }

    #[test]
    fn test_ties_broken_by_id() {
        let now = Utc::now();
        let mut jobs: Vec<Job> = [3, 1, 2]
            .into_iter()
            .map(|id| {
                let mut j = job(id, JobStatus::Queued);
                j.created_at = now;
                j
            })
            .collect();

        recompute_positions(jobs.iter_mut());

        let positions: Vec<_> = jobs.iter().map(|j| (j.id.0, j.queue_position)).collect();
        assert_eq!(positions, vec![(3, Some(2)), (1, Some(0)), (2, Some(1))]);
    }

    #[test]
    fn test_inactive_jobs_lose_position() {
        let mut done = job(1, JobStatus::Completed);
        done.queue_position = Some(0);
        let mut cancelled = job(2, JobStatus::Cancelled);
        cancelled.queue_position = Some(1);
        let queued = job(3, JobStatus::Queued);

        let mut jobs = vec![done, cancelled, queued];
        recompute_positions(jobs.iter_mut());

        assert_eq!(jobs[0].queue_position, None);
        assert_eq!(jobs[1].queue_position, None);
        assert_eq!(jobs[2].queue_position, Some(0));
    }

    #[test]
    fn test_idempotent() {
        let mut jobs: Vec<Job> = (1..=4)
            .map(|id| job(id, if id % 2 == 0 { JobStatus::Error } else { JobStatus::Queued }))
            .collect();

        recompute_positions(jobs.iter_mut());
        let first: Vec<_> = jobs.iter().map(|j| j.queue_position).collect();
        recompute_positions(jobs.iter_mut());
        let second: Vec<_> = jobs.iter().map(|j| j.queue_position).collect();

        assert_eq!(first, second);
    }
}
