//! The single process-wide store lock.
//!
//! Every mutation path - update requests and assignment passes alike -
//! goes through one lock guarding the whole workbook. There is no
//! per-sheet granularity; callers rely on full serialization of writes.
//! The guard is the only way to reach the workbook, so release on every
//! exit path is structural rather than a convention.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};

use tabsync_core::Workbook;

/// Exclusive access to the workbook for the duration of one operation.
pub type SheetGuard<'a> = MutexGuard<'a, Workbook>;

/// Bounded-wait acquisition failed; the caller should surface this as a
/// transient busy condition, never proceed unlocked.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Timed out after {waited_ms}ms waiting for the store lock")]
pub struct LockTimeout {
    pub waited_ms: u64,
}

/// Handle to the workbook behind the global lock. Cheap to clone; all
/// clones contend on the same lock.
#[derive(Clone)]
pub struct SheetLock {
    inner: Arc<Mutex<Workbook>>,
}

impl SheetLock {
    pub fn new(workbook: Workbook) -> Self {
        Self {
            inner: Arc::new(Mutex::new(workbook)),
        }
    }

    /// Wait for exclusive access, up to `timeout`.
    ///
    /// The wait is cooperative (no busy-poll); on timeout the caller gets
    /// [`LockTimeout`] and the workbook was never touched.
    pub async fn acquire(&self, timeout: Duration) -> Result<SheetGuard<'_>, LockTimeout> {
        tokio::time::timeout(timeout, self.inner.lock())
            .await
            .map_err(|_| LockTimeout {
                waited_ms: timeout.as_millis() as u64,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabsync_core::Sheet;

    fn lock_with_sheet() -> SheetLock {
        let mut wb = Workbook::new();
        wb.push_sheet(Sheet::new("s"));
        SheetLock::new(wb)
    }

    #[tokio::test]
    async fn test_acquire_grants_access() {
        let lock = lock_with_sheet();
        let guard = lock.acquire(Duration::from_millis(100)).await.unwrap();
        assert_eq!(guard.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_acquire_times_out_while_held() {
        let lock = lock_with_sheet();
        let _held = lock.acquire(Duration::from_millis(100)).await.unwrap();

        let err = lock.acquire(Duration::from_millis(50)).await.unwrap_err();
        assert_eq!(err.waited_ms, 50);
    }

    #[tokio::test(start_paused = true)]
    async fn test_release_on_drop_unblocks_waiter() {
        let lock = lock_with_sheet();
        let held = lock.acquire(Duration::from_millis(100)).await.unwrap();

        let contender = {
            let lock = lock.clone();
            tokio::spawn(async move {
                lock.acquire(Duration::from_secs(10)).await.map(|_| ())
            })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        drop(held);

        contender.await.unwrap().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_writers_fully_serialize() {
        let lock = lock_with_sheet();
        let mut handles = Vec::new();
        for i in 0..4u64 {
            let lock = lock.clone();
            handles.push(tokio::spawn(async move {
                let mut guard = lock.acquire(Duration::from_secs(10)).await.unwrap();
                // Append one row while holding the lock across an await
                // point; interleaving would lose appends.
                let sheet = guard.sheet_mut(0).unwrap();
                let next = sheet.last_row() + 1;
                tokio::time::sleep(Duration::from_millis(5)).await;
                sheet
                    .set(next, 1, tabsync_core::Cell::from(format!("task-{i}")))
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let guard = lock.acquire(Duration::from_millis(100)).await.unwrap();
        assert_eq!(guard.sheet(0).unwrap().last_row(), 4);
    }
}
