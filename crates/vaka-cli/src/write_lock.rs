//! Cross-process exclusion for commands that rewrite the case snapshot.
//!
//! The lock is a file next to the snapshot holding the owner's pid. A lock
//! whose pid is no longer running is removed and retaken.

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const LOCK_WAIT_TIMEOUT: Duration = Duration::from_secs(30);
const LOCK_RETRY_DELAY: Duration = Duration::from_millis(250);

/// Removes the lock file when dropped.
pub struct WriteLockGuard {
    path: PathBuf,
}

impl Drop for WriteLockGuard {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::warn!("Could not release write lock {}: {e}", self.path.display());
        }
    }
}

/// Lock file guarding `snapshot`: the snapshot path with `.lock` appended.
pub fn lock_path_for(snapshot: &Path) -> PathBuf {
    let mut path = OsString::from(snapshot.as_os_str());
    path.push(".lock");
    PathBuf::from(path)
}

/// Block until no other `vaka` process holds the snapshot's write lock.
pub fn acquire_for_snapshot(snapshot: &Path) -> anyhow::Result<WriteLockGuard> {
    acquire(&lock_path_for(snapshot), LOCK_WAIT_TIMEOUT)
}

/// Who currently owns an existing lock file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Holder {
    Running(u32),
    Dead,
    Unreadable,
}

fn acquire(lock_path: &Path, timeout: Duration) -> anyhow::Result<WriteLockGuard> {
    let deadline = Instant::now() + timeout;

    loop {
        let holder = match try_acquire(lock_path) {
            Ok(guard) => return Ok(guard),
            Err(holder) => holder,
        };

        if holder == Holder::Dead && fs::remove_file(lock_path).is_ok() {
            tracing::debug!("Took over stale write lock {}", lock_path.display());
            continue;
        }

        if Instant::now() >= deadline {
            match holder {
                Holder::Running(pid) => anyhow::bail!(
                    "another vaka process is writing cases (pid {pid}); try again after it finishes"
                ),
                _ => anyhow::bail!(
                    "could not acquire write lock at {}; remove the lock file if no vaka process is running",
                    lock_path.display()
                ),
            }
        }

        tracing::debug!("Write lock {} busy ({holder:?}), retrying", lock_path.display());
        std::thread::sleep(LOCK_RETRY_DELAY);
    }
}

fn try_acquire(lock_path: &Path) -> Result<WriteLockGuard, Holder> {
    if let Some(parent) = lock_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        let _ = fs::create_dir_all(parent);
    }

    match OpenOptions::new().create_new(true).write(true).open(lock_path) {
        Ok(mut file) => {
            let _ = writeln!(file, "{}", std::process::id());
            Ok(WriteLockGuard {
                path: lock_path.to_path_buf(),
            })
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(current_holder(lock_path)),
        Err(_) => Err(Holder::Unreadable),
    }
}

fn current_holder(lock_path: &Path) -> Holder {
    let Ok(contents) = fs::read_to_string(lock_path) else {
        return Holder::Unreadable;
    };
    match contents.trim().parse::<u32>() {
        Ok(pid) if is_process_running(pid) => Holder::Running(pid),
        Ok(_) => Holder::Dead,
        Err(_) => Holder::Unreadable,
    }
}

/// `kill -0` succeeds only for a live process we may signal.
fn is_process_running(pid: u32) -> bool {
    std::process::Command::new("kill")
        .args(["-0", &pid.to_string()])
        .status()
        .is_ok_and(|status| status.success())
}
