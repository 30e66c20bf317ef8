use crate::collaborator::{CollaboratorResolver, PosixScript};
use crate::launch::{LaunchRequest, ProcessLauncher};
use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Launcher that records requests instead of spawning anything.
pub(crate) struct RecordingLauncher {
    calls: RefCell<Vec<LaunchRequest>>,
    outcome: Result<i32, io::ErrorKind>,
}

impl RecordingLauncher {
    pub(crate) fn exiting_with(code: i32) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            outcome: Ok(code),
        }
    }

    pub(crate) fn failing_to_spawn() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            outcome: Err(io::ErrorKind::NotFound),
        }
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub(crate) fn only_call(&self) -> LaunchRequest {
        let calls = self.calls.borrow();
        assert_eq!(calls.len(), 1, "expected exactly one launch");
        calls[0].clone()
    }
}

impl ProcessLauncher for RecordingLauncher {
    fn launch(&self, request: &LaunchRequest) -> io::Result<i32> {
        self.calls.borrow_mut().push(request.clone());
        self.outcome
            .map_err(|kind| io::Error::new(kind, "No such file or directory"))
    }
}

/// POSIX resolver that runs `install.sh` with plain `sh`.
pub(crate) fn sh_resolver() -> Box<dyn CollaboratorResolver> {
    Box::new(PosixScript {
        shell: "sh".to_string(),
        script_name: "install.sh".to_string(),
    })
}

/// Installation directory containing an `install.sh` with the given body.
pub(crate) fn create_install_dir(script_body: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("install.sh"),
        format!("#!/bin/sh\n{}\n", script_body),
    )
    .unwrap();
    temp_dir
}
