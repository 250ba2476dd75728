//! Fixtures shared by the unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::resolve::Probe;

/// In-memory filesystem that records every path it is asked about.
#[derive(Default)]
pub(crate) struct FakeProbe {
    existing: HashSet<PathBuf>,
    executables: HashSet<PathBuf>,
    on_path: HashMap<String, PathBuf>,
    pub(crate) probed: RefCell<Vec<PathBuf>>,
    pub(crate) lookups: RefCell<usize>,
}

impl FakeProbe {
    pub(crate) fn dir(mut self, path: &str) -> Self {
        self.existing.insert(PathBuf::from(path));
        self
    }

    pub(crate) fn file(mut self, path: &str) -> Self {
        self.existing.insert(PathBuf::from(path));
        self
    }

    pub(crate) fn executable(mut self, path: &str) -> Self {
        self.existing.insert(PathBuf::from(path));
        self.executables.insert(PathBuf::from(path));
        self
    }

    pub(crate) fn on_path(mut self, command: &str, path: &str) -> Self {
        self.on_path.insert(command.to_string(), PathBuf::from(path));
        self
    }
}

impl Probe for FakeProbe {
    fn exists(&self, path: &Path) -> bool {
        self.probed.borrow_mut().push(path.to_path_buf());
        self.existing.contains(path)
    }

    fn is_executable(&self, path: &Path) -> bool {
        self.executables.contains(path)
    }

    fn lookup(&self, command: &str) -> Option<PathBuf> {
        *self.lookups.borrow_mut() += 1;
        self.on_path.get(command).cloned()
    }
}

// Writing a script while another test thread forks can leave the child
// holding a write handle, which makes exec fail with ETXTBSY. Every test
// that writes or spawns a stub holds this lock.
static SPAWN_LOCK: Mutex<()> = Mutex::new(());

pub(crate) fn serial() -> MutexGuard<'static, ()> {
    SPAWN_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Write `dir/WonderlandEditor`, a shell stub that appends each argument to
/// `dir/args.txt` (one per line) and exits with `code`.
#[cfg(unix)]
pub(crate) fn stub(dir: &Path, code: i32) -> (PathBuf, PathBuf) {
    use std::os::unix::fs::PermissionsExt;

    let log = dir.join("args.txt");
    let script = dir.join("WonderlandEditor");
    let body = format!(
        "#!/bin/sh\nfor a in \"$@\"; do printf '%s\\n' \"$a\" >> '{}'; done\nexit {code}\n",
        log.display()
    );
    std::fs::write(&script, body).unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    (script, log)
}
