//! Host platform detection and the compiled-in install locations for each platform.

use std::path::Path;


/// Bare command name handed to the system `PATH` lookup.
pub const COMMAND_NAME: &str = "WonderlandEditor";

/// Location of the real binary inside a macOS `.app` bundle.
pub const BUNDLE_BINARY_SUBPATH: &str = "Contents/MacOS/WonderlandEditor";

const WINDOWS_DIRS: &[&str] = &[
    r"C:\Program Files\Wonderland\WonderlandEngine\bin",
    r"C:\Program Files (x86)\Wonderland\WonderlandEngine\bin",
];

const MACOS_DIRS: &[&str] = &[
    "/Applications/Wonderland",
    "/Applications",
    "/usr/local/bin",
    "/usr/bin",
];

const LINUX_DIRS: &[&str] = &[
    "/usr/local/bin/Wonderland",
    "/usr/bin/Wonderland",
    "/bin/Wonderland",
];

const OTHER_DIRS: &[&str] = &["/"];

/// Operating system family the launcher is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// `.exe` suffix
    Windows,
    /// `.app` bundles
    MacOs,
    /// Permission-bit executables
    Linux,
    /// Anything else, treated like Linux
    Other,
}

impl Platform {
    /// Platform of the running process.
    #[must_use]
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` value to a platform.
    #[must_use]
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Self::Windows,
            "macos" => Self::MacOs,
            "linux" => Self::Linux,
            _ => Self::Other,
        }
    }

    /// File name of the editor inside an install directory.
    #[must_use]
    pub const fn executable_name(self) -> &'static str {
        match self {
            Self::Windows => "WonderlandEditor.exe",
            Self::MacOs => "WonderlandEditor.app",
            Self::Linux | Self::Other => "WonderlandEditor",
        }
    }

    /// Well-known install directories, in search order.
    #[must_use]
    pub const fn search_dirs(self) -> &'static [&'static str] {
        match self {
            Self::Windows => WINDOWS_DIRS,
            Self::MacOs => MACOS_DIRS,
            Self::Linux => LINUX_DIRS,
            Self::Other => OTHER_DIRS,
        }
    }

    /// Whether the name alone marks `path` as a launchable target.
    ///
    /// Only meaningful on Windows (`.exe`) and macOS (`.app` bundles); on the
    /// other platforms executability is a permission check, see
    /// [`crate::resolve::Probe::is_executable`].
    #[must_use]
    pub fn has_executable_suffix(self, path: &Path) -> bool {
        let suffix = match self {
            Self::Windows => "exe",
            Self::MacOs => "app",
            Self::Linux | Self::Other => return false,
        };
        path.extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(suffix))
    }

    /// Whether executables on this platform are directory bundles.
    #[must_use]
    pub const fn uses_bundles(self) -> bool {
        matches!(self, Self::MacOs)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Linux => "linux",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}
