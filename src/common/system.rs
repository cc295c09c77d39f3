//! Facts about the running host

use nix::sys::utsname::uname;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// CPU word width of the running kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Architecture {
    #[serde(rename = "64-bit")]
    Bits64,
    #[serde(rename = "32-bit")]
    Bits32,
}

const MACHINES_64: &[&str] = &[
    "x86_64",
    "aarch64",
    "ppc64",
    "ppc64le",
    "riscv64",
    "s390x",
    "mips64",
    "loongarch64",
    "sparc64",
];

impl Architecture {
    /// Detect from the kernel's machine string
    pub fn detect() -> Self {
        match uname() {
            Ok(info) => Self::from_machine(&info.machine().to_string_lossy()),
            Err(_) => Architecture::Bits32,
        }
    }

    pub fn from_machine(machine: &str) -> Self {
        if MACHINES_64.contains(&machine.trim()) {
            Architecture::Bits64
        } else {
            Architecture::Bits32
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Architecture::Bits64 => "64-bit",
            Architecture::Bits32 => "32-bit",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Check whether we are running from the live media
pub fn is_live_session(marker: &Path) -> bool {
    marker.exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x86_64_is_64_bit() {
        assert_eq!(Architecture::from_machine("x86_64"), Architecture::Bits64);
        assert_eq!(Architecture::from_machine("aarch64"), Architecture::Bits64);
    }

    #[test]
    fn other_machines_are_32_bit() {
        assert_eq!(Architecture::from_machine("i686"), Architecture::Bits32);
        assert_eq!(Architecture::from_machine("armv7l"), Architecture::Bits32);
        assert_eq!(Architecture::from_machine(""), Architecture::Bits32);
    }

    #[test]
    fn labels_match_page_text() {
        assert_eq!(Architecture::Bits64.to_string(), "64-bit");
        assert_eq!(Architecture::Bits32.label(), "32-bit");
    }

    #[test]
    fn live_marker_presence() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("antergos");
        assert!(!is_live_session(&marker));
        std::fs::create_dir(&marker).unwrap();
        assert!(is_live_session(&marker));
    }
}
