use crate::domain::config::HostOs;

/// Path defaults used when path fields are left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostPaths {
    pub workdir: &'static str,
    pub database_bind: &'static str,
}

/// Windows defaults keep doubled backslashes; they are written into the
/// manifest as-is.
pub fn host_paths(os: HostOs) -> HostPaths {
    match os {
        HostOs::Linux => HostPaths { workdir: "/home/user/repos", database_bind: "/data/postgres" },
        HostOs::Windows => {
            HostPaths { workdir: "C:\\\\repos", database_bind: "C:\\\\data\\\\postgres" }
        }
    }
}

/// Return `value` unless it is blank, in which case return `fallback`.
pub(crate) fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() { fallback } else { value }
}
