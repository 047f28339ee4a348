//! Runtime detection for Node.js and package managers

use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: String,
    pub version: Option<String>,
    pub available: bool,
}

impl RuntimeInfo {
    /// `name (version)` or `name (not installed)`
    pub fn describe(&self) -> String {
        if self.available {
            format!("{} ({})", self.name, self.version.as_deref().unwrap_or("unknown"))
        } else {
            format!("{} (not installed)", self.name)
        }
    }
}

/// Probe `program --version`
pub fn check_tool(program: &str) -> RuntimeInfo {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name: program.to_string(),
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name: program.to_string(),
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    RuntimeInfo {
        name: "Node.js".to_string(),
        ..check_tool("node")
    }
}
