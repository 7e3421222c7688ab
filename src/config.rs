use std::io::ErrorKind;
use std::path::PathBuf;
use std::{env, fs, io};

use serde::Deserialize;

use crate::paginator::{DEFAULT_MAX_PAGE_BUTTONS, DEFAULT_PAGE_SIZE};

#[derive(Deserialize)]
pub struct Server {
    pub address: String,
    pub port: u16,
}

#[derive(Deserialize)]
pub struct Backend {
    #[serde(default = "default_users_url")]
    pub users_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

#[derive(Deserialize)]
pub struct Pagination {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: u32,
    #[serde(default = "default_max_page_buttons")]
    pub max_page_buttons: u32,
}

#[derive(Deserialize, Default)]
pub struct Paths {
    /// Directory holding `users.tpl`. The built-in template is used when absent
    pub template_dir: Option<PathBuf>,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, PartialEq, Debug)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize)]
pub struct Config {
    pub server: Server,
    #[serde(default)]
    pub backend: Backend,
    #[serde(default)]
    pub pagination: Pagination,
    #[serde(default)]
    pub paths: Paths,
    pub log: Option<Log>,
}

fn default_users_url() -> String {
    "http://localhost:3000/users".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_body_bytes() -> usize {
    8 * 1024 * 1024
}

fn default_items_per_page() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_max_page_buttons() -> u32 {
    DEFAULT_MAX_PAGE_BUTTONS
}

impl Default for Backend {
    fn default() -> Self {
        Backend {
            users_url: default_users_url(),
            timeout_secs: default_timeout_secs(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            items_per_page: default_items_per_page(),
            max_page_buttons: default_max_page_buttons(),
        }
    }
}

fn parse_path(path: PathBuf) -> PathBuf {
    if !path.starts_with("${exe_dir}") {
        return path;
    }

    let exe_dir = env::current_exe().ok().and_then(|exe| exe.parent().map(PathBuf::from));
    match (exe_dir, path.to_str()) {
        (Some(exe_dir), Some(str_path)) => PathBuf::from(str_path.replace("${exe_dir}", &exe_dir.to_string_lossy())),
        _ => path,
    }
}

fn validate(cfg: &Config) -> io::Result<()> {
    if cfg.pagination.items_per_page == 0 {
        return Err(io::Error::new(ErrorKind::InvalidData, "pagination.items_per_page has to be greater than 0"));
    }
    // A single button cannot hold the current page in the centered window
    if cfg.pagination.max_page_buttons < 2 {
        return Err(io::Error::new(ErrorKind::InvalidData, "pagination.max_page_buttons has to be at least 2"));
    }
    Ok(())
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    validate(&cfg)?;
    cfg.paths.template_dir = cfg.paths.template_dir.map(parse_path);
    if let Some(ref mut log) = cfg.log {
        log.location = log.location.take().map(parse_path);
    }

    Ok(cfg)
}

pub fn read_config(cfg_path: &PathBuf) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config() {
        let cfg = parse_config(r##"
[server]
address = "127.0.0.1"
port = 8080
"##).unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.backend.users_url, "http://localhost:3000/users");
        assert_eq!(cfg.backend.timeout_secs, 10);
        assert_eq!(cfg.pagination.items_per_page, 20);
        assert_eq!(cfg.pagination.max_page_buttons, 10);
        assert!(cfg.paths.template_dir.is_none());
        assert!(cfg.log.is_none());
    }

    #[test]
    fn test_full_config() {
        let cfg = parse_config(r##"
[server]
address = "0.0.0.0"
port = 8001

[backend]
users_url = "http://users.internal:3000/users"
timeout_secs = 3

[pagination]
items_per_page = 50
max_page_buttons = 7

[paths]
template_dir = "res/template"

[log]
level = "Debug"
log_to_console = true
location = "/tmp/userpages/server.log"
"##).unwrap();
        assert_eq!(cfg.backend.users_url, "http://users.internal:3000/users");
        assert_eq!(cfg.backend.timeout_secs, 3);
        assert_eq!(cfg.backend.max_body_bytes, 8 * 1024 * 1024);
        assert_eq!(cfg.pagination.items_per_page, 50);
        assert_eq!(cfg.pagination.max_page_buttons, 7);
        assert_eq!(cfg.paths.template_dir, Some(PathBuf::from("res/template")));
        let log = cfg.log.unwrap();
        assert_eq!(log.level, LogLevel::Debug);
        assert_eq!(log.location, Some(PathBuf::from("/tmp/userpages/server.log")));
    }

    #[test]
    fn test_zero_page_size() {
        let res = parse_config(r##"
[server]
address = "0.0.0.0"
port = 8001

[pagination]
items_per_page = 0
"##);
        assert_eq!(res.err().map(|e| e.kind()), Some(ErrorKind::InvalidData));
    }

    #[test]
    fn test_single_button() {
        let res = parse_config(r##"
[server]
address = "0.0.0.0"
port = 8001

[pagination]
max_page_buttons = 1
"##);
        assert!(res.is_err());
    }

    #[test]
    fn test_exe_dir_path() {
        let path = parse_path(PathBuf::from("${exe_dir}/template"));
        assert!(!path.starts_with("${exe_dir}"));
        assert!(path.ends_with("template"));
        assert_eq!(parse_path(PathBuf::from("template")), PathBuf::from("template"));
    }
}
