use std::env;
use std::path::PathBuf;

use userpages::config::{read_config, Config};
use userpages::logger::default_log_location;

use crate::config_data::write_sample_cfg;
use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let exe_dir = env::current_exe().ok().and_then(|exe| exe.parent().map(PathBuf::from));
    let cur_dir = env::current_dir().ok();

    [exe_dir, cur_dir, dirs::config_dir()]
        .into_iter()
        .flatten()
        .map(|dir| dir.join(CFG_FILE_NAME))
        .find(|path| path.exists())
}

pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config, String> {
    let config_path = match cfg_path.or_else(get_config_path) {
        None => return Err("Could not find userpages configuration".to_string()),
        Some(x) => x,
    };

    println!("Reading config from {}", config_path.display());
    let mut config = match read_config(&config_path) {
        Ok(config) => config,
        Err(e) => return Err(e.to_string()),
    };

    if let Some(mut log) = config.log {
        let location = log.location.unwrap_or_else(default_log_location);
        println!("Log enabled. Files will be written in {}", location.display());
        log.location = Some(location);
        config.log = Some(log);
    } else {
        println!("Log disabled. Using stdout");
    }

    Ok(config)
}

pub(crate) fn generate_cfg(config_path: Option<PathBuf>) -> Result<PathBuf, String> {
    let path = match config_path.or_else(|| dirs::config_dir().map(|dir| dir.join(CFG_FILE_NAME))) {
        None => return Err("Could not find user config dir".to_string()),
        Some(path) => path,
    };

    println!("Writing sample config to {}", path.display());
    if let Err(e) = write_sample_cfg(&path) {
        return Err(format!("Error writing {}: {}", path.display(), e));
    }

    Ok(path)
}
