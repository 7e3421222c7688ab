use std::fs::{self, File};
use std::io;
use std::io::Write;
use std::path::PathBuf;

const CONFIG_SAMPLE: &str = r#"[server]
address = "0.0.0.0"
port = 8001

# Service returning the complete user list as a JSON array
[backend]
users_url = "http://localhost:3000/users"
timeout_secs = 10

[pagination]
items_per_page = 20
max_page_buttons = 10

# Uncomment to override the built-in page template with <template_dir>/users.tpl
# If you want it to be relative to the executable directory use ${exe_dir}/location
# [paths]
# template_dir = "${exe_dir}/res/template"

# Without this section logs go to the console only
# [log]
# level = "Info"
# log_to_console = true
"#;

pub(crate) fn write_sample_cfg(file_path: &PathBuf) -> io::Result<()> {
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(file_path)?;
    file.write_all(CONFIG_SAMPLE.as_bytes())
}
