//! Default values for config fields, referenced via `#[serde(default = "...")]`.

pub fn default_data_dir() -> String {
    "~/.wabulk".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_webdriver_url() -> String {
    "http://127.0.0.1:9515".to_string()
}

pub fn default_base_url() -> String {
    "https://web.whatsapp.com".to_string()
}

pub fn default_compose_wait_secs() -> u64 {
    20
}

pub fn default_login_wait_secs() -> u64 {
    60
}

pub fn default_settle_secs() -> u64 {
    2
}

pub fn default_poll_interval_ms() -> u64 {
    250
}

pub fn default_contacts_path() -> String {
    "~/.wabulk/contacts.csv".to_string()
}
