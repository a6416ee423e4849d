use std::fs;

pub fn get() -> String {
    let config_path = match std::env::var("APM_CONFIG_PATH") {
        Ok(path) => path,
        Err(_) => "config.yml".to_owned(),
    };

    if fs::metadata(&config_path).is_err() {
        apm_log::panic(
            None,
            format!("[APM] Config file {config_path} (APM_CONFIG_PATH or ./config.yml) must exist"),
        );
    }

    config_path
}
