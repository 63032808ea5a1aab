use std::sync::{Mutex, MutexGuard};

use super::*;

// Env mutation is process-global; serialize these tests behind one lock.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers must hold [`ENV_LOCK`] so concurrent tests do not race.
unsafe fn clear_config_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BIND_ADDR");
        std::env::remove_var("DATA_DIR");
    }
}

#[test]
fn from_env_defaults() {
    let _guard = env_guard();
    unsafe { clear_config_env() };

    let config = Config::from_env().unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    assert_eq!(config.listen_addr(), "0.0.0.0:3000");
}

#[test]
fn from_env_reads_overrides() {
    let _guard = env_guard();
    unsafe {
        clear_config_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("BIND_ADDR", "127.0.0.1");
        std::env::set_var("DATA_DIR", "/srv/codewatch/data");
    }

    let config = Config::from_env().unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.listen_addr(), "127.0.0.1:8080");
    assert_eq!(config.data_dir, PathBuf::from("/srv/codewatch/data"));

    unsafe { clear_config_env() };
}

#[test]
fn from_env_invalid_port_errors() {
    let _guard = env_guard();
    unsafe {
        clear_config_env();
        std::env::set_var("PORT", "not-a-port");
    }

    let err = Config::from_env().unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT value: not-a-port");

    unsafe { clear_config_env() };
}
