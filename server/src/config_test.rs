use std::sync::{Mutex, MutexGuard, PoisonError};

use super::*;

/// Serializes the tests that mutate process environment.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # Safety
/// Callers must hold [`env_lock`].
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
        std::env::remove_var("PUBLIC_DIR");
    }
}

// =============================================================================
// parse helpers
// =============================================================================

#[test]
fn parse_port_defaults_when_absent_or_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_accepts_number() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 9000 ")).unwrap(), 9000);
}

#[test]
fn parse_port_rejects_garbage_and_overflow() {
    let err = parse_port(Some("http")).unwrap_err();
    assert!(matches!(err, ServerError::InvalidEnv { var: "PORT", .. }));
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn parse_host_defaults_to_unspecified() {
    assert_eq!(parse_host(None).unwrap(), DEFAULT_HOST);
}

#[test]
fn parse_host_accepts_v4_and_v6() {
    assert_eq!(parse_host(Some("127.0.0.1")).unwrap(), IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert!(parse_host(Some("::1")).unwrap().is_ipv6());
}

#[test]
fn parse_host_rejects_hostname() {
    let err = parse_host(Some("localhost")).unwrap_err();
    assert_eq!(err.to_string(), "invalid HOST: \"localhost\"");
}

// =============================================================================
// from_env
// =============================================================================

#[test]
fn from_env_uses_defaults() {
    let _guard = env_lock();
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.addr(), SocketAddr::from(([0, 0, 0, 0], 3000)));
    assert!(cfg.public_dir.ends_with("public"));
}

#[test]
fn from_env_reads_overrides() {
    let _guard = env_lock();
    unsafe {
        clear_server_env();
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "4100");
        std::env::set_var("PUBLIC_DIR", "/srv/site");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.addr(), SocketAddr::from(([127, 0, 0, 1], 4100)));
    assert_eq!(cfg.public_dir, PathBuf::from("/srv/site"));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_surfaces_bad_port() {
    let _guard = env_lock();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "abc");
    }

    assert!(matches!(ServerConfig::from_env(), Err(ServerError::InvalidEnv { var: "PORT", .. })));

    unsafe { clear_server_env() };
}
