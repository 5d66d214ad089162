use super::*;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use toml::Value;

static TEST_MUTEX: Mutex<()> = Mutex::new(());
static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

#[test]
fn config_default_matches_generator_defaults() {
    let config = Config::default();
    assert_eq!(config.output_dir, DEFAULT_OUTPUT_DIR);
    assert_eq!(config.default_style, "glassmorphism");
    assert_eq!(config.default_device, "iphone_16_pro");
    assert_eq!(config.default_platform, PlatformChoice::Auto);
    assert_eq!(config.default_count, 5);
}

#[test]
fn load_or_init_creates_file_in_home() {
    with_isolated_home(|home| {
        let outcome = load_or_init().expect("load default config");
        assert!(outcome.created);
        assert!(!outcome.backfilled);
        assert_eq!(outcome.path, home.join(".storeshot").join("config.toml"));
        assert_eq!(outcome.config, Config::default());

        let contents = fs::read_to_string(&outcome.path).expect("read config");
        let parsed: toml::Table = toml::from_str(&contents).expect("config is valid TOML");
        assert_eq!(
            parsed.get("default_platform").and_then(Value::as_str),
            Some("auto")
        );
        assert_eq!(
            parsed.get("output_dir").and_then(Value::as_str),
            Some(DEFAULT_OUTPUT_DIR)
        );
        assert_eq!(
            parsed.get("default_count").and_then(Value::as_integer),
            Some(5)
        );
    });
}

#[test]
fn second_load_reads_existing_file() {
    with_isolated_home(|_| {
        let first = load_or_init().expect("create config");
        let mut config = first.config;
        config.default_style = "duotone".to_string();
        save(&config, &first.path).expect("save config");

        let second = load_or_init().expect("reload config");
        assert!(!second.created);
        assert!(!second.backfilled);
        assert_eq!(second.config.default_style, "duotone");
    });
}

#[test]
fn load_or_init_backfills_missing_keys() {
    let dir = unique_temp_dir("backfill");
    let path = dir.join("config.toml");
    fs::write(
        &path,
        r#"
output_dir = "renders"
legacy_theme = "dark"
"#,
    )
    .expect("write partial config");

    let outcome = load_or_init_at(path.clone()).expect("load partial config");
    assert!(!outcome.created);
    assert!(outcome.backfilled);
    assert_eq!(outcome.config.output_dir, "renders");
    assert_eq!(outcome.config.default_device, "iphone_16_pro");

    let contents = fs::read_to_string(&path).expect("read config");
    assert!(contents.contains("default_style = \"glassmorphism\""));
    assert!(contents.contains("output_dir = \"renders\""));
    assert!(!contents.contains("legacy_theme"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn invalid_platform_is_a_deserialize_error() {
    let dir = unique_temp_dir("invalid");
    let path = dir.join("config.toml");
    fs::write(&path, "default_platform = \"windows_store\"\n").expect("write config");

    let error = load_or_init_at(path).expect_err("unknown platform rejected");
    assert!(matches!(error, ConfigError::Deserialize(_)));

    let _ = fs::remove_dir_all(&dir);
}

fn unique_temp_dir(label: &str) -> PathBuf {
    let id = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!(
        "storeshot-config-test-{label}-{}-{}",
        std::process::id(),
        id
    ));
    fs::create_dir_all(&path).expect("create unique test dir");
    path
}

fn with_isolated_home<F>(func: F)
where
    F: FnOnce(&Path),
{
    let _guard = TEST_MUTEX.lock().unwrap();
    let temp_home = unique_temp_dir("home");
    let snapshot = EnvSnapshot::capture();
    set_home_env(&temp_home);

    func(&temp_home);

    snapshot.restore();
    let _ = fs::remove_dir_all(&temp_home);
}

fn set_home_env(path: &Path) {
    set_env("HOME", path.as_os_str());
    set_env("USERPROFILE", path.as_os_str());
}

struct EnvSnapshot {
    home: Option<OsString>,
    userprofile: Option<OsString>,
}

impl EnvSnapshot {
    fn capture() -> Self {
        Self {
            home: std::env::var_os("HOME"),
            userprofile: std::env::var_os("USERPROFILE"),
        }
    }

    fn restore(self) {
        if let Some(value) = self.home {
            set_env("HOME", &value);
        } else {
            remove_env("HOME");
        }

        if let Some(value) = self.userprofile {
            set_env("USERPROFILE", &value);
        } else {
            remove_env("USERPROFILE");
        }
    }
}

fn set_env(key: &str, value: &OsStr) {
    // SAFETY: `key` and `value` originate from ASCII string literals or formatter
    // output that never embed null bytes, satisfying the environment invariants.
    unsafe { std::env::set_var(key, value) };
}

fn remove_env(key: &str) {
    unsafe { std::env::remove_var(key) };
}
