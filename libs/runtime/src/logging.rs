use crate::config::{LoggingConfig, Section};
use std::{
    collections::HashMap,
    io::Write,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use tracing::{level_filters::LevelFilter, Level};
use tracing_subscriber::{
    filter::{FilterFn, Targets},
    fmt,
};

use file_rotate::{
    compression::Compression,
    suffix::{AppendTimestamp, FileLimit},
    ContentLimit, FileRotate,
};

// -------- level helpers --------

fn parse_tracing_level(s: &str) -> Option<Level> {
    match s.to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        "off" | "none" => None,
        _ => Some(Level::INFO),
    }
}

/// Returns true if target == crate_name or target starts with "crate_name::"
fn matches_crate_prefix(target: &str, crate_name: &str) -> bool {
    target == crate_name
        || (target.starts_with(crate_name) && target[crate_name.len()..].starts_with("::"))
}

type CatchAllFilter = FilterFn<Box<dyn Fn(&tracing::Metadata<'_>) -> bool + Send + Sync>>;

/// Everything that is not claimed by an explicit subsystem section, up to `max_level`.
fn catch_all_filter(subsystems: &[String], max_level: Level) -> CatchAllFilter {
    let subsystems = subsystems.to_vec();
    FilterFn::new(Box::new(move |meta: &tracing::Metadata<'_>| {
        let target = meta.target();
        !subsystems.iter().any(|s| matches_crate_prefix(target, s)) && meta.level() <= &max_level
    }))
}

// -------- rotating writer for files --------

type SharedRotate = Arc<Mutex<FileRotate<AppendTimestamp>>>;

#[derive(Clone)]
struct RotWriter(SharedRotate);

struct RotWriterHandle(Option<SharedRotate>);

impl Write for RotWriterHandle {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match &self.0 {
            Some(rot) => rot
                .lock()
                .map_err(|_| std::io::Error::other("log writer poisoned"))?
                .write(buf),
            // no file for this target: drop silently
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match &self.0 {
            Some(rot) => rot
                .lock()
                .map_err(|_| std::io::Error::other("log writer poisoned"))?
                .flush(),
            None => Ok(()),
        }
    }
}

/// Routes records to per-subsystem files by target prefix, falling back to
/// the default file.
#[derive(Clone, Default)]
struct FileRouter {
    default: Option<RotWriter>,
    by_prefix: HashMap<String, RotWriter>,
}

impl FileRouter {
    fn resolve_for(&self, target: &str) -> Option<SharedRotate> {
        self.by_prefix
            .iter()
            .find(|(prefix, _)| matches_crate_prefix(target, prefix))
            .map(|(_, w)| w.0.clone())
            .or_else(|| self.default.as_ref().map(|w| w.0.clone()))
    }

    fn is_empty(&self) -> bool {
        self.default.is_none() && self.by_prefix.is_empty()
    }
}

impl<'a> fmt::MakeWriter<'a> for FileRouter {
    type Writer = RotWriterHandle;

    fn make_writer(&'a self) -> Self::Writer {
        RotWriterHandle(self.default.as_ref().map(|w| w.0.clone()))
    }

    fn make_writer_for(&'a self, meta: &tracing::Metadata<'_>) -> Self::Writer {
        RotWriterHandle(self.resolve_for(meta.target()))
    }
}

// -------- config extraction --------

struct ConfigData<'a> {
    default_section: Option<&'a Section>,
    subsystem_sections: Vec<(String, &'a Section)>,
    subsystem_names: Vec<String>,
}

fn extract_config_data(cfg: &LoggingConfig) -> ConfigData<'_> {
    let subsystem_sections = cfg
        .iter()
        .filter(|(k, _)| k.as_str() != "default")
        .map(|(k, v)| (k.clone(), v))
        .collect::<Vec<_>>();

    let subsystem_names = subsystem_sections.iter().map(|(n, _)| n.clone()).collect();

    ConfigData {
        default_section: cfg.get("default"),
        subsystem_sections,
        subsystem_names,
    }
}

// -------- path resolution helpers --------

/// Absolute paths are kept as-is; relative paths are joined with `base_dir`.
fn resolve_log_path(file: &str, base_dir: &Path) -> PathBuf {
    let p = Path::new(file);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base_dir.join(p)
    }
}

fn create_rotating_writer_at_path(
    log_path: &Path,
    max_bytes: usize,
    max_backups: usize,
) -> std::io::Result<RotWriter> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let rot = FileRotate::new(
        log_path,
        AppendTimestamp::default(FileLimit::MaxFiles(max_backups)),
        ContentLimit::BytesSurpassed(max_bytes),
        Compression::None,
        #[cfg(unix)]
        None,
    );

    Ok(RotWriter(Arc::new(Mutex::new(rot))))
}

fn file_writer_for(name: &str, section: &Section, base_dir: &Path) -> Option<RotWriter> {
    if section.file.trim().is_empty() {
        return None;
    }

    let max_bytes = section.max_size_mb.unwrap_or(100) * 1024 * 1024;
    let max_backups = section.max_backups.unwrap_or(3);
    let log_path = resolve_log_path(&section.file, base_dir);

    match create_rotating_writer_at_path(&log_path, max_bytes as usize, max_backups) {
        Ok(writer) => Some(writer),
        Err(e) => {
            eprintln!(
                "Failed to init log file for '{}': {} ({})",
                name,
                log_path.to_string_lossy(),
                e
            );
            None
        }
    }
}

fn build_file_router(config: &ConfigData, base_dir: &Path) -> FileRouter {
    let mut router = FileRouter {
        default: config
            .default_section
            .and_then(|s| file_writer_for("default", s, base_dir)),
        by_prefix: HashMap::new(),
    };

    for (name, section) in &config.subsystem_sections {
        if let Some(writer) = file_writer_for(name, section, base_dir) {
            router.by_prefix.insert(name.clone(), writer);
        }
    }

    router
}

fn build_console_targets(config: &ConfigData) -> Targets {
    config
        .subsystem_sections
        .iter()
        .filter_map(|(name, s)| {
            parse_tracing_level(&s.console_level).map(|l| (name.clone(), LevelFilter::from_level(l)))
        })
        .fold(Targets::new().with_default(LevelFilter::OFF), |t, (name, level)| {
            t.with_target(name, level)
        })
}

fn build_file_targets(config: &ConfigData) -> Targets {
    config
        .subsystem_sections
        .iter()
        .filter(|(_, s)| !s.file.trim().is_empty())
        .filter_map(|(name, s)| {
            parse_tracing_level(&s.file_level).map(|l| (name.clone(), LevelFilter::from_level(l)))
        })
        .fold(Targets::new().with_default(LevelFilter::OFF), |t, (name, level)| {
            t.with_target(name, level)
        })
}

// -------- public init --------

/// Initialize logging from a configuration.
/// - `cfg`: subsystem → section map; "default" catches everything else
/// - `base_dir`: resolves relative log file paths (usually `app.home_dir`)
///
/// Console output goes to stderr so command output on stdout stays clean.
pub fn init_logging_from_config(cfg: &LoggingConfig, base_dir: &Path) {
    // Bridge `log` → `tracing` before installing the subscriber
    let _ = tracing_log::LogTracer::init();

    if cfg.is_empty() {
        init_default_logging();
        return;
    }

    let config = extract_config_data(cfg);
    let router = build_file_router(&config, base_dir);
    install(&config, router);
}

fn init_default_logging() {
    let _ = fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_max_level(Level::WARN)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .try_init();
}

fn install(config: &ConfigData, router: FileRouter) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

    let ansi = atty::is(atty::Stream::Stderr);

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_filter(build_console_targets(config));

    let subsystem_file_layer = (!router.is_empty()).then(|| {
        fmt::layer()
            .json()
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .with_writer(router.clone())
            .with_filter(build_file_targets(config))
    });

    let default_console_layer = config
        .default_section
        .and_then(|s| parse_tracing_level(&s.console_level))
        .map(|level| {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_target(true)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_filter(catch_all_filter(&config.subsystem_names, level))
        });

    let default_file_layer = router
        .default
        .is_some()
        .then_some(config.default_section)
        .flatten()
        .and_then(|s| parse_tracing_level(&s.file_level))
        .map(|level| {
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_target(true)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_writer(router.clone())
                .with_filter(catch_all_filter(&config.subsystem_names, level))
        });

    let _ = Registry::default()
        .with(console_layer)
        .with(subsystem_file_layer)
        .with(default_console_layer)
        .with(default_file_layer)
        .try_init();
}

// =================== tests ===================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_logging_config;
    use tempfile::tempdir;

    #[test]
    fn test_logging_level_parsing() {
        assert_eq!(parse_tracing_level("trace"), Some(Level::TRACE));
        assert_eq!(parse_tracing_level("DEBUG"), Some(Level::DEBUG));
        assert_eq!(parse_tracing_level("Info"), Some(Level::INFO));
        assert_eq!(parse_tracing_level("warn"), Some(Level::WARN));
        assert_eq!(parse_tracing_level("ERROR"), Some(Level::ERROR));
        assert_eq!(parse_tracing_level("off"), None);
        assert_eq!(parse_tracing_level("none"), None);
        assert_eq!(parse_tracing_level("bogus"), Some(Level::INFO));
    }

    #[test]
    fn test_crate_prefix_matching() {
        assert!(matches_crate_prefix("pms", "pms"));
        assert!(matches_crate_prefix("pms::domain::session", "pms"));
        assert!(!matches_crate_prefix("pms_console", "pms"));
        assert!(!matches_crate_prefix("runtime", "pms"));
    }

    #[test]
    fn test_extract_config_data_splits_default() {
        let mut cfg = default_logging_config();
        cfg.insert(
            "pms".into(),
            Section {
                console_level: "info".into(),
                file: "logs/pms_module.log".into(),
                file_level: "debug".into(),
                max_backups: Some(3),
                max_size_mb: Some(10),
            },
        );

        let data = extract_config_data(&cfg);
        assert!(data.default_section.is_some());
        assert_eq!(data.subsystem_sections.len(), 1);
        assert_eq!(data.subsystem_names, vec!["pms".to_string()]);
    }

    #[test]
    fn test_file_paths_resolved_against_home_dir() {
        let tmp = tempdir().unwrap();
        let resolved = resolve_log_path("logs/test.log", tmp.path());
        assert!(resolved.starts_with(tmp.path()));
        assert!(resolved.ends_with("logs/test.log"));
    }

    #[test]
    fn test_create_rotating_writer_at_path_creates_parent() {
        let tmp = tempdir().unwrap();
        let p = tmp.path().join("nested/dir/app.log");

        let res = create_rotating_writer_at_path(&p, 128 * 1024, 2);
        assert!(res.is_ok(), "writer should be created");
        assert!(p.parent().unwrap().exists(), "parent dir must be created");
    }

    #[test]
    fn test_router_prefers_subsystem_file() {
        let tmp = tempdir().unwrap();
        let mut cfg = default_logging_config();
        cfg.insert(
            "pms".into(),
            Section {
                console_level: "off".into(),
                file: "logs/pms_module.log".into(),
                file_level: "debug".into(),
                max_backups: None,
                max_size_mb: Some(1),
            },
        );

        let data = extract_config_data(&cfg);
        let router = build_file_router(&data, tmp.path());

        let subsystem = router.resolve_for("pms::domain").unwrap();
        let fallback = router.resolve_for("runtime::config").unwrap();
        assert!(!Arc::ptr_eq(&subsystem, &fallback));
    }

    #[test]
    fn test_empty_file_means_no_writer() {
        let tmp = tempdir().unwrap();
        let section = Section {
            console_level: "info".into(),
            file: "  ".into(),
            file_level: "debug".into(),
            max_backups: None,
            max_size_mb: None,
        };
        assert!(file_writer_for("default", &section, tmp.path()).is_none());
    }
}
