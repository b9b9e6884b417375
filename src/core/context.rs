use std::path::{Component, Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        LocaleDictionary, MissingArgumentPolicy,
        parsers::json::{
            ScanDictionariesResult, extract_locale, parse_dictionary_file, scan_dictionary_files,
        },
    },
};

/// Settings shared by every command.
///
/// # Configuration Priority
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. CLI arguments (e.g., `--primary-locale en`)
/// 2. `.dictumrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Directory scanned by `check`, `dictionariesRoot` resolved against `--path`.
    pub dictionaries_dir: PathBuf,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,
}

impl CheckContext {
    /// Load configuration and apply command line overrides.
    ///
    /// # Errors
    ///
    /// Returns error if the config file cannot be read or is invalid.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args.path.clone();

        let config_result = load_config(&root_dir)?;

        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;

        if let Some(ref primary_locale) = common_args.primary_locale {
            config.primary_locale = primary_locale.clone();
        }

        if let Some(ref dictionaries_root) = common_args.dictionaries_root {
            config.dictionaries_root = dictionaries_root.to_string_lossy().to_string();
        }

        if let Some(policy) = common_args.missing_argument {
            config.missing_argument = policy;
        }

        let dictionaries_dir = resolve_against(&root_dir, Path::new(&config.dictionaries_root));

        Ok(Self {
            config,
            dictionaries_dir,
            verbose,
        })
    }

    pub fn primary_locale(&self) -> &str {
        &self.config.primary_locale
    }

    pub fn missing_argument(&self) -> MissingArgumentPolicy {
        self.config.missing_argument
    }

    pub fn max_depth(&self) -> usize {
        self.config.max_depth
    }

    /// Scan the dictionaries directory with the configured patterns.
    pub fn scan_dictionaries(&self) -> Result<ScanDictionariesResult> {
        let result = scan_dictionary_files(
            &self.dictionaries_dir,
            &self.config.includes,
            &self.config.ignores,
        )?;

        if self.verbose {
            eprintln!(
                "Note: Found {} dictionary file(s) in '{}'",
                result.dictionaries.len() + result.warnings.len(),
                self.dictionaries_dir.display()
            );
        }

        Ok(result)
    }

    /// Load a single dictionary file given on the command line.
    ///
    /// The locale is taken from the file name.
    pub fn load_dictionary(&self, path: &Path) -> Result<LocaleDictionary> {
        let locale = extract_locale(path)
            .with_context(|| format!("Cannot determine locale from file name: {:?}", path))?;
        parse_dictionary_file(path, &locale)
    }
}

/// Join a relative config path onto the project root. Absolute paths and a
/// root of `.` leave the path unchanged.
fn resolve_against(root_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let is_cur_dir = root_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        path.to_path_buf()
    } else {
        let rel = path.strip_prefix(Path::new(".")).unwrap_or(path);
        root_dir.join(rel)
    }
}
