//! Browser configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use snowy_navigation::DEFAULT_SEARCH_TEMPLATE;
use snowy_storage::JsonFile;

pub const CONFIG_FILE: &str = "config.json";

const CHROME_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                         AppleWebKit/537.36 (KHTML, like Gecko) \
                         Chrome/122.0.0.0 Safari/537.36";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding every file below
    pub data_dir: PathBuf,
    /// Open tab URLs from the last shutdown
    pub session_file: PathBuf,
    pub bookmarks_file: PathBuf,
    /// `.js` files injected into every page
    pub extensions_dir: PathBuf,
    /// URL for new tabs
    pub homepage: String,
    /// Search engine URL template
    pub search_engine: String,
    /// User agent the rendering profile reports
    pub user_agent: String,
    pub window_width: u32,
    pub window_height: u32,
    /// Zoom factor for new pages
    pub default_zoom: f64,
}

/// Optional overrides read from `config.json`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigOverlay {
    homepage: Option<String>,
    search_engine: Option<String>,
    user_agent: Option<String>,
    window_width: Option<u32>,
    window_height: Option<u32>,
    default_zoom: Option<f64>,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            session_file: data_dir.join("session.json"),
            bookmarks_file: data_dir.join("bookmarks.json"),
            extensions_dir: data_dir.join("extensions"),
            data_dir,
            homepage: "https://www.google.com".to_string(),
            search_engine: DEFAULT_SEARCH_TEMPLATE.to_string(),
            user_agent: CHROME_UA.to_string(),
            window_width: 1300,
            window_height: 850,
            default_zoom: 1.0,
        }
    }

    /// Defaults for `data_dir`, overridden by its `config.json` if present.
    ///
    /// An unreadable config file is ignored.
    pub fn load(data_dir: &Path) -> Self {
        let mut config = Self::new(data_dir.to_path_buf());
        let overlay: ConfigOverlay = JsonFile::new(data_dir.join(CONFIG_FILE)).read_or_default();

        if let Some(homepage) = overlay.homepage {
            config.homepage = homepage;
        }
        if let Some(search_engine) = overlay.search_engine {
            config.search_engine = search_engine;
        }
        if let Some(user_agent) = overlay.user_agent {
            config.user_agent = user_agent;
        }
        if let Some(width) = overlay.window_width {
            config.window_width = width;
        }
        if let Some(height) = overlay.window_height {
            config.window_height = height;
        }
        if let Some(zoom) = overlay.default_zoom.filter(|z| *z > 0.0) {
            config.default_zoom = zoom;
        }

        config
    }

    /// `SNOWY_DATA_DIR`, else the platform data directory, else `.snowy`
    pub fn data_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os("SNOWY_DATA_DIR").filter(|d| !d.is_empty()) {
            return PathBuf::from(dir);
        }

        dirs::data_local_dir()
            .map(|d| d.join("Snowy"))
            .unwrap_or_else(|| PathBuf::from(".snowy"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}
