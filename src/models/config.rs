use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV: &str = "DITHERME_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Algorithm used when none is given on the command line
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Tone adjustments applied before dithering
    #[serde(default)]
    pub adjust: AdjustConfig,

    /// Optional two-color recolor applied after dithering
    #[serde(default)]
    pub duotone: Option<DuotoneConfig>,

    /// Recompress output PNGs with oxipng
    #[serde(default)]
    pub optimize: bool,

    #[serde(default)]
    pub server: ServerConfig,
}

fn default_algorithm() -> String {
    "floyd-steinberg".to_string()
}

/// Tone adjustments. The defaults leave pixels untouched.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct AdjustConfig {
    /// Contrast factor around the mean luma
    pub contrast: f32,
    /// Gamma: output = 255 * (v / 255) ^ (1 / midtones)
    pub midtones: f32,
    /// Gain applied after the gamma curve
    pub highlights: f32,
    /// Gaussian blur sigma (0 = off)
    pub blur: f32,
    /// Percent of the original size to dither at (100 = off); the result
    /// is scaled back up
    pub scale: u32,
    /// Block size for pixelation (1 = off)
    pub pixelation: u32,
    /// Uniform noise amplitude (0 = off)
    pub noise: u8,
    /// Seed for reproducible noise
    pub seed: Option<u64>,
    /// Collapse color to luma before dithering
    pub grayscale: bool,
}

impl Default for AdjustConfig {
    fn default() -> Self {
        Self {
            contrast: 1.0,
            midtones: 1.0,
            highlights: 1.0,
            blur: 0.0,
            scale: 100,
            pixelation: 1,
            noise: 0,
            seed: None,
            grayscale: false,
        }
    }
}

impl AdjustConfig {
    /// Whether applying this config would change any pixel.
    pub fn is_identity(&self) -> bool {
        *self == Self { seed: self.seed, ..Self::default() }
    }
}

/// Foreground/background recolor
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct DuotoneConfig {
    /// Hex color for bright pixels
    pub foreground: String,
    /// Hex color for dark pixels
    pub background: String,
    pub foreground_opacity: u8,
    pub background_opacity: u8,
}

impl Default for DuotoneConfig {
    fn default() -> Self {
        Self {
            foreground: "#ffffff".to_string(),
            background: "#000000".to_string(),
            foreground_opacity: 255,
            background_opacity: 255,
        }
    }
}

/// HTTP server settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address
    pub bind: String,
    /// Maximum accepted request body in bytes
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:3000".to_string(),
            max_upload_bytes: 16 * 1024 * 1024,
        }
    }
}

impl AppConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load configuration from a file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        algorithm = %config.algorithm,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Resolve the config source: explicit path, then `DITHERME_CONFIG`,
    /// then built-in defaults.
    pub fn resolve(path: Option<&Path>) -> Self {
        if let Some(path) = path {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Self::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            adjust: AdjustConfig::default(),
            duotone: None,
            optimize: false,
            server: ServerConfig::default(),
        }
    }
}
