use serde::Deserialize;

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_templates_dir() -> String {
    "templates".to_string()
}

/// Configuration options of the catalog service.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the Tera templates.
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
    /// Directory with `users.json`, `categories.json` and `products.json`.
    /// The embedded datasets are used when unset.
    #[serde(default)]
    pub catalog_dir: Option<String>,
    /// Sort the Category and User columns by their own values instead of the
    /// product name.
    #[serde(default)]
    pub sort_by_column: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            templates_dir: default_templates_dir(),
            catalog_dir: None,
            sort_by_column: false,
        }
    }
}
