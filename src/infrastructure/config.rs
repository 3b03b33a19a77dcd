// Monitor configuration loading
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct MonitorsConfig {
    #[serde(default)]
    pub monitors: Vec<MonitorConfig>,
}

/// One dashboard entry: a display name plus the channel credentials. The
/// strings are opaque; nothing here is validated or deduplicated.
#[derive(Debug, Deserialize, Clone)]
pub struct MonitorConfig {
    pub name: String,
    pub channel: String,
    pub key: String,
    /// Field slots to plot for this channel.
    #[serde(default = "default_fields")]
    pub fields: Vec<u8>,
    /// Entries to request per poll; clamped to the max request size.
    pub results: Option<usize>,
}

fn default_fields() -> Vec<u8> {
    vec![1, 2]
}

pub fn load_monitors_config() -> anyhow::Result<MonitorsConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/monitors"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
