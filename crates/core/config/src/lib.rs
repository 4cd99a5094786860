use config::{Config, File, FileFormat};
use futures_locks::RwLock;
use once_cell::sync::Lazy;
use serde::Deserialize;

use cached::proc_macro::cached;

static CONFIG_BUILDER: Lazy<RwLock<Config>> = Lazy::new(|| {
    RwLock::new({
        let mut builder = Config::builder().add_source(File::from_str(
            include_str!("../Trailhead.toml"),
            FileFormat::Toml,
        ));

        if std::path::Path::new("Trailhead.toml").exists() {
            builder = builder.add_source(File::new("Trailhead.toml", FileFormat::Toml));
        }

        builder.build().unwrap()
    })
});

#[derive(Deserialize, Debug, Clone)]
pub struct Database {
    /// MongoDB connection URI; the in-memory reference
    /// database is used when this is left empty
    pub mongodb: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub production: bool,
    pub database: Database,
}

pub async fn init() {
    println!(
        ":: Trailhead Configuration ::\n\x1b[32m{:?}\x1b[0m",
        config().await
    );
}

pub async fn read() -> Config {
    CONFIG_BUILDER.read().await.clone()
}

#[cached(time = 30)]
pub async fn config() -> Settings {
    read().await.try_deserialize::<Settings>().unwrap()
}

#[cfg(test)]
mod tests {
    use crate::config;

    #[tokio::test]
    async fn it_works() {
        let settings = config().await;
        assert!(!settings.production);
    }
}
