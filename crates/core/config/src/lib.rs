use cached::proc_macro::cached;
use config::{Config, File, FileFormat};
use futures_locks::RwLock;
use once_cell::sync::Lazy;
use serde::Deserialize;

static CONFIG_BUILDER: Lazy<RwLock<Config>> = Lazy::new(|| {
    RwLock::new({
        let mut builder = Config::builder().add_source(File::from_str(
            include_str!("../Gather.toml"),
            FileFormat::Toml,
        ));

        if std::path::Path::new("Gather.toml").exists() {
            builder = builder.add_source(File::new("Gather.toml", FileFormat::Toml));
        }

        builder.build().unwrap()
    })
});

#[derive(Deserialize, Debug, Clone)]
pub struct Database {
    pub mongodb: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Moderation {
    /// Pending reports required before an event is automatically hidden
    pub report_threshold: u64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub database: Database,
    pub moderation: Moderation,
}

pub async fn init() {
    println!(
        ":: Gather Configuration ::\n\x1b[32m{:?}\x1b[0m",
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

    #[async_std::test]
    async fn it_works() {
        let settings = config().await;
        assert_eq!(settings.moderation.report_threshold, 3);
    }
}
