use reqwest::blocking::{Client, Response};

use crate::config::Config;
use crate::error::{LoggerError, Result};
use crate::history::{HistoryPoint, HistoryStore, Metric};
use crate::sample::Sample;

/// REST client for the realtime database. All writes are full replaces
/// (PUT), authenticated with the database secret as a query parameter.
pub struct Db {
    client: Client,
    base_url: String,
    secret: String,
}

impl Db {
    pub fn connect(config: &Config) -> Result<Self> {
        let client = Client::builder().timeout(config.http_timeout).build()?;

        Ok(Self {
            client,
            base_url: config.database_url.clone(),
            secret: config.database_secret.clone(),
        })
    }

    fn url(&self, node: &str) -> String {
        format!("{}/{node}.json", self.base_url)
    }
}

/// Everything the driver loop needs from the remote store.
pub trait Store: HistoryStore {
    /// Overwrite the `current` record with the latest readings.
    fn put_current(&self, sample: &Sample) -> Result<()>;
}

impl Store for Db {
    fn put_current(&self, sample: &Sample) -> Result<()> {
        let resp = self
            .client
            .put(self.url("current"))
            .query(&[("auth", self.secret.as_str())])
            .json(sample)
            .send()?;
        check_status("current", resp)?;

        Ok(())
    }
}

impl HistoryStore for Db {
    fn fetch_history(&self, metric: Metric) -> Result<Vec<HistoryPoint>> {
        let node = format!("history/{metric}");
        let resp = self
            .client
            .get(self.url(&node))
            .query(&[("auth", self.secret.as_str())])
            .send()?;
        let resp = check_status(&node, resp)?;

        // an empty node comes back as JSON null
        let points: Option<Vec<HistoryPoint>> = resp.json()?;
        Ok(points.unwrap_or_default())
    }

    fn put_history(&self, metric: Metric, points: &[HistoryPoint]) -> Result<()> {
        let node = format!("history/{metric}");
        let resp = self
            .client
            .put(self.url(&node))
            .query(&[("auth", self.secret.as_str())])
            .json(&points)
            .send()?;
        check_status(&node, resp)?;

        Ok(())
    }
}

fn check_status(node: &str, resp: Response) -> Result<Response> {
    let status = resp.status();
    if !status.is_success() {
        return Err(LoggerError::RemoteStatus {
            path: format!("{node}.json"),
            status: status.as_u16(),
            body: resp.text().unwrap_or_default(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn db() -> Db {
        Db::connect(&Config {
            database_url: "https://plant-test.firebaseio.com".into(),
            database_secret: "s3cr3t".into(),
            log_interval: Duration::from_secs(5),
            error_cooldown: Duration::from_secs(10),
            http_timeout: Duration::from_secs(10),
            max_history_points: 50,
        })
        .unwrap()
    }

    #[test]
    fn node_urls() {
        let db = db();
        assert_eq!(
            db.url("current"),
            "https://plant-test.firebaseio.com/current.json"
        );
        assert_eq!(
            db.url("history/temp"),
            "https://plant-test.firebaseio.com/history/temp.json"
        );
    }
}
