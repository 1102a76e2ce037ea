//! Number suppliers that produce secret sequences.

use crate::{StartError, SupplierConfig, SupplierError, SupplierKind};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Mutex;
use std::time::Duration;
use strictly_mastermind::{GameConfig, GameSession, SecretSequence};
use tracing::{debug, info, instrument, warn};

/// Source of `count` integers in `[min, max]`.
#[async_trait::async_trait]
pub trait NumberSupplier: Send + Sync {
    /// Fetches exactly `count` integers, each within `[min, max]`.
    async fn fetch(&self, count: usize, min: i32, max: i32) -> Result<Vec<i32>, SupplierError>;

    /// Returns the supplier's display name.
    fn name(&self) -> &str;
}

/// Integer generator backed by random.org's plain-text API.
#[derive(Debug, Clone)]
pub struct RandomOrgSupplier {
    endpoint: String,
    client: reqwest::Client,
}

impl RandomOrgSupplier {
    /// Creates a supplier for `endpoint` with a request timeout.
    #[instrument]
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, SupplierError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.to_string(),
            client,
        })
    }

    /// Builds the request URL: one base-10 column of fresh integers.
    pub fn request_url(
        &self,
        count: usize,
        min: i32,
        max: i32,
    ) -> Result<reqwest::Url, SupplierError> {
        reqwest::Url::parse_with_params(
            &self.endpoint,
            &[
                ("num", count.to_string()),
                ("min", min.to_string()),
                ("max", max.to_string()),
                ("col", "1".to_string()),
                ("base", "10".to_string()),
                ("format", "plain".to_string()),
                ("rnd", "new".to_string()),
            ],
        )
        .map_err(|e| SupplierError::new(format!("Invalid endpoint {}: {}", self.endpoint, e)))
    }
}

#[async_trait::async_trait]
impl NumberSupplier for RandomOrgSupplier {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch(&self, count: usize, min: i32, max: i32) -> Result<Vec<i32>, SupplierError> {
        let url = self.request_url(count, min, max)?;
        debug!(%url, "Requesting integers");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Integer generator request failed");
            return Err(SupplierError::new(format!(
                "Integer generator returned {}",
                status
            )));
        }

        let body = response.text().await?;
        let values = parse_plain_response(&body, count, min, max)?;
        info!(count, "Integer generator request succeeded");
        Ok(values)
    }

    fn name(&self) -> &str {
        "random.org"
    }
}

/// Parses a newline-separated plain-text integer list.
///
/// # Errors
///
/// Fails on a non-integer line, a count other than `count`, or a value
/// outside `[min, max]`.
#[instrument(skip(body))]
pub fn parse_plain_response(
    body: &str,
    count: usize,
    min: i32,
    max: i32,
) -> Result<Vec<i32>, SupplierError> {
    let values = body
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.parse::<i32>()
                .map_err(|e| SupplierError::new(format!("Unparseable line '{}': {}", line, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.len() != count {
        return Err(SupplierError::new(format!(
            "Expected {} integers, got {}",
            count,
            values.len()
        )));
    }

    if let Some(value) = values.iter().find(|v| !(min..=max).contains(*v)) {
        return Err(SupplierError::new(format!(
            "Value {} outside [{}, {}]",
            value, min, max
        )));
    }

    Ok(values)
}

/// In-process supplier using a ChaCha generator.
#[derive(Debug)]
pub struct LocalSupplier {
    rng: Mutex<ChaCha8Rng>,
}

impl LocalSupplier {
    /// Creates a supplier; a seed makes the output reproducible.
    #[instrument]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

#[async_trait::async_trait]
impl NumberSupplier for LocalSupplier {
    #[instrument(skip(self))]
    async fn fetch(&self, count: usize, min: i32, max: i32) -> Result<Vec<i32>, SupplierError> {
        if min > max {
            return Err(SupplierError::new(format!("Empty range [{}, {}]", min, max)));
        }
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| SupplierError::new("Random generator lock poisoned"))?;
        Ok((0..count).map(|_| rng.gen_range(min..=max)).collect())
    }

    fn name(&self) -> &str {
        "local"
    }
}

/// Supplier that always returns the same values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSupplier {
    values: Vec<i32>,
}

impl FixedSupplier {
    /// Creates a supplier returning `values`.
    pub fn new(values: Vec<i32>) -> Self {
        Self { values }
    }
}

#[async_trait::async_trait]
impl NumberSupplier for FixedSupplier {
    #[instrument(skip(self))]
    async fn fetch(&self, count: usize, _min: i32, _max: i32) -> Result<Vec<i32>, SupplierError> {
        if self.values.len() != count {
            return Err(SupplierError::new(format!(
                "Fixed sequence has {} values, {} requested",
                self.values.len(),
                count
            )));
        }
        Ok(self.values.clone())
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Builds the supplier named by `config`.
#[instrument]
pub fn build_supplier(config: &SupplierConfig) -> Result<Box<dyn NumberSupplier>, SupplierError> {
    let supplier: Box<dyn NumberSupplier> = match config.kind() {
        SupplierKind::RandomOrg => Box::new(RandomOrgSupplier::new(
            config.endpoint(),
            Duration::from_secs(*config.timeout_secs()),
        )?),
        SupplierKind::Local => Box::new(LocalSupplier::new(*config.seed())),
    };
    Ok(supplier)
}

/// Fetches a secret from `supplier` and binds a new session to it.
///
/// The config is validated before the supplier is asked for anything. On
/// supplier failure no session is created.
#[instrument(skip(supplier), fields(source = supplier.name()))]
pub async fn start_game(
    supplier: &dyn NumberSupplier,
    config: GameConfig,
) -> Result<GameSession, StartError> {
    config.validate()?;
    let values = supplier
        .fetch(
            *config.sequence_length(),
            *config.number_min(),
            *config.number_max(),
        )
        .await?;
    let secret = SecretSequence::from_config(values, &config)?;
    info!("Secret ready, starting session");
    Ok(GameSession::new(secret, config)?)
}
