use envconfig::Envconfig;

#[derive(Envconfig, Clone)]
pub struct Config {
    #[envconfig(from = "CRASHREPORT_ENDPOINT", default = "https://api.raygun.io")]
    pub endpoint: String,

    #[envconfig(from = "CRASHREPORT_API_KEY", default = "")]
    pub api_key: String,

    #[envconfig(from = "CRASHREPORT_TIMEOUT_SECONDS", default = "5")]
    pub timeout_seconds: u64,
}

impl Config {
    pub fn init_with_defaults() -> Result<Self, envconfig::Error> {
        Self::init_from_env()
    }

    /// Explicit construction, for callers that don't configure through the
    /// environment.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Config {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            timeout_seconds: 5,
        }
    }
}
