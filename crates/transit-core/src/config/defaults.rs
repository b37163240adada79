// Single source of truth for all default values.

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "openai";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 1536;
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_EMBEDDING_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_EMBEDDING_MAX_RETRIES: u32 = 1;
pub const MAX_EMBEDDING_RETRIES: u32 = 10;
pub const DEFAULT_QUERY_CACHE_SIZE: u64 = 1_000;
pub const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/embeddings";
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";

// --- Intent classification ---
pub const DEFAULT_PRIMARY_THRESHOLD: f64 = 0.65;
pub const DEFAULT_SECONDARY_THRESHOLD: f64 = 0.58;
pub const DEFAULT_MAX_INTENTS: usize = 3;
pub const DEFAULT_MAX_WEIGHT: f64 = 0.7;
pub const DEFAULT_TOP_K: usize = 3;
pub const DEFAULT_GENERAL_LABEL: &str = "general";
pub const DEFAULT_FALLBACK_CONFIDENCE: f64 = 0.5;
pub const DEFAULT_PARALLEL_INIT: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_DEGRADATION_HISTORY: usize = 256;
