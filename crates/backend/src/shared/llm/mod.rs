pub mod credential;
pub mod openai_provider;
pub mod types;

pub use credential::{CredentialSource, EnvCredential};
pub use openai_provider::{OpenAiFactory, OpenAiProvider};
pub use types::*;
