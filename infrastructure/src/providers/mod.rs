//! Model backend adapters implementing [`LlmGateway`](pecko_application::LlmGateway)

pub mod openai;

pub use openai::OpenAiGateway;
