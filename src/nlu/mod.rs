//! # NLU: Compreensão do Prompt
//!
//! No modo mock toda a "compreensão" se resume a classificar o prompt
//! em um par `(Topic, Species)`. Veja [`classifier::PromptClassifier`].
//!
//! ```text
//! "My cat has symptoms..."
//!   ├── 1. lowercase
//!   ├── 2. tabela de espécies → cat
//!   └── 3. tabela de tópicos  → symptoms
//! ```

/// Sub-módulo do classificador de tópico/espécie por palavras-chave.
pub mod classifier;

pub use classifier::PromptClassifier;
