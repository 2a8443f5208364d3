//! Chain factory

use std::sync::Arc;

use tracing::info;

use crate::error::Result;
use crate::model::ModelHandle;
use crate::traits::ChatCapability;
use crate::types::{ChainMode, ModelConfig};

use super::few_shot::few_shot_template;
use super::zero_shot::ZeroShotChains;
use super::{Chain, compose};

/// Chains produced for one mode.
#[derive(Debug, Clone)]
pub enum Chains {
    /// explain, split, question
    ZeroShot(ZeroShotChains),
    /// The single exemplar-seeded chain
    FewShot(Chain),
}

impl Chains {
    pub fn mode(&self) -> ChainMode {
        match self {
            Self::ZeroShot(_) => ChainMode::ZeroShot,
            Self::FewShot(_) => ChainMode::FewShot,
        }
    }

    /// Number of chains: 3 or 1
    pub fn len(&self) -> usize {
        self.mode().chain_count()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// All chains in order
    pub fn chains(&self) -> Vec<&Chain> {
        match self {
            Self::ZeroShot(chains) => chains.iter().collect(),
            Self::FewShot(chain) => vec![chain],
        }
    }

    pub fn into_zero_shot(self) -> Option<ZeroShotChains> {
        match self {
            Self::ZeroShot(chains) => Some(chains),
            Self::FewShot(_) => None,
        }
    }

    pub fn into_few_shot(self) -> Option<Chain> {
        match self {
            Self::FewShot(chain) => Some(chain),
            Self::ZeroShot(_) => None,
        }
    }
}

/// Build the chains for `mode` ("zero-shot" or "few-shot").
///
/// The model handle is built from `config` with the stdout token sink.
/// Unknown modes fail with `InvalidMode`.
///
/// # Example
///
/// ```rust,ignore
/// let chains = get_chains("zero-shot", ModelConfig::default(), backend)?;
/// let (explain, split, question) = chains.into_zero_shot().unwrap().into_tuple();
/// ```
pub fn get_chains(
    mode: &str,
    config: ModelConfig,
    backend: Arc<dyn ChatCapability>,
) -> Result<Chains> {
    let mode: ChainMode = mode.parse()?;
    let model = ModelHandle::builder().config(config).backend(backend).build()?;
    build_chains(mode, model)
}

/// Build the chains for `mode` around an existing handle.
pub fn build_chains(mode: ChainMode, model: ModelHandle) -> Result<Chains> {
    let chains = match mode {
        ChainMode::ZeroShot => Chains::ZeroShot(ZeroShotChains::new(model)?),
        ChainMode::FewShot => Chains::FewShot(compose(few_shot_template()?, model)),
    };
    info!(mode = %mode, chains = chains.len(), "chains built");
    Ok(chains)
}
