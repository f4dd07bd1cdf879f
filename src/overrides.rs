//! User binding overrides layered over a behavior's built-in table.

use std::path::Path;
use std::sync::Arc;

use behavior_kit_config::BindingsConfig;
use behavior_kit_keybindings::{ActionRegistry, InputBindings};

use crate::error::BehaviorError;

/// Put `config`'s bindings in front of `defaults`.
///
/// User entries fire first; built-in bindings still fire after them. An empty
/// config returns `defaults` unchanged.
pub fn with_overrides<B>(
    defaults: &Arc<InputBindings<B>>,
    config: &BindingsConfig,
    actions: &ActionRegistry<B>,
) -> Arc<InputBindings<B>> {
    if config.is_empty() {
        return Arc::clone(defaults);
    }
    let user = Arc::new(InputBindings::from_config(&config.bindings, actions));
    Arc::new(InputBindings::combine([user, Arc::clone(defaults)]))
}

/// [`with_overrides`] using the config file at the default location.
pub fn load_overrides<B>(
    defaults: &Arc<InputBindings<B>>,
    actions: &ActionRegistry<B>,
) -> Result<Arc<InputBindings<B>>, BehaviorError> {
    let config = BindingsConfig::load()?;
    Ok(with_overrides(defaults, &config, actions))
}

/// [`with_overrides`] using the config file at `path`.
pub fn load_overrides_from<B>(
    path: &Path,
    defaults: &Arc<InputBindings<B>>,
    actions: &ActionRegistry<B>,
) -> Result<Arc<InputBindings<B>>, BehaviorError> {
    let config = BindingsConfig::load_from_path(path)?;
    Ok(with_overrides(defaults, &config, actions))
}
