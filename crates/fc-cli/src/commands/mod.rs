pub mod budget;
pub mod check;
pub mod cost;
pub mod notation;
pub mod roll;
pub mod sheet;
pub mod skill;
pub mod skills;

use std::path::Path;

use fc_mechanics::{RulesConfig, Snapshot};

fn read(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("cannot read '{}': {e}", path.display()))
}

/// Load a character snapshot together with its optional settings and
/// injury files. Missing files mean default settings and no injuries.
fn load_snapshot(
    character: &Path,
    settings: Option<&Path>,
    injuries: Option<&Path>,
) -> Result<Snapshot, String> {
    let mut snapshot = Snapshot::from_json(&read(character)?)
        .map_err(|e| format!("{}: {e}", character.display()))?;
    if let Some(path) = settings {
        snapshot = snapshot
            .with_settings_json(&read(path)?)
            .map_err(|e| format!("{}: {e}", path.display()))?;
    }
    if let Some(path) = injuries {
        snapshot = snapshot
            .with_injuries_json(&read(path)?)
            .map_err(|e| format!("{}: {e}", path.display()))?;
    }
    Ok(snapshot)
}

/// Load a rules file, or the Fallcrest rules if no file is given.
fn load_rules(path: Option<&Path>) -> Result<RulesConfig, String> {
    match path {
        Some(path) => {
            RulesConfig::from_json(&read(path)?).map_err(|e| format!("{}: {e}", path.display()))
        }
        None => Ok(RulesConfig::default()),
    }
}
