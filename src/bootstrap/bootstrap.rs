use std::path::{Path, PathBuf};

use strum_macros::{Display, EnumIter};
use tracing::debug;

use crate::{
    activate::{Activation, EnvironmentActivator},
    config::LayoutConfig,
    env::Exports,
    error::Res,
    layout::Layout,
};

/// Steps of the bootstrap sequence, in order. A failure in any step ends the
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Step {
    #[strum(serialize = "resolve self")]
    Resolve,
    #[strum(serialize = "load config")]
    Configure,
    #[strum(serialize = "compute root")]
    ComputeRoot,
    #[strum(serialize = "publish root")]
    Publish,
    #[strum(serialize = "activate environment")]
    Activate,
}

pub struct Bootstrapped {
    pub layout: Layout,
    pub activation: Activation,
}

/// Run the bootstrap sequence from the entry point's directory: compute the
/// project root, publish it into `exports` and activate the environment.
/// `exports` keeps whatever was published even when activation fails.
pub fn bootstrap(
    script: PathBuf,
    config: &LayoutConfig,
    activator: &dyn EnvironmentActivator,
    exports: &mut Exports,
) -> Res<Bootstrapped> {
    enter(Step::ComputeRoot);
    let layout = Layout::compute(script, config.levels, &config.environment)?;
    eprintln!("Root dir: {}", layout.root().display());

    enter(Step::Publish);
    publish_root(exports, &config.variable, layout.root());

    enter(Step::Activate);
    let activation = activator.activate(layout.environment(), exports)?;

    debug!("Bootstrap done");
    Ok(Bootstrapped { layout, activation })
}

/// Publish the project root under `variable`. Running it again with the same
/// root leaves `exports` unchanged.
pub fn publish_root(exports: &mut Exports, variable: &str, root: &Path) {
    exports.set(variable, root.as_os_str());
}

fn enter(step: Step) {
    debug!("Step: {}", step);
}
