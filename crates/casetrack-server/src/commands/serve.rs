use anyhow::Context;

use casetrack_config::CasetrackConfig;

use crate::cli::ServeArgs;

/// Apply command-line overrides on top of the loaded configuration.
pub fn apply_overrides(config: &mut CasetrackConfig, args: &ServeArgs) {
    if let Some(ref host) = args.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref database) = args.database {
        config.database.path.clone_from(database);
    }
}

/// Handle `casetrack serve`.
pub async fn handle(args: &ServeArgs, mut config: CasetrackConfig) -> anyhow::Result<()> {
    apply_overrides(&mut config, args);
    config
        .validate()
        .context("invalid configuration after command-line overrides")?;
    casetrack_server::serve(&config).await
}
