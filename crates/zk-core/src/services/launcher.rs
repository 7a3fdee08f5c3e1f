use crate::error::{LauncherError, Result};
use crate::models::cluster::ZOOKEEPER_SERVICE;
use crate::models::{DockerCommand, LaunchOutcome, LaunchPlan, LaunchReport};
use crate::services::args::parse_args;
use crate::services::docker::CommandRunner;
use crate::services::docker_run::{publish_flags, split_publish_flags};
use crate::services::environment::ClusterEnvironment;

/// Work out which containers to start and the exact `docker run` commands.
///
/// The host check comes first: nothing is parsed or planned on a machine
/// that is not one of the configured Zookeeper servers.
pub async fn plan<E>(env: &E, raw_args: &[String]) -> Result<LaunchPlan>
where
    E: ClusterEnvironment + ?Sized,
{
    let config = env.load_cluster_config().await?;
    let local_addresses = env
        .resolve_local_addresses(
            config.is_localhost_setup,
            config.all_machines_are_ec2_instances,
        )
        .await?;
    let server = config
        .local_zookeeper_server(&local_addresses)
        .ok_or(LauncherError::ConfigurationMismatch)?;
    tracing::debug!(server, "this host is a configured zookeeper server");

    let args = parse_args(raw_args)?;
    if args.no_zookeeper && !args.wants_ambassador() {
        return Err(LauncherError::NoContainerRequested);
    }

    let mut port_flags = env.build_port_publish_flags(&config, &[ZOOKEEPER_SERVICE]);
    let mut withheld = Vec::new();
    if args.no_dash_p {
        (port_flags, withheld) = split_publish_flags(port_flags);
    }

    let zookeeper = if args.no_zookeeper {
        None
    } else {
        port_flags.extend(publish_flags(&args.publish));
        let container_args =
            env.build_container_args(&config, &args.container_args, &local_addresses);
        Some(DockerCommand::run(port_flags.into_iter().chain(container_args)))
    };

    let ambassador = args
        .ambassador_args
        .map(|ambassador_args| DockerCommand::run(withheld.into_iter().chain(ambassador_args)));

    Ok(LaunchPlan {
        zookeeper,
        ambassador,
    })
}

/// Launch the planned containers, Zookeeper first.
///
/// Launches are independent: the ambassador is started whatever happened to
/// the Zookeeper launch. Outcomes are reported, never escalated to errors.
pub async fn execute<R>(plan: &LaunchPlan, runner: &R) -> LaunchReport
where
    R: CommandRunner + ?Sized,
{
    let mut report = LaunchReport::default();
    if let Some(command) = &plan.zookeeper {
        report.zookeeper = Some(launch("zookeeper", command, runner).await);
    }
    if let Some(command) = &plan.ambassador {
        report.ambassador = Some(launch("ambassador", command, runner).await);
    }
    report
}

async fn launch<R>(container: &str, command: &DockerCommand, runner: &R) -> LaunchOutcome
where
    R: CommandRunner + ?Sized,
{
    println!("{command}");
    tracing::info!(container, "launching container");
    match runner.run(command).await {
        Ok(code) => {
            if code != Some(0) {
                tracing::warn!(container, ?code, "docker run exited unsuccessfully");
            }
            LaunchOutcome::Exited(code)
        }
        Err(e) => {
            tracing::warn!(container, "launch failed: {e}");
            LaunchOutcome::SpawnFailed(e.to_string())
        }
    }
}

/// Plan and execute in one step.
pub async fn run<E, R>(env: &E, runner: &R, raw_args: &[String]) -> Result<LaunchReport>
where
    E: ClusterEnvironment + ?Sized,
    R: CommandRunner + ?Sized,
{
    let plan = plan(env, raw_args).await?;
    Ok(execute(&plan, runner).await)
}
