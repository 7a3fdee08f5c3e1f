use std::borrow::Cow;
use std::fmt;

/// A `docker run` invocation held as an argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerCommand {
    args: Vec<String>,
}

impl DockerCommand {
    pub const PROGRAM: &'static str = "docker";

    /// Build `docker run <args...>`.
    pub fn run<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut all = vec!["run".to_string()];
        all.extend(args.into_iter().map(Into::into));
        Self { args: all }
    }

    /// Arguments passed to `docker`, starting with `run`.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Arguments after `run`.
    pub fn run_args(&self) -> &[String] {
        &self.args[1..]
    }
}

/// Renders the command as a shell line. Only used for display; execution
/// always goes through the argument vector.
impl fmt::Display for DockerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::PROGRAM)?;
        for arg in &self.args {
            let quoted = shlex::try_quote(arg).unwrap_or(Cow::Borrowed(arg.as_str()));
            write!(f, " {quoted}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchPlan {
    pub zookeeper: Option<DockerCommand>,
    pub ambassador: Option<DockerCommand>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Docker ran to completion. `None` when it was terminated by a signal.
    Exited(Option<i32>),
    SpawnFailed(String),
}

impl LaunchOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, LaunchOutcome::Exited(Some(0)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchReport {
    pub zookeeper: Option<LaunchOutcome>,
    pub ambassador: Option<LaunchOutcome>,
}
