/// Launcher arguments, split around the first `--`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentSet {
    pub no_zookeeper: bool,
    pub no_dash_p: bool,
    /// Values of every `-p` given before `--`, in the order supplied.
    pub publish: Vec<String>,
    /// Unrecognized arguments before `--`, forwarded to the Zookeeper container.
    pub container_args: Vec<String>,
    /// Everything after the first `--`. `None` when no separator was given.
    pub ambassador_args: Option<Vec<String>>,
}

impl ArgumentSet {
    pub fn wants_ambassador(&self) -> bool {
        self.ambassador_args.is_some()
    }
}
