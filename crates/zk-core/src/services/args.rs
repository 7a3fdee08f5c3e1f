use crate::error::{LauncherError, Result};
use crate::models::ArgumentSet;

const SEPARATOR: &str = "--";
const NO_ZOOKEEPER: &str = "--no-zookeeper";
const NO_DASH_P: &str = "--no-dash-p";
const LONG_FLAGS: [&str; 2] = [NO_ZOOKEEPER, NO_DASH_P];
const PUBLISH: &str = "-p";

/// Leading `argv` entries that belong to the invoking wrapper: the program
/// itself and the script path the wrapper passes ahead of the real arguments.
pub const WRAPPER_ARGV_ENTRIES: usize = 2;

/// Launcher arguments out of a full process `argv`.
pub fn launcher_args(argv: impl IntoIterator<Item = String>) -> Vec<String> {
    argv.into_iter().skip(WRAPPER_ARGV_ENTRIES).collect()
}

/// Split on the first `--`. Later separators stay in the ambassador half.
pub fn split_at_separator(args: &[String]) -> (&[String], Option<&[String]>) {
    match args.iter().position(|a| a == SEPARATOR) {
        Some(idx) => (&args[..idx], Some(&args[idx + 1..])),
        None => (args, None),
    }
}

/// Match a token against the long flags, accepting unambiguous prefixes.
fn resolve_long_flag(token: &str) -> Result<Option<&'static str>> {
    let (option, explicit) = match token.split_once('=') {
        Some((option, value)) => (option, Some(value)),
        None => (token, None),
    };
    if !option.starts_with(SEPARATOR) || option.len() <= SEPARATOR.len() {
        return Ok(None);
    }

    let candidates: Vec<&'static str> = match LONG_FLAGS.iter().find(|f| **f == option) {
        Some(exact) => vec![*exact],
        None => LONG_FLAGS
            .iter()
            .copied()
            .filter(|f| f.starts_with(option))
            .collect(),
    };
    let flag = match candidates.as_slice() {
        [] => return Ok(None),
        [flag] => *flag,
        _ => {
            return Err(LauncherError::InvalidArgument(format!(
                "ambiguous option: {option} could match {}",
                candidates.join(", ")
            )));
        }
    };
    if let Some(value) = explicit {
        return Err(LauncherError::InvalidArgument(format!(
            "argument {flag}: ignored explicit argument '{value}'"
        )));
    }
    Ok(Some(flag))
}

/// Parse launcher arguments.
///
/// Only `--no-zookeeper`, `--no-dash-p` (or unambiguous prefixes of them)
/// and `-p` are recognized before the separator; anything else is kept, in
/// order, for the Zookeeper container. There is no help flag: `-h` belongs
/// to `docker run`.
pub fn parse_args(args: &[String]) -> Result<ArgumentSet> {
    let (own, ambassador) = split_at_separator(args);
    let mut parsed = ArgumentSet {
        ambassador_args: ambassador.map(<[String]>::to_vec),
        ..ArgumentSet::default()
    };
    // The two long flags are mutually exclusive; remember which came first.
    let mut first_flag: Option<&'static str> = None;

    let mut tokens = own.iter();
    while let Some(token) = tokens.next() {
        if let Some(flag) = resolve_long_flag(token)? {
            match first_flag {
                Some(first) if first != flag => {
                    return Err(LauncherError::InvalidArgument(format!(
                        "argument {flag}: not allowed with argument {first}"
                    )));
                }
                _ => first_flag = Some(flag),
            }
            if flag == NO_ZOOKEEPER {
                parsed.no_zookeeper = true;
            } else {
                parsed.no_dash_p = true;
            }
            continue;
        }

        if token == PUBLISH {
            let value = tokens
                .next()
                .filter(|v| !v.starts_with('-'))
                .ok_or_else(|| {
                    LauncherError::InvalidArgument("argument -p: expected one argument".into())
                })?;
            parsed.publish.push(value.clone());
            continue;
        }

        match token.strip_prefix(PUBLISH) {
            Some(value) if !value.is_empty() => parsed.publish.push(value.to_string()),
            _ => parsed.container_args.push(token.clone()),
        }
    }

    tracing::debug!(?parsed, "parsed launcher arguments");
    Ok(parsed)
}
