const PREFIX_FLAG: &str = "--prefix";

/// Command-line overrides for the demo window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupConfig {
    pub prefix_override: Option<String>,
}

impl StartupConfig {
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            if arg == PREFIX_FLAG {
                match args.next() {
                    Some(value) => config.prefix_override = Some(value),
                    None => tracing::warn!("{PREFIX_FLAG} requires a value; ignoring"),
                }
            } else if let Some(value) = arg
                .strip_prefix(PREFIX_FLAG)
                .and_then(|rest| rest.strip_prefix('='))
            {
                config.prefix_override = Some(value.to_string());
            } else {
                tracing::warn!(arg = %arg, "ignoring unknown argument");
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_args_reads_separate_and_inline_prefix_values() {
        assert_eq!(
            StartupConfig::from_args(["--prefix", "editor-"]).prefix_override,
            Some("editor-".to_string())
        );
        assert_eq!(
            StartupConfig::from_args(["--prefix=preview-"]).prefix_override,
            Some("preview-".to_string())
        );
    }

    #[test]
    fn from_args_ignores_unknown_and_dangling_flags() {
        assert_eq!(
            StartupConfig::from_args(["--verbose", "--prefix"]),
            StartupConfig::default()
        );
        assert_eq!(
            StartupConfig::from_args(Vec::<String>::new()),
            StartupConfig::default()
        );
    }
}
